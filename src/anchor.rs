//! Anchors and the anchor surface exposed by views and layout guides.
//!
//! Anchors are split by kind: horizontal positions (`XAnchor`), vertical
//! positions (`YAnchor`) and size dimensions (`DimensionAnchor`). A builder
//! method only accepts the anchor kind that matches its own attribute, so
//! attaching a vertical anchor to `left`, or a position to `width`, is a
//! compile error rather than a malformed constraint.

use std::fmt;

/// Horizontal position attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum XAttribute {
    Left,
    Right,
    /// Resolves to left or right depending on the engine's layout direction.
    Leading,
    /// Resolves to right or left depending on the engine's layout direction.
    Trailing,
    CenterX,
}

/// Vertical position attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum YAttribute {
    Top,
    Bottom,
    CenterY,
}

/// Size attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DimensionAttribute {
    Width,
    Height,
}

/// Any constrainable attribute of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    Left,
    Right,
    Leading,
    Trailing,
    CenterX,
    Top,
    Bottom,
    CenterY,
    Width,
    Height,
}

impl From<XAttribute> for Attribute {
    fn from(attr: XAttribute) -> Self {
        match attr {
            XAttribute::Left => Attribute::Left,
            XAttribute::Right => Attribute::Right,
            XAttribute::Leading => Attribute::Leading,
            XAttribute::Trailing => Attribute::Trailing,
            XAttribute::CenterX => Attribute::CenterX,
        }
    }
}

impl From<YAttribute> for Attribute {
    fn from(attr: YAttribute) -> Self {
        match attr {
            YAttribute::Top => Attribute::Top,
            YAttribute::Bottom => Attribute::Bottom,
            YAttribute::CenterY => Attribute::CenterY,
        }
    }
}

impl From<DimensionAttribute> for Attribute {
    fn from(attr: DimensionAttribute) -> Self {
        match attr {
            DimensionAttribute::Width => Attribute::Width,
            DimensionAttribute::Height => Attribute::Height,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Attribute::Left => "left",
            Attribute::Right => "right",
            Attribute::Leading => "leading",
            Attribute::Trailing => "trailing",
            Attribute::CenterX => "center_x",
            Attribute::Top => "top",
            Attribute::Bottom => "bottom",
            Attribute::CenterY => "center_y",
            Attribute::Width => "width",
            Attribute::Height => "height",
        };
        f.write_str(name)
    }
}

/// An attribute of a named item, untyped. Used inside constraint descriptors;
/// the typed anchors below are the only way callers produce one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorRef {
    pub item: String,
    pub attribute: Attribute,
}

/// A horizontal position anchor of a view or layout guide.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XAnchor {
    pub item: String,
    pub attribute: XAttribute,
}

/// A vertical position anchor of a view or layout guide.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YAnchor {
    pub item: String,
    pub attribute: YAttribute,
}

/// A size anchor of a view or layout guide.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionAnchor {
    pub item: String,
    pub attribute: DimensionAttribute,
}

impl XAnchor {
    pub(crate) fn to_ref(&self) -> AnchorRef {
        AnchorRef {
            item: self.item.clone(),
            attribute: self.attribute.into(),
        }
    }
}

impl YAnchor {
    pub(crate) fn to_ref(&self) -> AnchorRef {
        AnchorRef {
            item: self.item.clone(),
            attribute: self.attribute.into(),
        }
    }
}

impl DimensionAnchor {
    pub(crate) fn to_ref(&self) -> AnchorRef {
        AnchorRef {
            item: self.item.clone(),
            attribute: self.attribute.into(),
        }
    }
}

/// The full anchor surface of an item that can sit on either side of a
/// constraint. Implemented by [`View`](crate::View) and
/// [`LayoutGuide`](crate::LayoutGuide); composite helpers are generic over it,
/// so pinning to a guide and pinning to a view are the same call.
pub trait AnchorSurface {
    /// Name identifying this item inside its engine.
    fn layout_name(&self) -> &str;

    fn left(&self) -> XAnchor {
        self.x_anchor(XAttribute::Left)
    }

    fn right(&self) -> XAnchor {
        self.x_anchor(XAttribute::Right)
    }

    fn leading(&self) -> XAnchor {
        self.x_anchor(XAttribute::Leading)
    }

    fn trailing(&self) -> XAnchor {
        self.x_anchor(XAttribute::Trailing)
    }

    fn center_x(&self) -> XAnchor {
        self.x_anchor(XAttribute::CenterX)
    }

    fn top(&self) -> YAnchor {
        self.y_anchor(YAttribute::Top)
    }

    fn bottom(&self) -> YAnchor {
        self.y_anchor(YAttribute::Bottom)
    }

    fn center_y(&self) -> YAnchor {
        self.y_anchor(YAttribute::CenterY)
    }

    fn width(&self) -> DimensionAnchor {
        self.dimension_anchor(DimensionAttribute::Width)
    }

    fn height(&self) -> DimensionAnchor {
        self.dimension_anchor(DimensionAttribute::Height)
    }

    fn x_anchor(&self, attribute: XAttribute) -> XAnchor {
        XAnchor {
            item: self.layout_name().to_string(),
            attribute,
        }
    }

    fn y_anchor(&self, attribute: YAttribute) -> YAnchor {
        YAnchor {
            item: self.layout_name().to_string(),
            attribute,
        }
    }

    fn dimension_anchor(&self, attribute: DimensionAttribute) -> DimensionAnchor {
        DimensionAnchor {
            item: self.layout_name().to_string(),
            attribute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl AnchorSurface for Named {
        fn layout_name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_anchor_accessors_carry_item_name() {
        let item = Named("sidebar");
        assert_eq!(item.left().item, "sidebar");
        assert_eq!(item.left().attribute, XAttribute::Left);
        assert_eq!(item.bottom().attribute, YAttribute::Bottom);
        assert_eq!(item.height().attribute, DimensionAttribute::Height);
    }

    #[test]
    fn test_attribute_display_names() {
        assert_eq!(Attribute::CenterX.to_string(), "center_x");
        assert_eq!(Attribute::Leading.to_string(), "leading");
        assert_eq!(Attribute::Width.to_string(), "width");
    }

    #[test]
    fn test_axis_attributes_convert_to_unified() {
        assert_eq!(Attribute::from(XAttribute::Trailing), Attribute::Trailing);
        assert_eq!(Attribute::from(YAttribute::CenterY), Attribute::CenterY);
        assert_eq!(Attribute::from(DimensionAttribute::Width), Attribute::Width);
    }
}
