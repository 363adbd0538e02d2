//! Constraint descriptors and the relation mapping.
//!
//! A [`Constraint`] is a plain value describing one layout relationship:
//! `owner.attribute <relation> multiplier * target + constant`. Descriptors are
//! inert until the engine activates them; nothing here touches the solver.

use std::fmt;

use crate::anchor::{AnchorRef, Attribute};

/// Relation between the owner attribute and its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relation {
    #[default]
    Equal,
    LessOrEqual,
    GreaterOrEqual,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Relation::Equal => "=",
            Relation::LessOrEqual => "<=",
            Relation::GreaterOrEqual => ">=",
        };
        f.write_str(symbol)
    }
}

/// Right-hand side of a constraint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    /// An attribute of another item (or of the owner itself).
    Anchor(AnchorRef),
    /// A raw value; only produced by the constant width/height calls.
    Constant(f64),
    /// System-default spacing after a horizontal anchor, scaled by the
    /// descriptor's multiplier. Resolved by the engine at activation.
    SpacingAfter(AnchorRef),
    /// System-default spacing below a vertical anchor, scaled by the
    /// descriptor's multiplier.
    SpacingBelow(AnchorRef),
}

/// One to-be-activated layout relationship.
///
/// Created by [`LayoutBuilder`](crate::LayoutBuilder) calls and owned by the
/// builder's accumulation list until activation. After activation the engine
/// keeps the live counterpart until the descriptor is explicitly deactivated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    /// Item whose attribute is being constrained.
    pub owner: String,
    /// The owner's constrained attribute.
    pub attribute: Attribute,
    pub target: Target,
    pub relation: Relation,
    /// Additive offset. For spacing targets this is unused (always 0).
    pub constant: f64,
    /// Scales the target. 1 for positional anchors; meaningful for
    /// dimension-to-dimension relations and for spacing targets, where it
    /// scales the system spacing.
    pub multiplier: f64,
}

impl Constraint {
    /// Positional attachment: `owner.attribute <relation> target + constant`.
    pub(crate) fn positional(
        owner: impl Into<String>,
        attribute: impl Into<Attribute>,
        target: AnchorRef,
        relation: Relation,
        constant: f64,
    ) -> Self {
        Self {
            owner: owner.into(),
            attribute: attribute.into(),
            target: Target::Anchor(target),
            relation,
            constant,
            multiplier: 1.0,
        }
    }

    /// Dimensional attachment:
    /// `owner.attribute <relation> multiplier * target + constant`.
    pub(crate) fn dimensional(
        owner: impl Into<String>,
        attribute: impl Into<Attribute>,
        target: AnchorRef,
        relation: Relation,
        multiplier: f64,
        constant: f64,
    ) -> Self {
        Self {
            owner: owner.into(),
            attribute: attribute.into(),
            target: Target::Anchor(target),
            relation,
            constant,
            multiplier,
        }
    }

    /// Fixed dimension: `owner.attribute <relation> value`.
    pub(crate) fn fixed(
        owner: impl Into<String>,
        attribute: impl Into<Attribute>,
        value: f64,
        relation: Relation,
    ) -> Self {
        Self {
            owner: owner.into(),
            attribute: attribute.into(),
            target: Target::Constant(value),
            relation,
            constant: 0.0,
            multiplier: 1.0,
        }
    }

    /// System spacing after a horizontal anchor, scaled by `multiplier`.
    pub(crate) fn spaced_after(
        owner: impl Into<String>,
        attribute: impl Into<Attribute>,
        target: AnchorRef,
        relation: Relation,
        multiplier: f64,
    ) -> Self {
        Self {
            owner: owner.into(),
            attribute: attribute.into(),
            target: Target::SpacingAfter(target),
            relation,
            constant: 0.0,
            multiplier,
        }
    }

    /// System spacing below a vertical anchor, scaled by `multiplier`.
    pub(crate) fn spaced_below(
        owner: impl Into<String>,
        attribute: impl Into<Attribute>,
        target: AnchorRef,
        relation: Relation,
        multiplier: f64,
    ) -> Self {
        Self {
            owner: owner.into(),
            attribute: attribute.into(),
            target: Target::SpacingBelow(target),
            relation,
            constant: 0.0,
            multiplier,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} {} ", self.owner, self.attribute, self.relation)?;
        match &self.target {
            Target::Constant(value) => write!(f, "{}", value)?,
            Target::Anchor(anchor) => {
                if self.multiplier != 1.0 {
                    write!(f, "{} * ", self.multiplier)?;
                }
                write!(f, "{}.{}", anchor.item, anchor.attribute)?;
                if self.constant > 0.0 {
                    write!(f, " + {}", self.constant)?;
                } else if self.constant < 0.0 {
                    write!(f, " - {}", -self.constant)?;
                }
            }
            Target::SpacingAfter(anchor) | Target::SpacingBelow(anchor) => {
                write!(
                    f,
                    "{}.{} + {} * spacing",
                    anchor.item, anchor.attribute, self.multiplier
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::{XAttribute, YAttribute};

    fn anchor(item: &str, attribute: impl Into<Attribute>) -> AnchorRef {
        AnchorRef {
            item: item.to_string(),
            attribute: attribute.into(),
        }
    }

    #[test]
    fn test_positional_descriptor_defaults_multiplier_to_one() {
        let c = Constraint::positional(
            "badge",
            YAttribute::Top,
            anchor("root", YAttribute::Top),
            Relation::Equal,
            8.0,
        );
        assert_eq!(c.multiplier, 1.0);
        assert_eq!(c.constant, 8.0);
        assert_eq!(c.attribute, Attribute::Top);
    }

    #[test]
    fn test_descriptor_rendering() {
        let c = Constraint::positional(
            "badge",
            YAttribute::Top,
            anchor("root", YAttribute::Top),
            Relation::Equal,
            8.0,
        );
        insta::assert_snapshot!(c.to_string(), @"badge.top = root.top + 8");

        let c = Constraint::dimensional(
            "badge",
            crate::anchor::DimensionAttribute::Width,
            anchor("root", crate::anchor::DimensionAttribute::Width),
            Relation::LessOrEqual,
            0.5,
            -4.0,
        );
        insta::assert_snapshot!(c.to_string(), @"badge.width <= 0.5 * root.width - 4");

        let c = Constraint::fixed(
            "badge",
            crate::anchor::DimensionAttribute::Height,
            20.0,
            Relation::GreaterOrEqual,
        );
        insta::assert_snapshot!(c.to_string(), @"badge.height >= 20");

        let c = Constraint::spaced_after(
            "badge",
            XAttribute::Leading,
            anchor("root", XAttribute::Trailing),
            Relation::Equal,
            2.0,
        );
        insta::assert_snapshot!(c.to_string(), @"badge.leading = root.trailing + 2 * spacing");
    }

    #[test]
    fn test_relation_default_is_equal() {
        assert_eq!(Relation::default(), Relation::Equal);
    }
}
