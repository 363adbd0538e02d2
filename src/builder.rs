//! Fluent accumulation of constraint descriptors for one owner view.

use crate::anchor::{DimensionAnchor, DimensionAttribute, XAnchor, XAttribute, YAnchor, YAttribute};
use crate::constraint::{Constraint, Relation};

/// Configuration object passed to a [`Layoutable::layout`] closure.
///
/// Each call constructs exactly one descriptor for the owner view, appends it
/// to the accumulation list and returns the builder for chaining. Calls are
/// never merged or deduplicated: configuring the same attribute twice appends
/// two descriptors and both are forwarded at activation, leaving any conflict
/// to the solver.
///
/// Relations and offsets are always passed explicitly; pass
/// [`Relation::Equal`] and `0.0` for a plain attachment.
///
/// [`Layoutable::layout`]: crate::Layoutable::layout
#[derive(Debug)]
pub struct LayoutBuilder {
    owner: String,
    constraints: Vec<Constraint>,
}

impl LayoutBuilder {
    pub(crate) fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            constraints: Vec::new(),
        }
    }

    /// Name of the view every accumulated descriptor belongs to.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Descriptors accumulated so far, in call order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub(crate) fn into_constraints(self) -> Vec<Constraint> {
        self.constraints
    }

    fn push(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    fn positional(
        self,
        attribute: impl Into<crate::anchor::Attribute>,
        target: crate::anchor::AnchorRef,
        relation: Relation,
        constant: f64,
    ) -> Self {
        let owner = self.owner.clone();
        self.push(Constraint::positional(
            owner, attribute, target, relation, constant,
        ))
    }

    // Horizontal axis.

    /// Attach the owner's left edge to a horizontal anchor.
    pub fn left(self, anchor: XAnchor, relation: Relation, constant: f64) -> Self {
        self.positional(XAttribute::Left, anchor.to_ref(), relation, constant)
    }

    /// Attach the owner's right edge to a horizontal anchor.
    pub fn right(self, anchor: XAnchor, relation: Relation, constant: f64) -> Self {
        self.positional(XAttribute::Right, anchor.to_ref(), relation, constant)
    }

    /// Attach the owner's leading edge to a horizontal anchor.
    pub fn leading(self, anchor: XAnchor, relation: Relation, constant: f64) -> Self {
        self.positional(XAttribute::Leading, anchor.to_ref(), relation, constant)
    }

    /// Attach the owner's trailing edge to a horizontal anchor.
    pub fn trailing(self, anchor: XAnchor, relation: Relation, constant: f64) -> Self {
        self.positional(XAttribute::Trailing, anchor.to_ref(), relation, constant)
    }

    /// Attach the owner's horizontal center to a horizontal anchor.
    pub fn center_x(self, anchor: XAnchor, relation: Relation, constant: f64) -> Self {
        self.positional(XAttribute::CenterX, anchor.to_ref(), relation, constant)
    }

    /// Place the owner's left edge at the system-default spacing after a
    /// horizontal anchor, scaled by `multiplier`.
    pub fn left_spaced_after(self, anchor: XAnchor, relation: Relation, multiplier: f64) -> Self {
        let owner = self.owner.clone();
        self.push(Constraint::spaced_after(
            owner,
            XAttribute::Left,
            anchor.to_ref(),
            relation,
            multiplier,
        ))
    }

    /// Place the owner's right edge at the system-default spacing after a
    /// horizontal anchor, scaled by `multiplier`.
    pub fn right_spaced_after(self, anchor: XAnchor, relation: Relation, multiplier: f64) -> Self {
        let owner = self.owner.clone();
        self.push(Constraint::spaced_after(
            owner,
            XAttribute::Right,
            anchor.to_ref(),
            relation,
            multiplier,
        ))
    }

    /// Place the owner's leading edge at the system-default spacing after a
    /// horizontal anchor, scaled by `multiplier`.
    pub fn leading_spaced_after(self, anchor: XAnchor, relation: Relation, multiplier: f64) -> Self {
        let owner = self.owner.clone();
        self.push(Constraint::spaced_after(
            owner,
            XAttribute::Leading,
            anchor.to_ref(),
            relation,
            multiplier,
        ))
    }

    /// Place the owner's trailing edge at the system-default spacing after a
    /// horizontal anchor, scaled by `multiplier`.
    pub fn trailing_spaced_after(
        self,
        anchor: XAnchor,
        relation: Relation,
        multiplier: f64,
    ) -> Self {
        let owner = self.owner.clone();
        self.push(Constraint::spaced_after(
            owner,
            XAttribute::Trailing,
            anchor.to_ref(),
            relation,
            multiplier,
        ))
    }

    /// Place the owner's horizontal center at the system-default spacing after
    /// a horizontal anchor, scaled by `multiplier`.
    pub fn center_x_spaced_after(
        self,
        anchor: XAnchor,
        relation: Relation,
        multiplier: f64,
    ) -> Self {
        let owner = self.owner.clone();
        self.push(Constraint::spaced_after(
            owner,
            XAttribute::CenterX,
            anchor.to_ref(),
            relation,
            multiplier,
        ))
    }

    // Vertical axis.

    /// Attach the owner's top edge to a vertical anchor.
    pub fn top(self, anchor: YAnchor, relation: Relation, constant: f64) -> Self {
        self.positional(YAttribute::Top, anchor.to_ref(), relation, constant)
    }

    /// Attach the owner's bottom edge to a vertical anchor.
    pub fn bottom(self, anchor: YAnchor, relation: Relation, constant: f64) -> Self {
        self.positional(YAttribute::Bottom, anchor.to_ref(), relation, constant)
    }

    /// Attach the owner's vertical center to a vertical anchor.
    pub fn center_y(self, anchor: YAnchor, relation: Relation, constant: f64) -> Self {
        self.positional(YAttribute::CenterY, anchor.to_ref(), relation, constant)
    }

    /// Place the owner's top edge at the system-default spacing below a
    /// vertical anchor, scaled by `multiplier`.
    pub fn top_spaced_below(self, anchor: YAnchor, relation: Relation, multiplier: f64) -> Self {
        let owner = self.owner.clone();
        self.push(Constraint::spaced_below(
            owner,
            YAttribute::Top,
            anchor.to_ref(),
            relation,
            multiplier,
        ))
    }

    /// Place the owner's bottom edge at the system-default spacing below a
    /// vertical anchor, scaled by `multiplier`.
    pub fn bottom_spaced_below(self, anchor: YAnchor, relation: Relation, multiplier: f64) -> Self {
        let owner = self.owner.clone();
        self.push(Constraint::spaced_below(
            owner,
            YAttribute::Bottom,
            anchor.to_ref(),
            relation,
            multiplier,
        ))
    }

    /// Place the owner's vertical center at the system-default spacing below a
    /// vertical anchor, scaled by `multiplier`.
    pub fn center_y_spaced_below(
        self,
        anchor: YAnchor,
        relation: Relation,
        multiplier: f64,
    ) -> Self {
        let owner = self.owner.clone();
        self.push(Constraint::spaced_below(
            owner,
            YAttribute::CenterY,
            anchor.to_ref(),
            relation,
            multiplier,
        ))
    }

    // Dimensions.

    /// Attach the owner's width to a dimension anchor:
    /// `width <relation> multiplier * anchor + constant`.
    pub fn width(
        self,
        anchor: DimensionAnchor,
        relation: Relation,
        multiplier: f64,
        constant: f64,
    ) -> Self {
        let owner = self.owner.clone();
        self.push(Constraint::dimensional(
            owner,
            DimensionAttribute::Width,
            anchor.to_ref(),
            relation,
            multiplier,
            constant,
        ))
    }

    /// Constrain the owner's width against a raw value.
    pub fn width_value(self, value: f64, relation: Relation) -> Self {
        let owner = self.owner.clone();
        self.push(Constraint::fixed(
            owner,
            DimensionAttribute::Width,
            value,
            relation,
        ))
    }

    /// Attach the owner's height to a dimension anchor:
    /// `height <relation> multiplier * anchor + constant`.
    pub fn height(
        self,
        anchor: DimensionAnchor,
        relation: Relation,
        multiplier: f64,
        constant: f64,
    ) -> Self {
        let owner = self.owner.clone();
        self.push(Constraint::dimensional(
            owner,
            DimensionAttribute::Height,
            anchor.to_ref(),
            relation,
            multiplier,
            constant,
        ))
    }

    /// Constrain the owner's height against a raw value.
    pub fn height_value(self, value: f64, relation: Relation) -> Self {
        let owner = self.owner.clone();
        self.push(Constraint::fixed(
            owner,
            DimensionAttribute::Height,
            value,
            relation,
        ))
    }
}
