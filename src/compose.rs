//! Capability traits: the closure-based activation boundary and the named
//! composite layouts built on top of it.
//!
//! `Pinable` and `Stretchable` carry only provided methods; they are pure
//! compositions of builder calls with no descriptor semantics of their own.

use crate::anchor::{AnchorSurface, DimensionAnchor, XAnchor, YAnchor};
use crate::builder::LayoutBuilder;
use crate::constraint::{Constraint, Relation};
use crate::engine::View;
use crate::error::ActivationError;

/// The activation boundary for one target view.
pub trait Layoutable {
    /// Run `configure` against a fresh builder bound to this view, then
    /// activate every descriptor the closure produced and return them.
    ///
    /// The closure is invoked synchronously, exactly once. The full
    /// descriptor list is submitted as one batch; whether a conflicting set
    /// is rejected or partially resolved is the solver's policy, surfaced as
    /// an [`ActivationError`] at this call.
    ///
    /// ```
    /// use anchorkit::{AnchorSurface, LayoutEngine, Layoutable, Relation};
    ///
    /// let engine = LayoutEngine::new();
    /// let root = engine.view("root");
    /// let badge = engine.view("badge");
    ///
    /// let constraints = badge.layout(|anchors| {
    ///     anchors
    ///         .top(root.top(), Relation::Equal, 8.0)
    ///         .leading(root.leading(), Relation::Equal, 8.0)
    /// })?;
    /// assert_eq!(constraints.len(), 2);
    /// # Ok::<(), anchorkit::ActivationError>(())
    /// ```
    fn layout<F>(&self, configure: F) -> Result<Vec<Constraint>, ActivationError>
    where
        F: FnOnce(LayoutBuilder) -> LayoutBuilder;
}

impl Layoutable for View {
    fn layout<F>(&self, configure: F) -> Result<Vec<Constraint>, ActivationError>
    where
        F: FnOnce(LayoutBuilder) -> LayoutBuilder,
    {
        let builder = configure(LayoutBuilder::new(self.layout_name()));
        let constraints = builder.into_constraints();
        self.core().borrow_mut().activate(&constraints)?;
        Ok(constraints)
    }
}

/// Stretch a view across a container or a set of edges.
pub trait Stretchable: Layoutable {
    /// Attach top, leading, trailing and bottom to the container's matching
    /// anchors, all equal with no offset. With nothing else configured the
    /// view's frame exactly fills the container.
    fn stretch_to_bounds<S: AnchorSurface + ?Sized>(
        &self,
        container: &S,
    ) -> Result<Vec<Constraint>, ActivationError> {
        self.layout(|anchors| {
            anchors
                .top(container.top(), Relation::Equal, 0.0)
                .leading(container.leading(), Relation::Equal, 0.0)
                .trailing(container.trailing(), Relation::Equal, 0.0)
                .bottom(container.bottom(), Relation::Equal, 0.0)
        })
    }

    /// Same four attachments, to four independently supplied anchors.
    fn stretch_to_edges(
        &self,
        top: YAnchor,
        leading: XAnchor,
        trailing: XAnchor,
        bottom: YAnchor,
    ) -> Result<Vec<Constraint>, ActivationError> {
        self.layout(|anchors| {
            anchors
                .top(top, Relation::Equal, 0.0)
                .leading(leading, Relation::Equal, 0.0)
                .trailing(trailing, Relation::Equal, 0.0)
                .bottom(bottom, Relation::Equal, 0.0)
        })
    }
}

impl Stretchable for View {}

/// Pin a view to a corner, edge or center of a container.
///
/// Margins pass through as constraint constants unchanged: positive values
/// push right/down, exactly like a plain builder call with that constant.
pub trait Pinable: Layoutable {
    /// Center the view on the target.
    fn pin_to_center<S: AnchorSurface + ?Sized>(
        &self,
        target: &S,
    ) -> Result<Vec<Constraint>, ActivationError> {
        self.layout(|anchors| {
            anchors
                .center_x(target.center_x(), Relation::Equal, 0.0)
                .center_y(target.center_y(), Relation::Equal, 0.0)
        })
    }

    /// Center the view on the target with a fixed size.
    fn pin_to_center_sized<S: AnchorSurface + ?Sized>(
        &self,
        target: &S,
        width: f64,
        height: f64,
    ) -> Result<Vec<Constraint>, ActivationError> {
        self.layout(|anchors| {
            anchors
                .center_x(target.center_x(), Relation::Equal, 0.0)
                .center_y(target.center_y(), Relation::Equal, 0.0)
                .width_value(width, Relation::Equal)
                .height_value(height, Relation::Equal)
        })
    }

    /// Center the view on the target with its size attached to the given
    /// dimension anchors.
    fn pin_to_center_anchors<S: AnchorSurface + ?Sized>(
        &self,
        target: &S,
        width: DimensionAnchor,
        height: DimensionAnchor,
    ) -> Result<Vec<Constraint>, ActivationError> {
        self.layout(|anchors| {
            anchors
                .center_x(target.center_x(), Relation::Equal, 0.0)
                .center_y(target.center_y(), Relation::Equal, 0.0)
                .width(width, Relation::Equal, 1.0, 0.0)
                .height(height, Relation::Equal, 1.0, 0.0)
        })
    }

    /// Pin to the target's top-left corner. Size and opposite edges stay
    /// unconstrained.
    fn pin_to_top_left<S: AnchorSurface + ?Sized>(
        &self,
        target: &S,
        y_margin: f64,
        x_margin: f64,
    ) -> Result<Vec<Constraint>, ActivationError> {
        self.layout(|anchors| {
            anchors
                .left(target.left(), Relation::Equal, x_margin)
                .top(target.top(), Relation::Equal, y_margin)
        })
    }

    /// Pin to the target's top-right corner.
    fn pin_to_top_right<S: AnchorSurface + ?Sized>(
        &self,
        target: &S,
        y_margin: f64,
        x_margin: f64,
    ) -> Result<Vec<Constraint>, ActivationError> {
        self.layout(|anchors| {
            anchors
                .right(target.right(), Relation::Equal, x_margin)
                .top(target.top(), Relation::Equal, y_margin)
        })
    }

    /// Pin to the target's bottom-left corner.
    fn pin_to_bottom_left<S: AnchorSurface + ?Sized>(
        &self,
        target: &S,
        y_margin: f64,
        x_margin: f64,
    ) -> Result<Vec<Constraint>, ActivationError> {
        self.layout(|anchors| {
            anchors
                .left(target.left(), Relation::Equal, x_margin)
                .bottom(target.bottom(), Relation::Equal, y_margin)
        })
    }

    /// Pin to the target's bottom-right corner.
    fn pin_to_bottom_right<S: AnchorSurface + ?Sized>(
        &self,
        target: &S,
        y_margin: f64,
        x_margin: f64,
    ) -> Result<Vec<Constraint>, ActivationError> {
        self.layout(|anchors| {
            anchors
                .right(target.right(), Relation::Equal, x_margin)
                .bottom(target.bottom(), Relation::Equal, y_margin)
        })
    }

    /// Pin to the horizontal center of the target's top edge.
    fn pin_to_top_center<S: AnchorSurface + ?Sized>(
        &self,
        target: &S,
        y_margin: f64,
    ) -> Result<Vec<Constraint>, ActivationError> {
        self.layout(|anchors| {
            anchors
                .center_x(target.center_x(), Relation::Equal, 0.0)
                .top(target.top(), Relation::Equal, y_margin)
        })
    }

    /// Pin to the horizontal center of the target's bottom edge.
    fn pin_to_bottom_center<S: AnchorSurface + ?Sized>(
        &self,
        target: &S,
        y_margin: f64,
    ) -> Result<Vec<Constraint>, ActivationError> {
        self.layout(|anchors| {
            anchors
                .center_x(target.center_x(), Relation::Equal, 0.0)
                .bottom(target.bottom(), Relation::Equal, y_margin)
        })
    }

    /// Pin to the vertical center of the target's left edge.
    fn pin_to_center_left<S: AnchorSurface + ?Sized>(
        &self,
        target: &S,
        x_margin: f64,
    ) -> Result<Vec<Constraint>, ActivationError> {
        self.layout(|anchors| {
            anchors
                .center_y(target.center_y(), Relation::Equal, 0.0)
                .left(target.left(), Relation::Equal, x_margin)
        })
    }

    /// Pin to the vertical center of the target's right edge.
    fn pin_to_center_right<S: AnchorSurface + ?Sized>(
        &self,
        target: &S,
        x_margin: f64,
    ) -> Result<Vec<Constraint>, ActivationError> {
        self.layout(|anchors| {
            anchors
                .center_y(target.center_y(), Relation::Equal, 0.0)
                .right(target.right(), Relation::Equal, x_margin)
        })
    }
}

impl Pinable for View {}
