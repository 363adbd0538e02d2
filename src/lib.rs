//! anchorkit - declarative, fluent constraint layout for views.
//!
//! A view describes its own position and size relative to other views inside
//! a single configuration closure; the resulting constraint descriptors are
//! activated as one batch against the engine's Cassowary solver (kasuari).
//! This crate does no constraint mathematics of its own: it builds
//! descriptors and forwards them.
//!
//! # Example
//!
//! ```rust
//! use anchorkit::{AnchorSurface, LayoutEngine, Layoutable, Rect, Relation};
//!
//! let engine = LayoutEngine::new();
//! let root = engine.view("root");
//! let badge = engine.view("badge");
//! engine.set_frame(&root, Rect::new(0.0, 0.0, 320.0, 240.0))?;
//!
//! let constraints = badge.layout(|anchors| {
//!     anchors
//!         .top(root.top(), Relation::Equal, 8.0)
//!         .leading(root.leading(), Relation::Equal, 4.0)
//!         .width_value(40.0, Relation::Equal)
//!         .height_value(20.0, Relation::Equal)
//! })?;
//! assert_eq!(constraints.len(), 4);
//!
//! let frame = engine.frame(&badge);
//! assert!((frame.x - 4.0).abs() < 1e-6);
//! assert!((frame.y - 8.0).abs() < 1e-6);
//! # Ok::<(), anchorkit::ActivationError>(())
//! ```
//!
//! Common multi-attribute layouts come pre-composed on every view through
//! the [`Pinable`] and [`Stretchable`] traits (`pin_to_center`,
//! `pin_to_top_left`, `stretch_to_bounds`, ...).

pub mod anchor;
pub mod builder;
pub mod compose;
pub mod constraint;
pub mod engine;
pub mod error;

pub use anchor::{
    AnchorRef, AnchorSurface, Attribute, DimensionAnchor, DimensionAttribute, XAnchor, XAttribute,
    YAnchor, YAttribute,
};
pub use builder::LayoutBuilder;
pub use compose::{Layoutable, Pinable, Stretchable};
pub use constraint::{Constraint, Relation, Target};
pub use engine::{LayoutDirection, LayoutEngine, LayoutGuide, Rect, View};
pub use error::ActivationError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stretch_fills_container() {
        let engine = LayoutEngine::new();
        let root = engine.view("root");
        let panel = engine.view("panel");
        engine
            .set_frame(&root, Rect::new(0.0, 0.0, 640.0, 480.0))
            .unwrap();

        let constraints = panel.stretch_to_bounds(&root).unwrap();
        assert_eq!(constraints.len(), 4);

        let frame = engine.frame(&panel);
        assert!((frame.width - 640.0).abs() < 1e-6);
        assert!((frame.height - 480.0).abs() < 1e-6);
    }

    #[test]
    fn test_descriptors_are_returned_to_the_caller() {
        let engine = LayoutEngine::new();
        let root = engine.view("root");
        let badge = engine.view("badge");

        let constraints = badge
            .layout(|anchors| anchors.center_x(root.center_x(), Relation::Equal, 0.0))
            .unwrap();

        assert_eq!(constraints.len(), 1);
        assert_eq!(constraints[0].owner, "badge");
        assert_eq!(constraints[0].to_string(), "badge.center_x = root.center_x");
    }
}
