//! The host layout engine and the item handles it hands out.
//!
//! [`LayoutEngine`] owns the live constraint set and the Cassowary solver
//! behind it. [`View`]s and [`LayoutGuide`]s are cheap handles sharing the
//! engine core; all layout mutation is single-threaded by construction (the
//! core is `Rc<RefCell<..>>` and none of these types are `Send`).

mod solver;

use std::cell::RefCell;
use std::rc::Rc;

use crate::anchor::AnchorSurface;
use crate::constraint::Constraint;
use crate::error::ActivationError;
use solver::SolverCore;

/// Reading direction used to resolve leading/trailing attributes and the
/// sign of system spacing-after offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// A solved frame: origin plus size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Zero-sized rect at the origin.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Horizontal center.
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Vertical center.
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Default system spacing between anchors, used by the `*_spaced_after` and
/// `*_spaced_below` builder calls.
const DEFAULT_SYSTEM_SPACING: f64 = 8.0;

/// Owns the solver and the live constraint set; creates views and guides.
///
/// Views made by the same engine share one constraint space. Item names are
/// the identity: asking twice for the same name yields handles to the same
/// underlying item.
pub struct LayoutEngine {
    core: Rc<RefCell<SolverCore>>,
}

impl LayoutEngine {
    /// Engine with left-to-right direction and the default system spacing.
    pub fn new() -> Self {
        Self {
            core: Rc::new(RefCell::new(SolverCore::new(
                LayoutDirection::default(),
                DEFAULT_SYSTEM_SPACING,
            ))),
        }
    }

    /// Set the reading direction for leading/trailing resolution.
    ///
    /// Construction-time setting: descriptors are lowered against the
    /// direction in effect when they are activated, so configure the engine
    /// before activating anything.
    pub fn with_direction(self, direction: LayoutDirection) -> Self {
        self.core.borrow_mut().direction = direction;
        self
    }

    /// Set the system-default spacing used by spacing-variant constraints.
    ///
    /// Construction-time setting, like [`with_direction`](Self::with_direction):
    /// already-activated spacing constraints keep the spacing they were
    /// lowered with.
    pub fn with_system_spacing(self, spacing: f64) -> Self {
        self.core.borrow_mut().system_spacing = spacing;
        self
    }

    pub fn direction(&self) -> LayoutDirection {
        self.core.borrow().direction
    }

    pub fn system_spacing(&self) -> f64 {
        self.core.borrow().system_spacing
    }

    /// Create a view handle. Views never derive their frame from anything
    /// but activated constraints and suggested frames.
    pub fn view(&self, name: impl Into<String>) -> View {
        View {
            core: Rc::clone(&self.core),
            name: name.into(),
        }
    }

    /// Create a layout guide: the same anchor surface as a view, for
    /// container-relative layout without a visible item. Guides can sit on
    /// the target side of constraints but never own them.
    ///
    /// Names are the identity across views and guides alike: a guide and a
    /// view sharing a name refer to the same underlying item.
    pub fn guide(&self, name: impl Into<String>) -> LayoutGuide {
        LayoutGuide { name: name.into() }
    }

    /// Activate descriptors built elsewhere (the usual path is
    /// [`Layoutable::layout`](crate::Layoutable::layout), which activates on
    /// the caller's behalf).
    pub fn activate(&self, constraints: &[Constraint]) -> Result<(), ActivationError> {
        self.core.borrow_mut().activate(constraints)
    }

    /// Remove previously activated descriptors from the live set.
    pub fn deactivate(&self, constraints: &[Constraint]) -> Result<(), ActivationError> {
        self.core.borrow_mut().deactivate(constraints)
    }

    /// Suggest an item's frame. Activated constraints take precedence over
    /// the suggestion; use this to anchor containers that nothing else
    /// positions.
    pub fn set_frame<S: AnchorSurface + ?Sized>(
        &self,
        item: &S,
        frame: Rect,
    ) -> Result<(), ActivationError> {
        self.core.borrow_mut().suggest_frame(item.layout_name(), frame)
    }

    /// Current solved frame of an item. Attributes nothing constrains read
    /// as 0.
    pub fn frame<S: AnchorSurface + ?Sized>(&self, item: &S) -> Rect {
        self.core.borrow_mut().frame(item.layout_name())
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a constrainable item. Cloning yields another handle to the same
/// item.
#[derive(Clone)]
pub struct View {
    core: Rc<RefCell<SolverCore>>,
    name: String,
}

impl View {
    pub(crate) fn core(&self) -> &Rc<RefCell<SolverCore>> {
        &self.core
    }
}

impl AnchorSurface for View {
    fn layout_name(&self) -> &str {
        &self.name
    }
}

/// An anchor surface without a visible item.
#[derive(Clone)]
pub struct LayoutGuide {
    name: String,
}

impl AnchorSurface for LayoutGuide {
    fn layout_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_builder() {
        let engine = LayoutEngine::new()
            .with_direction(LayoutDirection::RightToLeft)
            .with_system_spacing(12.0);
        assert_eq!(engine.direction(), LayoutDirection::RightToLeft);
        assert_eq!(engine.system_spacing(), 12.0);
    }

    #[test]
    fn test_rect_helpers() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
        assert_eq!(rect.center_x(), 60.0);
        assert_eq!(rect.center_y(), 45.0);
        assert_eq!(Rect::zero(), Rect::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_unconstrained_frame_reads_zero() {
        let engine = LayoutEngine::new();
        let view = engine.view("floating");
        assert_eq!(engine.frame(&view), Rect::zero());
    }

    #[test]
    fn test_set_frame_round_trips_through_solver() {
        let engine = LayoutEngine::new();
        let view = engine.view("root");
        engine
            .set_frame(&view, Rect::new(0.0, 0.0, 320.0, 240.0))
            .unwrap();
        let frame = engine.frame(&view);
        assert!((frame.width - 320.0).abs() < 1e-6);
        assert!((frame.height - 240.0).abs() < 1e-6);
    }
}
