//! Lowering of constraint descriptors onto the kasuari Cassowary solver.
//!
//! Each item gets four base variables (x, y, width, height); every other
//! attribute is a derived expression over them. Descriptors are added at
//! required strength, frame suggestions at strong strength, so activated
//! constraints always win over suggested geometry.

use std::collections::{HashMap, HashSet};

use kasuari::{
    Expression, Solver as KasuariSolver, Strength, Variable as KasuariVariable,
    WeightedRelation::*,
};

use crate::anchor::Attribute;
use crate::constraint::{Constraint, Target};
use crate::engine::{LayoutDirection, Rect};
use crate::error::ActivationError;
use crate::Relation;

/// Base solver properties; everything else is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Property {
    X,
    Y,
    Width,
    Height,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ItemVariable {
    item: String,
    property: Property,
}

/// A live constraint: the descriptor it came from plus the solver handle
/// needed to remove it again.
struct ActiveConstraint {
    descriptor: Constraint,
    live: kasuari::Constraint,
}

pub(crate) struct SolverCore {
    solver: KasuariSolver,
    variables: HashMap<ItemVariable, KasuariVariable>,
    /// Last known value per solver variable, accumulated from fetch_changes.
    values: HashMap<KasuariVariable, f64>,
    /// Variables already registered as edit variables.
    edited: HashSet<KasuariVariable>,
    active: Vec<ActiveConstraint>,
    pub(crate) direction: LayoutDirection,
    pub(crate) system_spacing: f64,
}

impl SolverCore {
    pub(crate) fn new(direction: LayoutDirection, system_spacing: f64) -> Self {
        Self {
            solver: KasuariSolver::new(),
            variables: HashMap::new(),
            values: HashMap::new(),
            edited: HashSet::new(),
            active: Vec::new(),
            direction,
            system_spacing,
        }
    }

    fn var(&mut self, item: &str, property: Property) -> KasuariVariable {
        let key = ItemVariable {
            item: item.to_string(),
            property,
        };
        if let Some(&var) = self.variables.get(&key) {
            var
        } else {
            let var = KasuariVariable::new();
            self.variables.insert(key, var);
            var
        }
    }

    /// Expression for an item attribute over its base variables. Leading and
    /// trailing resolve against the engine's layout direction here, not in
    /// the descriptor.
    fn expression(&mut self, item: &str, attribute: Attribute) -> Expression {
        match attribute {
            Attribute::Left => self.var(item, Property::X).into(),
            Attribute::Right => {
                let x = self.var(item, Property::X);
                let width = self.var(item, Property::Width);
                x + width
            }
            Attribute::Leading => match self.direction {
                LayoutDirection::LeftToRight => self.expression(item, Attribute::Left),
                LayoutDirection::RightToLeft => self.expression(item, Attribute::Right),
            },
            Attribute::Trailing => match self.direction {
                LayoutDirection::LeftToRight => self.expression(item, Attribute::Right),
                LayoutDirection::RightToLeft => self.expression(item, Attribute::Left),
            },
            Attribute::CenterX => {
                let x = self.var(item, Property::X);
                let width = self.var(item, Property::Width);
                x + width * 0.5
            }
            Attribute::Top => self.var(item, Property::Y).into(),
            Attribute::Bottom => {
                let y = self.var(item, Property::Y);
                let height = self.var(item, Property::Height);
                y + height
            }
            Attribute::CenterY => {
                let y = self.var(item, Property::Y);
                let height = self.var(item, Property::Height);
                y + height * 0.5
            }
            Attribute::Width => self.var(item, Property::Width).into(),
            Attribute::Height => self.var(item, Property::Height).into(),
        }
    }

    fn lower(&mut self, descriptor: &Constraint) -> kasuari::Constraint {
        let owner = self.expression(&descriptor.owner, descriptor.attribute);
        let relation = match descriptor.relation {
            Relation::Equal => EQ(Strength::REQUIRED),
            Relation::LessOrEqual => LE(Strength::REQUIRED),
            Relation::GreaterOrEqual => GE(Strength::REQUIRED),
        };
        match &descriptor.target {
            Target::Constant(value) => owner | relation | *value,
            Target::Anchor(anchor) => {
                let target = self.expression(&anchor.item, anchor.attribute);
                owner | relation | descriptor.multiplier * target + descriptor.constant
            }
            Target::SpacingAfter(anchor) => {
                let target = self.expression(&anchor.item, anchor.attribute);
                // "After" means the reading direction, so the offset flips
                // under right-to-left.
                let offset = match self.direction {
                    LayoutDirection::LeftToRight => descriptor.multiplier * self.system_spacing,
                    LayoutDirection::RightToLeft => -descriptor.multiplier * self.system_spacing,
                };
                owner | relation | target + offset
            }
            Target::SpacingBelow(anchor) => {
                let target = self.expression(&anchor.item, anchor.attribute);
                owner | relation | target + descriptor.multiplier * self.system_spacing
            }
        }
    }

    fn convert_add_error(
        error: kasuari::AddConstraintError,
        descriptor: &Constraint,
    ) -> ActivationError {
        match error {
            kasuari::AddConstraintError::UnsatisfiableConstraint => {
                ActivationError::Unsatisfiable {
                    constraint: descriptor.to_string(),
                }
            }
            kasuari::AddConstraintError::DuplicateConstraint => ActivationError::Duplicate {
                constraint: descriptor.to_string(),
            },
            kasuari::AddConstraintError::InternalSolverError(message) => {
                ActivationError::Internal(format!("{}: {}", descriptor, message))
            }
        }
    }

    /// Activate every descriptor in order. On failure the error names the
    /// offending descriptor; earlier descriptors of the batch stay active.
    pub(crate) fn activate(&mut self, descriptors: &[Constraint]) -> Result<(), ActivationError> {
        for descriptor in descriptors {
            let live = self.lower(descriptor);
            self.solver
                .add_constraint(live.clone())
                .map_err(|e| Self::convert_add_error(e, descriptor))?;
            self.active.push(ActiveConstraint {
                descriptor: descriptor.clone(),
                live,
            });
        }
        Ok(())
    }

    /// Remove previously activated descriptors from the live set.
    pub(crate) fn deactivate(&mut self, descriptors: &[Constraint]) -> Result<(), ActivationError> {
        for descriptor in descriptors {
            let index = self
                .active
                .iter()
                .position(|entry| entry.descriptor == *descriptor)
                .ok_or_else(|| ActivationError::NotActive {
                    constraint: descriptor.to_string(),
                })?;
            let entry = self.active.remove(index);
            self.solver
                .remove_constraint(&entry.live)
                .map_err(|e| ActivationError::Internal(format!("{}: {}", descriptor, e)))?;
        }
        Ok(())
    }

    /// Suggest an item's frame through edit variables. Strong strength, so
    /// required constraints from activation always override it.
    pub(crate) fn suggest_frame(&mut self, item: &str, frame: Rect) -> Result<(), ActivationError> {
        let suggestions = [
            (Property::X, frame.x),
            (Property::Y, frame.y),
            (Property::Width, frame.width),
            (Property::Height, frame.height),
        ];
        for (property, value) in suggestions {
            let var = self.var(item, property);
            if self.edited.insert(var) {
                self.solver
                    .add_edit_variable(var, Strength::STRONG)
                    .map_err(|e| {
                        ActivationError::Internal(format!("failed to add edit variable: {}", e))
                    })?;
            }
            self.solver
                .suggest_value(var, value)
                .map_err(|e| ActivationError::Internal(format!("failed to suggest value: {}", e)))?;
        }
        Ok(())
    }

    fn refresh(&mut self) {
        for (var, value) in self.solver.fetch_changes() {
            self.values.insert(*var, *value);
        }
    }

    fn value(&mut self, item: &str, property: Property) -> f64 {
        let var = self.var(item, property);
        self.values.get(&var).copied().unwrap_or(0.0)
    }

    /// Current solved frame of an item. Unconstrained variables read as 0.
    pub(crate) fn frame(&mut self, item: &str) -> Rect {
        self.refresh();
        Rect::new(
            self.value(item, Property::X),
            self.value(item, Property::Y),
            self.value(item, Property::Width),
            self.value(item, Property::Height),
        )
    }
}
