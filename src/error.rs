//! Errors surfaced at the activation boundary.

use thiserror::Error;

/// Errors from activating or deactivating constraint descriptors.
///
/// The builder itself never fails: malformed descriptors are ruled out by the
/// typed anchor surface, and conflicting or redundant sets are forwarded to
/// the solver as-is. Everything that can go wrong, goes wrong here.
#[derive(Debug, Error)]
pub enum ActivationError {
    /// The solver rejected a descriptor as unsatisfiable against the
    /// constraints already live. Descriptors activated earlier in the same
    /// batch stay live; the engine never rolls back.
    #[error("unsatisfiable constraint: {constraint}")]
    Unsatisfiable { constraint: String },

    /// An identical constraint is already active.
    #[error("duplicate constraint: {constraint}")]
    Duplicate { constraint: String },

    /// Attempted to deactivate a descriptor that is not active.
    #[error("constraint is not active: {constraint}")]
    NotActive { constraint: String },

    #[error("internal solver error: {0}")]
    Internal(String),
}
