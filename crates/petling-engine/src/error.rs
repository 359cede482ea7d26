//! Engine-level errors.
//!
//! [`EngineError`] wraps the pure-logic taxonomy and adds the lookups the
//! store and shop boundaries can fail on. Every variant leaves stored state
//! untouched: transactions commit only after the whole sequence succeeds.

use petling_logic::error::ProgressionError;

/// Errors surfaced by progression-engine operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// No pet record with this id.
    #[error("pet not found: {0}")]
    PetNotFound(String),

    /// The user is not an owner of the pet.
    #[error("user {user} does not own pet {pet}")]
    UnknownUser { user: String, pet: String },

    /// The item id is not in the shop catalog.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// Duplicate purchase of an already-owned item.
    #[error("item already owned: {0}")]
    AlreadyOwned(String),

    /// Equip attempted on an item the pet does not own.
    #[error("item not owned: {0}")]
    NotOwned(String),

    /// A rule-level rejection (precondition, quest state, unknown action).
    #[error(transparent)]
    Logic(#[from] ProgressionError),
}
