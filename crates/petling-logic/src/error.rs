//! Shared progression error taxonomy.
//!
//! Every variant is a rejected-but-expected outcome of one transaction, not
//! a system fault. None of them implies partial mutation: callers apply
//! effects only after the whole sequence has been validated.

/// Errors produced by pure progression logic.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProgressionError {
    /// A required resource is below what the action needs. Recoverable: the
    /// player retries after acquiring the resource.
    #[error("insufficient {resource}: need {needed}, have {available}")]
    Precondition {
        /// Which resource fell short (e.g. "coins", "energy").
        resource: &'static str,
        /// The amount the action requires.
        needed: f64,
        /// The amount currently held.
        available: f64,
    },

    /// The action name does not map to any known care action. Not retryable.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// No quest with this id exists in the pet's active set.
    #[error("quest not found: {0}")]
    QuestNotFound(u32),

    /// The quest has not reached its target yet.
    #[error("quest {0} is not completed")]
    QuestNotCompleted(u32),

    /// The quest reward was already collected.
    #[error("quest {0} was already claimed")]
    QuestAlreadyClaimed(u32),
}
