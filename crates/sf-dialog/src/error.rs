//! Error types for the dialog engine.

use thiserror::Error;

use crate::pool::RollId;
use crate::session::SessionStep;

/// Result type for dialog operations.
pub type DialogResult<T> = Result<T, DialogError>;

/// Errors that can occur while driving an ability-score dialog.
#[derive(Debug, Error)]
pub enum DialogError {
    /// Confirm was attempted before every ability had a value.
    #[error("not every ability has an assigned value")]
    IncompleteAssignments,

    /// A point-buy adjustment left the purchasable range.
    #[error("score {0} is outside the purchasable range")]
    ScoreOutOfRange(i32),

    /// A point-buy adjustment would overrun the budget.
    #[error("spending {proposed} points would exceed the budget of {budget}")]
    OverBudget {
        /// Points the rejected spread would have cost.
        proposed: u32,
        /// The fixed budget.
        budget: u32,
    },

    /// The referenced rolled value does not exist in this session.
    #[error("no rolled value with id {0}")]
    UnknownRoll(RollId),

    /// A roll was finished with none in flight.
    #[error("no roll is in flight")]
    NoPendingRoll,

    /// The operation is not legal during the session's current step.
    #[error("operation not legal during the {0} step")]
    StepMismatch(SessionStep),

    /// A host persistence call failed.
    #[error("{0}")]
    Host(#[from] HostError),
}

/// Errors surfaced by a host bridge implementation.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host failed to persist an update or flag write.
    #[error("host persistence failed: {0}")]
    Persistence(String),
}
