use thiserror::Error;

/// Errors raised by goal operations. Messages are shown to users verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GoalError {
    #[error("Maximum {max} active goals allowed per year")]
    CapacityExceeded { max: usize },

    /// Carries the id that was looked up.
    #[error("Goal not found")]
    NotFound(String),
}
