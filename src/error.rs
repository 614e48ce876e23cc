//! Error handling logic

use std::fmt;

/// Failures surfaced by the integration entry points.
///
/// Both kinds propagate directly to the caller; there is no local
/// recovery, since retrying a numerically invalid configuration cannot
/// succeed without changing inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum LorenzError {
    /// A caller-supplied argument is outside the valid domain
    /// (non-positive or non-finite step size, non-finite state or
    /// parameter component).
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },

    /// Integration diverged: a state component became NaN or infinite.
    /// Detected immediately after the offending step, so a returned
    /// trajectory never contains non-finite values.
    NumericOverflow {
        /// 1-based index of the step that produced a non-finite state
        step: usize,
    },
}

impl fmt::Display for LorenzError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LorenzError::InvalidArgument { message } => {
                write!(f, "Invalid Argument: {}", message)
            }
            LorenzError::NumericOverflow { step } => {
                write!(f, "Numeric Overflow: state became non-finite at step {}", step)
            }
        }
    }
}

impl std::error::Error for LorenzError {}
