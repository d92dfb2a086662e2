//! Error types for step sequencing.

use convect_core::FieldName;
use std::error::Error;
use std::fmt;

/// Failure reported by an external pressure solver.
///
/// The kernel does not interpret the reason; it wraps the error into
/// [`StepError::PressureSolveFailed`] and aborts the step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveError {
    /// Human-readable description of the failure.
    pub reason: String,
}

impl SolveError {
    /// Construct a solver error from any displayable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pressure solve failed: {}", self.reason)
    }
}

impl Error for SolveError {}

/// Errors from advancing one step.
#[derive(Clone, Debug, PartialEq)]
pub enum StepError {
    /// The external pressure solver failed; the step is incomplete and the
    /// velocity field was not corrected.
    PressureSolveFailed {
        /// The underlying solver error.
        reason: SolveError,
    },
    /// A non-finite value appeared in a field after the step — the run has
    /// diverged and should be aborted by the driver.
    NonFinite {
        /// The field containing the first non-finite value.
        field: FieldName,
        /// Horizontal index of the offending cell.
        i: usize,
        /// Vertical index of the offending cell.
        j: usize,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PressureSolveFailed { reason } => write!(f, "{reason}"),
            Self::NonFinite { field, i, j } => {
                write!(f, "non-finite value in field '{field}' at cell ({i}, {j})")
            }
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PressureSolveFailed { reason } => Some(reason),
            Self::NonFinite { .. } => None,
        }
    }
}
