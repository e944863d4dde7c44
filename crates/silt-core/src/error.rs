//! Error types for the Silt sandbox.
//!
//! Out-of-bounds access and unregistered kinds are not errors: reads
//! past the edge return a canonical cell, writes past the edge are
//! dropped, and kinds without a rule are inert. What remains are rule
//! authoring bugs caught while validating a tick's staged requests.

use std::error::Error;
use std::fmt;

/// A staged request that breaks the staging contract.
///
/// Always a rule authoring bug rather than a runtime condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A plain move targets a slot that is not Void.
    OccupiedDestination {
        /// Index of the moving cell.
        source: usize,
        /// Index of the occupied target.
        dest: usize,
    },
    /// A request's source slot holds no cell.
    VacantSource {
        /// Index of the empty source slot.
        source: usize,
    },
    /// More than one request names the same source slot in one tick.
    DuplicateSource {
        /// Index of the over-subscribed source.
        source: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OccupiedDestination { source, dest } => {
                write!(f, "move {source} -> {dest} targets an occupied slot")
            }
            Self::VacantSource { source } => {
                write!(f, "request source {source} is Void")
            }
            Self::DuplicateSource { source } => {
                write!(f, "source {source} staged more than one request")
            }
        }
    }
}

impl Error for InvariantViolation {}

/// Errors that abort a tick before its resolve phase commits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// Staged requests failed validation; nothing was written.
    InvariantViolation(InvariantViolation),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvariantViolation(v) => write!(f, "invariant violation: {v}"),
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvariantViolation(v) => Some(v),
        }
    }
}

impl From<InvariantViolation> for StepError {
    fn from(v: InvariantViolation) -> Self {
        Self::InvariantViolation(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_error_chains_to_violation() {
        let err = StepError::from(InvariantViolation::DuplicateSource { source: 3 });
        assert_eq!(
            err.to_string(),
            "invariant violation: source 3 staged more than one request"
        );
        assert!(err.source().is_some());
    }
}
