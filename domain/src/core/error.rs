//! Domain error types

use crate::submission::Modality;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Empty {0} submission")]
    EmptySubmission(Modality),

    #[error("Unknown outcome: {0}")]
    UnknownOutcome(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_submission_display() {
        let error = DomainError::EmptySubmission(Modality::Url);
        assert_eq!(error.to_string(), "Empty url submission");
    }

    #[test]
    fn test_unknown_outcome_display() {
        let error = DomainError::UnknownOutcome("maybe".to_string());
        assert_eq!(error.to_string(), "Unknown outcome: maybe");
    }
}
