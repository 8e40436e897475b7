use std::fmt;

use chrono::NaiveDate;

/// Result type for record validation
pub type Result<T> = std::result::Result<T, InvalidRecordError>;

/// A record violates a data-model invariant.
///
/// Raised at load time during validation, or later when a derived
/// computation's precondition does not hold. Terminal for the operation
/// that raised it; the data is static, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidRecordError {
    /// A required field is empty
    EmptyField {
        record_id: String,
        field: &'static str,
    },

    /// The outcome date precedes the decision date
    OutcomePrecedesDecision {
        record_id: String,
        decision_date: NaiveDate,
        outcome_date: NaiveDate,
    },
}

impl fmt::Display for InvalidRecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidRecordError::EmptyField { record_id, field } => {
                write!(f, "record '{}': field '{}' must not be empty", record_id, field)
            }
            InvalidRecordError::OutcomePrecedesDecision {
                record_id,
                decision_date,
                outcome_date,
            } => {
                write!(
                    f,
                    "record '{}': outcome date {} precedes decision date {}",
                    record_id, outcome_date, decision_date
                )
            }
        }
    }
}

impl std::error::Error for InvalidRecordError {}
