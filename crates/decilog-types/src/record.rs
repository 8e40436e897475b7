use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{InvalidRecordError, Result};

/// Measured effectiveness of a decision's outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effectiveness {
    Effective,
    SomewhatEffective,
    NotEffective,
}

impl Effectiveness {
    /// All values in display order.
    ///
    /// Breakdown consumers rely on this ordering for a stable category
    /// axis, so absent values still get zero-count entries.
    pub const ALL: [Effectiveness; 3] = [
        Effectiveness::Effective,
        Effectiveness::SomewhatEffective,
        Effectiveness::NotEffective,
    ];
}

/// Coarse classification of the evidence that informed a decision.
///
/// Derived from the free-text `inputs_used` field, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    DataAnalysis,
    Feedback,
    Observation,
}

/// One logged operational decision with its tried action, inputs, and
/// measured outcome.
///
/// Immutable once created. The serialized field names double as the
/// input file schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Unique identifier within the record set (e.g., "D001").
    pub id: String,
    /// Person responsible for the decision.
    pub owner: String,
    /// Team the decision was made in.
    pub team: String,
    /// When the decision was made.
    pub decision_date: NaiveDate,
    /// When the result was measured. Never earlier than `decision_date`.
    pub outcome_date: NaiveDate,
    /// What the decision aimed to achieve.
    pub goal: String,
    /// The action that was taken.
    pub what_was_tried: String,
    /// Free-text description of the evidence used.
    pub inputs_used: String,
    /// Measured result of the action.
    pub result: String,
    /// Measured effectiveness category.
    pub effectiveness: Effectiveness,
    /// Whether the approach is marked as reusable in future situations.
    pub repeatable_win: bool,
    /// High-impact exemplar flag, tracked independently of effectiveness.
    pub star_decision: bool,
}

impl DecisionRecord {
    /// Check record-level invariants.
    ///
    /// Required string fields must be non-empty and the outcome date must
    /// not precede the decision date. Uniqueness of `id` is a set-level
    /// constraint checked by the store, not here.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("id", &self.id), ("owner", &self.owner), ("team", &self.team)] {
            if value.is_empty() {
                return Err(InvalidRecordError::EmptyField {
                    record_id: self.id.clone(),
                    field,
                });
            }
        }

        if self.outcome_date < self.decision_date {
            return Err(InvalidRecordError::OutcomePrecedesDecision {
                record_id: self.id.clone(),
                decision_date: self.decision_date,
                outcome_date: self.outcome_date,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DecisionRecord {
        DecisionRecord {
            id: "D001".to_string(),
            owner: "Maria G.".to_string(),
            team: "Call Center".to_string(),
            decision_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            outcome_date: NaiveDate::from_ymd_opt(2025, 7, 5).unwrap(),
            goal: "Lower ASA".to_string(),
            what_was_tried: "Realigned shift start times".to_string(),
            inputs_used: "Call volume trend, shift overlap data".to_string(),
            result: "ASA dropped from 42s to 28s".to_string(),
            effectiveness: Effectiveness::Effective,
            repeatable_win: true,
            star_decision: true,
        }
    }

    #[test]
    fn test_effectiveness_serialization() {
        let values = vec![
            (Effectiveness::Effective, "effective"),
            (Effectiveness::SomewhatEffective, "somewhat_effective"),
            (Effectiveness::NotEffective, "not_effective"),
        ];

        for (value, expected) in values {
            let json = serde_json::to_string(&value).unwrap();
            assert_eq!(json, format!("\"{}\"", expected));

            let deserialized: Effectiveness = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized, value);
        }
    }

    #[test]
    fn test_input_type_serialization() {
        let values = vec![
            (InputType::DataAnalysis, "data_analysis"),
            (InputType::Feedback, "feedback"),
            (InputType::Observation, "observation"),
        ];

        for (value, expected) in values {
            let json = serde_json::to_string(&value).unwrap();
            assert_eq!(json, format!("\"{}\"", expected));
        }
    }

    #[test]
    fn test_unknown_effectiveness_rejected() {
        let result: std::result::Result<Effectiveness, _> = serde_json::from_str("\"very_effective\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_record_round_trip() {
        let original = record();
        let json = serde_json::to_string(&original).unwrap();
        let deserialized: DecisionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, original);
    }

    #[test]
    fn test_dates_serialize_as_iso8601() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["decision_date"], "2025-07-01");
        assert_eq!(json["outcome_date"], "2025-07-05");
    }

    #[test]
    fn test_validate_accepts_well_formed_record() {
        assert!(record().validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_same_day_outcome() {
        let mut r = record();
        r.outcome_date = r.decision_date;
        assert!(r.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_owner() {
        let mut r = record();
        r.owner = String::new();
        assert_eq!(
            r.validate(),
            Err(InvalidRecordError::EmptyField {
                record_id: "D001".to_string(),
                field: "owner",
            })
        );
    }

    #[test]
    fn test_validate_rejects_inverted_dates() {
        let mut r = record();
        r.outcome_date = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        assert!(matches!(
            r.validate(),
            Err(InvalidRecordError::OutcomePrecedesDecision { .. })
        ));
    }
}
