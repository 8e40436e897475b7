use decilog_types::{DecisionRecord, Effectiveness, InvalidRecordError, Result};
use serde::{Deserialize, Serialize};

/// Whole days between a decision and its measured outcome.
///
/// The load-time invariant guarantees a non-negative result; a record
/// that violates it fails here instead of being silently clamped.
pub fn time_to_outcome(record: &DecisionRecord) -> Result<i64> {
    let days = (record.outcome_date - record.decision_date).num_days();
    if days < 0 {
        return Err(InvalidRecordError::OutcomePrecedesDecision {
            record_id: record.id.clone(),
            decision_date: record.decision_date,
            outcome_date: record.outcome_date,
        });
    }
    Ok(days)
}

/// One decision-speed data point, with the context a hover display needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTiming {
    pub owner: String,
    pub time_to_outcome_days: i64,
    pub effectiveness: Effectiveness,
    pub goal: String,
    pub inputs_used: String,
    pub result: String,
}

/// Per-record timing points in input order (decision speed vs quality).
pub fn decision_timings(records: &[DecisionRecord]) -> Result<Vec<DecisionTiming>> {
    records
        .iter()
        .map(|record| {
            Ok(DecisionTiming {
                owner: record.owner.clone(),
                time_to_outcome_days: time_to_outcome(record)?,
                effectiveness: record.effectiveness,
                goal: record.goal.clone(),
                inputs_used: record.inputs_used.clone(),
                result: record.result.clone(),
            })
        })
        .collect()
}
