use decilog_types::{DecisionRecord, Effectiveness};
use serde::{Deserialize, Serialize};

/// Filter criteria for the decision log.
///
/// Each criterion is a set of accepted values; an empty set imposes no
/// constraint, so the default filter selects everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecisionFilter {
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(default)]
    pub teams: Vec<String>,
    #[serde(default)]
    pub effectiveness: Vec<Effectiveness>,
}

impl DecisionFilter {
    /// Whether a record passes every non-empty criterion.
    pub fn matches(&self, record: &DecisionRecord) -> bool {
        (self.owners.is_empty() || self.owners.contains(&record.owner))
            && (self.teams.is_empty() || self.teams.contains(&record.team))
            && (self.effectiveness.is_empty()
                || self.effectiveness.contains(&record.effectiveness))
    }
}

/// Select records passing the filter. Input order is preserved; the
/// result is newly allocated and never aliases the input.
pub fn filter_records(records: &[DecisionRecord], filter: &DecisionFilter) -> Vec<DecisionRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

/// Records flagged as high-impact exemplars, input order preserved.
pub fn star_decisions(records: &[DecisionRecord]) -> Vec<DecisionRecord> {
    records
        .iter()
        .filter(|record| record.star_decision)
        .cloned()
        .collect()
}
