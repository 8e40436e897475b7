use std::collections::HashMap;

use decilog_types::{DecisionRecord, Effectiveness, Result};
use serde::{Deserialize, Serialize};

use crate::timing::time_to_outcome;

/// Per-owner rollup of decision volume, quality, and speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerPerformance {
    pub owner: String,
    pub decisions_made: usize,
    pub percent_effective: f64,
    pub avg_time_to_outcome_days: f64,
}

#[derive(Default)]
struct OwnerAccumulator {
    decisions_made: usize,
    effective_count: usize,
    total_days: i64,
}

/// Group records by owner and aggregate each group.
///
/// Output order is first-seen owner order, which is deterministic for
/// identical input; display tables rely on that across repeated calls.
pub fn owner_performance(records: &[DecisionRecord]) -> Result<Vec<OwnerPerformance>> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, OwnerAccumulator> = HashMap::new();

    for record in records {
        let days = time_to_outcome(record)?;
        let group = groups.entry(record.owner.as_str()).or_insert_with(|| {
            order.push(record.owner.as_str());
            OwnerAccumulator::default()
        });

        group.decisions_made += 1;
        if record.effectiveness == Effectiveness::Effective {
            group.effective_count += 1;
        }
        group.total_days += days;
    }

    Ok(order
        .into_iter()
        .map(|owner| {
            let group = &groups[owner];
            OwnerPerformance {
                owner: owner.to_string(),
                decisions_made: group.decisions_made,
                percent_effective: group.effective_count as f64 * 100.0
                    / group.decisions_made as f64,
                avg_time_to_outcome_days: group.total_days as f64 / group.decisions_made as f64,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use decilog_testing::RecordBuilder;

    #[test]
    fn test_groups_in_first_seen_owner_order() {
        let records = vec![
            RecordBuilder::new("D001").owner("Maria G.").build(),
            RecordBuilder::new("D002").owner("James K.").build(),
            RecordBuilder::new("D003").owner("Maria G.").build(),
        ];

        let performance = owner_performance(&records).unwrap();

        let owners: Vec<&str> = performance.iter().map(|p| p.owner.as_str()).collect();
        assert_eq!(owners, ["Maria G.", "James K."]);
        assert_eq!(performance[0].decisions_made, 2);
        assert_eq!(performance[1].decisions_made, 1);
    }

    #[test]
    fn test_per_group_aggregates() {
        let records = vec![
            RecordBuilder::new("D001")
                .owner("Maria G.")
                .dates("2025-07-01", "2025-07-05")
                .effectiveness(Effectiveness::Effective)
                .build(),
            RecordBuilder::new("D002")
                .owner("Maria G.")
                .dates("2025-07-08", "2025-07-10")
                .effectiveness(Effectiveness::NotEffective)
                .build(),
        ];

        let performance = owner_performance(&records).unwrap();

        assert_eq!(performance.len(), 1);
        let maria = &performance[0];
        assert_eq!(maria.decisions_made, 2);
        assert_eq!(maria.percent_effective, 50.0);
        assert_eq!(maria.avg_time_to_outcome_days, 3.0);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(owner_performance(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        let records = vec![
            RecordBuilder::new("D001").owner("Linda T.").build(),
            RecordBuilder::new("D002").owner("Carlos V.").build(),
            RecordBuilder::new("D003").owner("Linda T.").build(),
        ];

        let first = owner_performance(&records).unwrap();
        let second = owner_performance(&records).unwrap();
        assert_eq!(first, second);
    }
}
