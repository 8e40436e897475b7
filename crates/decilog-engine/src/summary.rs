use decilog_types::{DecisionRecord, Effectiveness, Result};
use serde::{Deserialize, Serialize};

use crate::timing::time_to_outcome;

/// Headline metrics for a record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total_count: usize,
    pub avg_time_to_outcome_days: f64,
    /// Share of Effective decisions, rounded to the nearest percent.
    pub effective_rate_percent: u32,
    pub repeatable_win_count: usize,
}

/// Single-pass aggregation over the record set.
///
/// Empty input yields zeroed metrics, never an error.
pub fn summary_metrics(records: &[DecisionRecord]) -> Result<SummaryMetrics> {
    if records.is_empty() {
        return Ok(SummaryMetrics {
            total_count: 0,
            avg_time_to_outcome_days: 0.0,
            effective_rate_percent: 0,
            repeatable_win_count: 0,
        });
    }

    let mut total_days = 0i64;
    let mut effective_count = 0usize;
    let mut repeatable_win_count = 0usize;

    for record in records {
        total_days += time_to_outcome(record)?;
        if record.effectiveness == Effectiveness::Effective {
            effective_count += 1;
        }
        if record.repeatable_win {
            repeatable_win_count += 1;
        }
    }

    let total_count = records.len();
    Ok(SummaryMetrics {
        total_count,
        avg_time_to_outcome_days: total_days as f64 / total_count as f64,
        effective_rate_percent: (effective_count as f64 * 100.0 / total_count as f64).round()
            as u32,
        repeatable_win_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use decilog_testing::RecordBuilder;

    #[test]
    fn test_empty_input_yields_zeroed_metrics() {
        let metrics = summary_metrics(&[]).unwrap();
        assert_eq!(
            metrics,
            SummaryMetrics {
                total_count: 0,
                avg_time_to_outcome_days: 0.0,
                effective_rate_percent: 0,
                repeatable_win_count: 0,
            }
        );
    }

    #[test]
    fn test_single_record() {
        let records = vec![
            RecordBuilder::new("D001")
                .dates("2025-07-01", "2025-07-05")
                .effectiveness(Effectiveness::Effective)
                .repeatable_win(true)
                .build(),
        ];

        let metrics = summary_metrics(&records).unwrap();

        assert_eq!(metrics.total_count, 1);
        assert_eq!(metrics.avg_time_to_outcome_days, 4.0);
        assert_eq!(metrics.effective_rate_percent, 100);
        assert_eq!(metrics.repeatable_win_count, 1);
    }

    #[test]
    fn test_effective_rate_rounds_to_nearest() {
        // 1 of 3 effective: 33.33% rounds down to 33
        let records = vec![
            RecordBuilder::new("D001")
                .effectiveness(Effectiveness::Effective)
                .build(),
            RecordBuilder::new("D002")
                .effectiveness(Effectiveness::NotEffective)
                .build(),
            RecordBuilder::new("D003")
                .effectiveness(Effectiveness::NotEffective)
                .build(),
        ];
        assert_eq!(summary_metrics(&records).unwrap().effective_rate_percent, 33);

        // 2 of 3 effective: 66.67% rounds up to 67
        let records = vec![
            RecordBuilder::new("D001")
                .effectiveness(Effectiveness::Effective)
                .build(),
            RecordBuilder::new("D002")
                .effectiveness(Effectiveness::Effective)
                .build(),
            RecordBuilder::new("D003")
                .effectiveness(Effectiveness::NotEffective)
                .build(),
        ];
        assert_eq!(summary_metrics(&records).unwrap().effective_rate_percent, 67);
    }

    #[test]
    fn test_propagates_invalid_record() {
        let records = vec![
            RecordBuilder::new("D001")
                .dates("2025-07-10", "2025-07-03")
                .build(),
        ];
        assert!(summary_metrics(&records).is_err());
    }
}
