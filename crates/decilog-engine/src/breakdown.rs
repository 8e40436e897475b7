use std::collections::HashMap;

use decilog_types::{DecisionRecord, Effectiveness, InputType};
use serde::{Deserialize, Serialize};

use crate::classify::classify_input_type;

/// Count for one effectiveness category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectivenessCount {
    pub effectiveness: Effectiveness,
    pub count: usize,
}

/// Per-category outcome counts in fixed display order.
///
/// Every enum value gets an entry, zero counts included, so chart
/// consumers see a stable category axis.
pub fn effectiveness_breakdown(records: &[DecisionRecord]) -> Vec<EffectivenessCount> {
    let mut counts: HashMap<Effectiveness, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.effectiveness).or_insert(0) += 1;
    }

    Effectiveness::ALL
        .iter()
        .map(|&effectiveness| EffectivenessCount {
            effectiveness,
            count: counts.get(&effectiveness).copied().unwrap_or(0),
        })
        .collect()
}

/// How often one exact input text was used, with its derived category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputUsage {
    pub input_type: InputType,
    pub inputs_used: String,
    pub count: usize,
}

/// Usage frequency of each exact input text, most used first.
///
/// Groups are keyed by the exact `inputs_used` string; the paired
/// category derives from that same string, so two distinct texts never
/// merge even when they classify identically. Ties stay in
/// first-encountered order (stable sort).
pub fn input_usage_frequency(records: &[DecisionRecord]) -> Vec<InputUsage> {
    let mut groups: Vec<InputUsage> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match index.get(record.inputs_used.as_str()) {
            Some(&i) => groups[i].count += 1,
            None => {
                index.insert(record.inputs_used.as_str(), groups.len());
                groups.push(InputUsage {
                    input_type: classify_input_type(&record.inputs_used),
                    inputs_used: record.inputs_used.clone(),
                    count: 1,
                });
            }
        }
    }

    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}
