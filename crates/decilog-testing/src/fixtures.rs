//! Fixtures for sample data generation and placement.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;
use decilog_types::{DecisionRecord, Effectiveness};

/// Builder for decision records in tests.
///
/// Starts from a well-formed record so tests only spell out the fields
/// they care about.
pub struct RecordBuilder {
    record: DecisionRecord,
}

impl RecordBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            record: DecisionRecord {
                id: id.to_string(),
                owner: "Alex P.".to_string(),
                team: "Ops".to_string(),
                decision_date: parse_date("2025-07-01"),
                outcome_date: parse_date("2025-07-08"),
                goal: "Reduce backlog".to_string(),
                what_was_tried: "Reordered the queue".to_string(),
                inputs_used: "Weekly ticket review".to_string(),
                result: "Backlog shrank".to_string(),
                effectiveness: Effectiveness::Effective,
                repeatable_win: false,
                star_decision: false,
            },
        }
    }

    pub fn owner(mut self, owner: &str) -> Self {
        self.record.owner = owner.to_string();
        self
    }

    pub fn team(mut self, team: &str) -> Self {
        self.record.team = team.to_string();
        self
    }

    /// Set both dates from ISO-8601 literals.
    pub fn dates(mut self, decision: &str, outcome: &str) -> Self {
        self.record.decision_date = parse_date(decision);
        self.record.outcome_date = parse_date(outcome);
        self
    }

    pub fn goal(mut self, goal: &str) -> Self {
        self.record.goal = goal.to_string();
        self
    }

    pub fn inputs_used(mut self, inputs_used: &str) -> Self {
        self.record.inputs_used = inputs_used.to_string();
        self
    }

    pub fn result(mut self, result: &str) -> Self {
        self.record.result = result.to_string();
        self
    }

    pub fn effectiveness(mut self, effectiveness: Effectiveness) -> Self {
        self.record.effectiveness = effectiveness;
        self
    }

    pub fn repeatable_win(mut self, repeatable_win: bool) -> Self {
        self.record.repeatable_win = repeatable_win;
        self
    }

    pub fn star_decision(mut self, star_decision: bool) -> Self {
        self.record.star_decision = star_decision;
        self
    }

    pub fn build(self) -> DecisionRecord {
        self.record
    }
}

fn parse_date(literal: &str) -> NaiveDate {
    literal
        .parse()
        .unwrap_or_else(|_| panic!("invalid ISO-8601 date literal: {}", literal))
}

/// Write records as a JSON array file and return its path.
pub fn write_json_file(dir: &Path, name: &str, records: &[DecisionRecord]) -> Result<PathBuf> {
    let path = dir.join(name);
    let content = serde_json::to_string_pretty(records)?;
    fs::write(&path, content)?;
    Ok(path)
}

/// Write records as a JSONL file (one JSON object per line) and return its path.
pub fn write_jsonl_file(dir: &Path, name: &str, records: &[DecisionRecord]) -> Result<PathBuf> {
    let path = dir.join(name);
    let mut lines = Vec::with_capacity(records.len());
    for record in records {
        lines.push(serde_json::to_string(record)?);
    }
    fs::write(&path, lines.join("\n"))?;
    Ok(path)
}
