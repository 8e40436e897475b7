//! Built-in sample decision log.
//!
//! A small, fixed record set so a session can run without an external
//! file. Covers every effectiveness category, repeated owners, and
//! repeated input text.

use chrono::NaiveDate;
use decilog_types::{DecisionRecord, Effectiveness};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// The five-record sample set, insertion order fixed.
pub fn records() -> Vec<DecisionRecord> {
    vec![
        DecisionRecord {
            id: "D001".to_string(),
            owner: "Maria G.".to_string(),
            team: "Call Center".to_string(),
            decision_date: date(2025, 7, 1),
            outcome_date: date(2025, 7, 5),
            goal: "Lower ASA".to_string(),
            what_was_tried: "Realigned shift start times".to_string(),
            inputs_used: "Call volume trend, shift overlap data".to_string(),
            result: "ASA dropped from 42s to 28s".to_string(),
            effectiveness: Effectiveness::Effective,
            repeatable_win: true,
            star_decision: true,
        },
        DecisionRecord {
            id: "D002".to_string(),
            owner: "James K.".to_string(),
            team: "Referral".to_string(),
            decision_date: date(2025, 7, 3),
            outcome_date: date(2025, 7, 10),
            goal: "Faster Scheduling".to_string(),
            what_was_tried: "Removed manual form review".to_string(),
            inputs_used: "Referral approval logs".to_string(),
            result: "Scheduling improved by 2 days".to_string(),
            effectiveness: Effectiveness::SomewhatEffective,
            repeatable_win: false,
            star_decision: false,
        },
        DecisionRecord {
            id: "D003".to_string(),
            owner: "Linda T.".to_string(),
            team: "Billing".to_string(),
            decision_date: date(2025, 7, 5),
            outcome_date: date(2025, 7, 17),
            goal: "Lower AR Days".to_string(),
            what_was_tried: "Added denial triage in backlog".to_string(),
            inputs_used: "Anecdotal staff complaints".to_string(),
            result: "No measurable impact yet".to_string(),
            effectiveness: Effectiveness::NotEffective,
            repeatable_win: false,
            star_decision: false,
        },
        DecisionRecord {
            id: "D004".to_string(),
            owner: "Carlos V.".to_string(),
            team: "QA".to_string(),
            decision_date: date(2025, 7, 6),
            outcome_date: date(2025, 7, 11),
            goal: "Improve Patient Experience".to_string(),
            what_was_tried: "Call empathy scripts".to_string(),
            inputs_used: "Patient survey comments".to_string(),
            result: "Survey scores improved".to_string(),
            effectiveness: Effectiveness::Effective,
            repeatable_win: true,
            star_decision: true,
        },
        DecisionRecord {
            id: "D005".to_string(),
            owner: "Maria G.".to_string(),
            team: "Call Center".to_string(),
            decision_date: date(2025, 7, 8),
            outcome_date: date(2025, 7, 10),
            goal: "Reduce Call Transfers".to_string(),
            what_was_tried: "Expanded self-service tree".to_string(),
            inputs_used: "Top 10 call reasons analysis".to_string(),
            result: "Transfers down 12%".to_string(),
            effectiveness: Effectiveness::Effective,
            repeatable_win: true,
            star_decision: false,
        },
    ]
}
