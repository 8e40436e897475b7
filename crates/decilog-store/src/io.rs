use std::path::Path;

use decilog_types::DecisionRecord;

use crate::error::Result;

/// Read a JSON array of decision records from a file.
pub fn read_records_json(path: &Path) -> Result<Vec<DecisionRecord>> {
    let text = std::fs::read_to_string(path)?;
    let records: Vec<DecisionRecord> = serde_json::from_str(&text)?;
    Ok(records)
}

/// Read line-delimited decision records (one JSON object per line).
///
/// Blank lines are skipped; a malformed line fails the whole load.
pub fn read_records_jsonl(path: &Path) -> Result<Vec<DecisionRecord>> {
    let text = std::fs::read_to_string(path)?;

    let mut records: Vec<DecisionRecord> = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: DecisionRecord = serde_json::from_str(line)?;
        records.push(record);
    }

    Ok(records)
}
