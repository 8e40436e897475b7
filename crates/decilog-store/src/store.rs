use std::collections::HashSet;
use std::path::Path;

use decilog_types::DecisionRecord;

use crate::config::Config;
use crate::error::{LoadError, Result};
use crate::{io, sample};

/// The authoritative, ordered record set for one analytics session.
///
/// Loaded once, read-only afterwards. The store owns the canonical list;
/// engine queries read it through `all()` and return newly allocated
/// derived views, so shared references are safe across readers.
#[derive(Debug, Clone)]
pub struct DecisionStore {
    records: Vec<DecisionRecord>,
}

impl DecisionStore {
    /// Build a store from already-parsed records, validating each record
    /// and the set-level id-uniqueness constraint. Insertion order is
    /// preserved.
    pub fn from_records(records: Vec<DecisionRecord>) -> Result<Self> {
        let mut seen_ids: HashSet<&str> = HashSet::new();
        for record in &records {
            record.validate()?;
            if !seen_ids.insert(&record.id) {
                return Err(LoadError::DuplicateId(record.id.clone()));
            }
        }

        Ok(Self { records })
    }

    /// Load a record file, dispatching on extension: `.jsonl` is read
    /// line-delimited, anything else as a JSON array.
    pub fn load(path: &Path) -> Result<Self> {
        let records = match path.extension().and_then(|ext| ext.to_str()) {
            Some("jsonl") => io::read_records_jsonl(path)?,
            _ => io::read_records_json(path)?,
        };
        Self::from_records(records)
    }

    /// Load the session store from the configured source, falling back to
    /// the built-in sample set when no log file is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        match &config.log_file {
            Some(path) => Self::load(path),
            None => Ok(Self::sample()),
        }
    }

    /// The built-in five-record sample set.
    pub fn sample() -> Self {
        Self {
            records: sample::records(),
        }
    }

    /// Full record sequence, insertion order preserved.
    pub fn all(&self) -> &[DecisionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
