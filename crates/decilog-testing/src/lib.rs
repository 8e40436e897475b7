//! Testing infrastructure for decilog integration tests.
//!
//! This crate provides utilities for writing robust tests:
//! - `RecordBuilder`: declarative construction of decision records
//! - `fixtures`: record-file generation and placement

pub mod fixtures;

pub use fixtures::{RecordBuilder, write_json_file, write_jsonl_file};
