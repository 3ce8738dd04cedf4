//! Loading records from JSON sources
//!
//! The loader hands the reducer an in-memory, ordered sequence of records.
//! It reads the whole file at once; there is no streaming path.

use crate::error::Result;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// One input data point: a pair of integers to be summed.
///
/// Unknown JSON keys are ignored; a missing `a` or `b` is a decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub a: i64,
    pub b: i64,
}

/// Read `path` and deserialize it as a JSON array of records.
pub async fn load_records(path: &Path) -> Result<Vec<Record>> {
    let content = fs::read_to_string(path).await?;
    let records: Vec<Record> = serde_json::from_str(&content)?;
    debug!("Loaded {} record(s) from {}", records.len(), path.display());
    Ok(records)
}
