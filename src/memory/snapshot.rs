//! JSON snapshot loading.
//!
//! The engine operates on an in-memory collection of records supplied by the
//! caller. For the CLI (and for callers without their own store) a snapshot
//! is a JSON array of [`MemoryRecord`]s on disk.

use std::path::Path;

use anyhow::{Context, Result};

use crate::memory::types::MemoryRecord;

/// Load a snapshot file: a JSON array of memory records.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<MemoryRecord>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot file: {}", path.display()))?;
    let records: Vec<MemoryRecord> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse snapshot JSON: {}", path.display()))?;
    tracing::debug!(count = records.len(), path = %path.display(), "loaded snapshot");
    Ok(records)
}
