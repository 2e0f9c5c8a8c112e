//! JSON document snapshot writer

use crate::crawler::ProxyRecord;
use crate::Result;
use std::path::Path;

/// Writes the full record sequence as an indented JSON document
///
/// Overwrites any previous content at `path`. The snapshot is not job-scoped:
/// concurrent jobs write the same path and the last writer wins.
pub fn write_snapshot(path: &Path, records: &[ProxyRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    tracing::debug!("wrote snapshot of {} records to {}", records.len(), path.display());
    Ok(())
}
