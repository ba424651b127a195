//! # Saved-Estimate Log
//!
//! Best-effort local record of past estimates. Each entry pairs the
//! original input with the bill it produced, a UTC timestamp, and a
//! category tag, keyed by UUID for retrieval and deletion.
//!
//! Saves are atomic: write to a `.tmp` sibling, fsync, rename. A schema
//! version field is checked on load so incompatible files fail loudly
//! instead of deserializing into garbage.
//!
//! ## Example
//!
//! ```rust,no_run
//! use estimate_core::catalog::{Catalog, SlabSystem};
//! use estimate_core::estimators::{CeilingInput, EstimateItem};
//! use estimate_core::history::{save_log, EstimateLog};
//! use std::path::Path;
//!
//! let item = EstimateItem::Ceiling(CeilingInput {
//!     label: "Roof slab".to_string(),
//!     length_m: 4.0,
//!     width_m: 3.0,
//!     thickness_cm: 15.0,
//!     system: SlabSystem::Normal,
//! });
//! let bill = item.estimate(Catalog::builtin()).unwrap();
//!
//! let mut log = EstimateLog::default();
//! log.add(item, bill);
//! save_log(&log, Path::new("estimates.json")).unwrap();
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bill::MaterialBill;
use crate::errors::{EstimateError, EstimateResult};
use crate::estimators::EstimateItem;

/// Current schema version for history files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// One saved estimate: the input, its bill, and bookkeeping fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedEstimate {
    /// Stable identifier for retrieval/deletion
    pub id: Uuid,

    /// When the estimate was saved
    pub saved_at: DateTime<Utc>,

    /// Estimate category tag (e.g., "Ceiling")
    pub category: String,

    /// User label copied from the input
    pub label: String,

    /// The original calculator input
    pub item: EstimateItem,

    /// The bill the calculator produced
    pub bill: MaterialBill,
}

/// Ordered list of saved estimates, newest last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateLog {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Saved entries in insertion order
    pub entries: Vec<SavedEstimate>,
}

impl Default for EstimateLog {
    fn default() -> Self {
        EstimateLog {
            version: SCHEMA_VERSION.to_string(),
            entries: Vec::new(),
        }
    }
}

impl EstimateLog {
    /// Append an estimate and its bill. Returns the assigned id.
    pub fn add(&mut self, item: EstimateItem, bill: MaterialBill) -> Uuid {
        let id = Uuid::new_v4();
        self.entries.push(SavedEstimate {
            id,
            saved_at: Utc::now(),
            category: item.category().to_string(),
            label: item.label().to_string(),
            item,
            bill,
        });
        id
    }

    /// Remove an entry by id. Returns the removed entry if it existed.
    pub fn remove(&mut self, id: &Uuid) -> Option<SavedEstimate> {
        let index = self.entries.iter().position(|e| &e.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Get an entry by id.
    pub fn get(&self, id: &Uuid) -> Option<&SavedEstimate> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Number of saved entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Save a log to a file with atomic write semantics.
///
/// Writes to a `.tmp` sibling, syncs, then renames over the target so an
/// interrupted save never leaves a corrupt file behind.
pub fn save_log(log: &EstimateLog, path: &Path) -> EstimateResult<()> {
    let json = serde_json::to_string_pretty(log).map_err(|e| EstimateError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        EstimateError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        EstimateError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        EstimateError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        EstimateError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a log from a file, validating its schema version.
pub fn load_log(path: &Path) -> EstimateResult<EstimateLog> {
    let mut file = File::open(path).map_err(|e| {
        EstimateError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        EstimateError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let log: EstimateLog =
        serde_json::from_str(&contents).map_err(|e| EstimateError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&log.version)?;

    Ok(log)
}

/// Validate that a file version is compatible with the current schema.
///
/// Major versions must match; for 0.x, a file written by a newer minor
/// version is also rejected (breaking changes allowed before 1.0).
fn validate_version(file_version: &str) -> EstimateResult<()> {
    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    let mismatch = || EstimateError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, SlabSystem};
    use crate::estimators::CeilingInput;
    use std::path::PathBuf;

    fn test_item() -> EstimateItem {
        EstimateItem::Ceiling(CeilingInput {
            label: "Roof slab".to_string(),
            length_m: 4.0,
            width_m: 3.0,
            thickness_cm: 15.0,
            system: SlabSystem::Normal,
        })
    }

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("estimate-log-{}.json", Uuid::new_v4()))
    }

    #[test]
    fn test_add_get_remove() {
        let item = test_item();
        let bill = item.estimate(Catalog::builtin()).unwrap();

        let mut log = EstimateLog::default();
        let id = log.add(item, bill);
        assert_eq!(log.len(), 1);

        let entry = log.get(&id).unwrap();
        assert_eq!(entry.category, "Ceiling");
        assert_eq!(entry.label, "Roof slab");

        assert!(log.remove(&id).is_some());
        assert!(log.is_empty());
        assert!(log.remove(&id).is_none());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let item = test_item();
        let bill = item.estimate(Catalog::builtin()).unwrap();

        let mut log = EstimateLog::default();
        log.add(item, bill);

        let path = temp_path();
        save_log(&log, &path).unwrap();
        let loaded = load_log(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(log, loaded);
    }

    #[test]
    fn test_newer_minor_version_rejected() {
        let mut log = EstimateLog::default();
        log.version = "0.99.0".to_string();

        let path = temp_path();
        save_log(&log, &path).unwrap();
        let result = load_log(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(
            result,
            Err(EstimateError::VersionMismatch { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_log(Path::new("/nonexistent/estimates.json"));
        assert!(matches!(result, Err(EstimateError::FileError { .. })));
    }
}
