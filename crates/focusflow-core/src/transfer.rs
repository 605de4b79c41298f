//! Local import/export of the persisted records.
//!
//! Export writes a single document `{ sessions, stats, settings }` holding
//! the full current value of each record. Import accepts the same shape
//! with any subset of the three keys; the document is parsed into typed
//! records up front, so a malformed file is rejected whole with no partial
//! effect.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TransferError;
use crate::session::Session;
use crate::settings::Settings;
use crate::stats::WellnessStats;

/// The exported document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportBundle {
    pub sessions: Vec<Session>,
    pub stats: WellnessStats,
    pub settings: Settings,
}

/// An import document; keys absent from the file stay `None` and leave the
/// corresponding record untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportBundle {
    #[serde(default)]
    pub sessions: Option<Vec<Session>>,
    #[serde(default)]
    pub stats: Option<WellnessStats>,
    #[serde(default)]
    pub settings: Option<Settings>,
}

/// Parse an import document.
///
/// # Errors
/// Fails if the document is not valid JSON or any present record does not
/// match its schema. Nothing is written on failure.
pub fn parse_import(raw: &str) -> Result<ImportBundle, TransferError> {
    serde_json::from_str(raw).map_err(TransferError::InvalidDocument)
}

/// Read and parse an import document from disk.
pub fn read_import(path: &Path) -> Result<ImportBundle, TransferError> {
    let raw = std::fs::read_to_string(path).map_err(|source| TransferError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    parse_import(&raw)
}

/// Write an export document to disk as pretty JSON.
pub fn write_export(bundle: &ExportBundle, path: &Path) -> Result<(), TransferError> {
    let raw = serde_json::to_string_pretty(bundle)
        .map_err(TransferError::InvalidDocument)?;
    std::fs::write(path, raw).map_err(|source| TransferError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Default export file name, stamped with the given date.
pub fn default_export_filename(date: NaiveDate) -> String {
    format!("wellness-data-{}.json", date.format("%Y-%m-%d"))
}
