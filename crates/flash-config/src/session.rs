//! Start-up import and exit export.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Files loaded before the first prompt and written on exit.
///
/// Empty strings mean "not set". Command-line flags take precedence.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub import_path: String,

    #[serde(default)]
    pub export_path: String,
}

impl SessionConfig {
    #[must_use]
    pub fn import_file(&self) -> Option<PathBuf> {
        non_empty_path(&self.import_path)
    }

    #[must_use]
    pub fn export_file(&self) -> Option<PathBuf> {
        non_empty_path(&self.export_path)
    }
}

fn non_empty_path(value: &str) -> Option<PathBuf> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}
