//! Job payload classification from repository file metadata.
//!
//! The repository only hands us a path; the extension decides whether the
//! job runs a data-integration transformation, a data-integration job, or
//! generic content, and which background-execution action handles it.

use serde::{Deserialize, Serialize};

/// Suffix appended to a file extension to form the background-execution
/// action identifier.
pub const BACKGROUND_EXECUTION_ACTION_ID: &str = ".backgroundExecution";

/// The kind of content a scheduled job executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadKind {
    /// Data-integration transformation (`.ktr`).
    Transformation,
    /// Data-integration job (`.kjb`).
    Job,
    /// Any other repository content.
    Other,
}

impl PayloadKind {
    /// Classifies a repository path by its extension, case-insensitively.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match extension(path) {
            Some(ext) if ext.eq_ignore_ascii_case("ktr") => Self::Transformation,
            Some(ext) if ext.eq_ignore_ascii_case("kjb") => Self::Job,
            _ => Self::Other,
        }
    }
}

/// Whether the path points at data-integration content.
#[must_use]
pub fn is_pdi_file(path: &str) -> bool {
    matches!(
        PayloadKind::from_path(path),
        PayloadKind::Transformation | PayloadKind::Job
    )
}

/// Resolves the background-execution action identifier for an input file,
/// e.g. `reports/sales.prpt` resolves to `prpt.backgroundExecution`.
///
/// Returns `None` for empty paths and paths without an extension.
#[must_use]
pub fn resolve_action_id(input_file: &str) -> Option<String> {
    extension(input_file).map(|ext| format!("{ext}{BACKGROUND_EXECUTION_ACTION_ID}"))
}

fn extension(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next()?;
    match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => Some(ext),
        _ => None,
    }
}
