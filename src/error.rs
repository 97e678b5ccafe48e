//! Error types for stagehand
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow` and maps
//! every fatal variant to exit code 1 in one place (`main`).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for stagehand operations
pub type StagehandResult<T> = Result<T, StagehandError>;

/// Main error type for stagehand operations
///
/// Every variant here is fatal: soft-skip conditions (absent map fields,
/// missing source directories, externals without a rules file) are warnings,
/// not errors, and never show up in this enum.
#[derive(Error, Debug)]
pub enum StagehandError {
    /// The rules file does not exist
    #[error("no rules file found at {path}")]
    MissingRules { path: PathBuf },

    /// Neither manifest filename exists under the project root
    #[error("cannot find a project manifest (app.json or package.json) in {root}")]
    MissingManifest { root: PathBuf },

    /// The project manifest is not parseable JSON
    #[error("manifest {path} is not valid JSON: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// The rules file is not parseable JSON
    #[error("rules file {path} is not valid JSON: {message}")]
    RulesParse { path: PathBuf, message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
