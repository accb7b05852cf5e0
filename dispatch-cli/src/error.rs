//! Error types emitted by the dispatch CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use dispatch_core::{PlanError, SqliteDispatchStoreError, ValidationError};
use thiserror::Error;

/// Errors emitted by the dispatch CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// `submit` was given neither an orders nor a vehicles file.
    #[error(
        "nothing to submit (set --{orders} or --{vehicles}, or {orders_env} or {vehicles_env})"
    )]
    NothingToSubmit {
        orders: &'static str,
        vehicles: &'static str,
        orders_env: &'static str,
        vehicles_env: &'static str,
    },
    /// A referenced input path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening a submission file failed.
    #[error("failed to open {field} file at {path:?}: {source}")]
    OpenSubmission {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A submission file could not be decoded.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseSubmission {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A submission batch failed validation.
    #[error("{field} in {path:?} failed validation: {source}")]
    InvalidSubmission {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: ValidationError,
    },
    /// Opening or writing the dispatch database failed.
    #[error("dispatch database {path:?}: {source}")]
    Store {
        path: Utf8PathBuf,
        #[source]
        source: SqliteDispatchStoreError,
    },
    /// The planner could not produce a plan.
    #[error("planning failed: {source}")]
    Plan {
        #[source]
        source: PlanError,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
