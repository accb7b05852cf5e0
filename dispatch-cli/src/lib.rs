//! Command-line interface for submitting dispatch data and generating plans.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

mod error;
mod fs;
mod plan;
mod submit;

pub use error::CliError;

use plan::{PlanArgs, run_plan};
use submit::{SubmitArgs, run_submit};

const ARG_DATABASE: &str = "database";
const ARG_ORDERS: &str = "orders";
const ARG_VEHICLES: &str = "vehicles";
const ARG_VEHICLE_ORDER: &str = "vehicle-order";
const ENV_SUBMIT_ORDERS: &str = "DISPATCH_CMDS_SUBMIT_ORDERS";
const ENV_SUBMIT_VEHICLES: &str = "DISPATCH_CMDS_SUBMIT_VEHICLES";
const DEFAULT_DATABASE: &str = "dispatch.db";

/// Run the dispatch CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Submit(args) => run_submit(args),
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "dispatch",
    about = "Submit delivery orders and vehicles, then plan their dispatch",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate and store orders and vehicles.
    Submit(SubmitArgs),
    /// Generate a dispatch plan from the stored orders and vehicles.
    Plan(PlanArgs),
}

/// Acknowledgement printed for each accepted submission batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ApiResponse {
    status: String,
    message: String,
}

impl ApiResponse {
    fn success(message: &str) -> Self {
        Self {
            status: "success".to_owned(),
            message: message.to_owned(),
        }
    }
}

fn database_or_default(database: Option<Utf8PathBuf>) -> Utf8PathBuf {
    database.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATABASE))
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn write_json<T>(writer: &mut dyn Write, value: &T, pretty: bool) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
