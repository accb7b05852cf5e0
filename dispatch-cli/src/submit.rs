//! Submit command: validate order and vehicle batches and persist them.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use dispatch_core::{Order, SqliteDispatchStore, Vehicle, validate_orders, validate_vehicles};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    ARG_DATABASE, ARG_ORDERS, ARG_VEHICLES, ApiResponse, CliError, ENV_SUBMIT_ORDERS,
    ENV_SUBMIT_VEHICLES, database_or_default, fs::open_utf8_file, require_existing, write_json,
};

const ORDERS_ACCEPTED: &str = "Delivery orders accepted.";
const VEHICLES_ACCEPTED: &str = "Vehicle details accepted.";

/// CLI arguments for the `submit` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Validate and store delivery orders and vehicles. Orders are \
                 read from a JSON file shaped like {\"orders\": [...]} and \
                 vehicles from {\"vehicles\": [...]}. Both batches are \
                 validated before either is written; resubmitting an id \
                 replaces the stored entry.",
    about = "Submit orders and vehicles"
)]
#[ortho_config(prefix = "DISPATCH")]
pub(crate) struct SubmitArgs {
    /// Path to the SQLite dispatch database (defaults to `dispatch.db`).
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
    /// Path to a JSON file of delivery orders.
    #[arg(long = ARG_ORDERS, value_name = "path")]
    #[serde(default)]
    pub(crate) orders: Option<Utf8PathBuf>,
    /// Path to a JSON file of vehicles.
    #[arg(long = ARG_VEHICLES, value_name = "path")]
    #[serde(default)]
    pub(crate) vehicles: Option<Utf8PathBuf>,
}

impl SubmitArgs {
    pub(crate) fn into_config(self) -> Result<SubmitConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SubmitConfig::try_from(merged)
    }
}

/// Resolved `submit` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SubmitConfig {
    pub(crate) database: Utf8PathBuf,
    pub(crate) orders: Option<Utf8PathBuf>,
    pub(crate) vehicles: Option<Utf8PathBuf>,
}

impl SubmitConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        if let Some(path) = &self.orders {
            require_existing(path, ARG_ORDERS)?;
        }
        if let Some(path) = &self.vehicles {
            require_existing(path, ARG_VEHICLES)?;
        }
        Ok(())
    }
}

impl TryFrom<SubmitArgs> for SubmitConfig {
    type Error = CliError;

    fn try_from(args: SubmitArgs) -> Result<Self, Self::Error> {
        if args.orders.is_none() && args.vehicles.is_none() {
            return Err(CliError::NothingToSubmit {
                orders: ARG_ORDERS,
                vehicles: ARG_VEHICLES,
                orders_env: ENV_SUBMIT_ORDERS,
                vehicles_env: ENV_SUBMIT_VEHICLES,
            });
        }
        Ok(Self {
            database: database_or_default(args.database),
            orders: args.orders,
            vehicles: args.vehicles,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OrderBatch {
    orders: Vec<Order>,
}

#[derive(Debug, Deserialize)]
struct VehicleBatch {
    vehicles: Vec<Vehicle>,
}

pub(super) fn run_submit(args: SubmitArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_submit_with(args, &mut stdout)
}

pub(super) fn run_submit_with(args: SubmitArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    for response in execute_submit(&config)? {
        write_json(writer, &response, false)?;
    }
    Ok(())
}

/// Load and validate every batch, then persist them.
///
/// Nothing is written unless all supplied batches are valid.
pub(super) fn execute_submit(config: &SubmitConfig) -> Result<Vec<ApiResponse>, CliError> {
    let orders = config.orders.as_deref().map(load_orders).transpose()?;
    let vehicles = config.vehicles.as_deref().map(load_vehicles).transpose()?;

    let store_error = |source| CliError::Store {
        path: config.database.clone(),
        source,
    };
    let opened = SqliteDispatchStore::open(config.database.as_std_path());
    let store = opened.map_err(store_error)?;

    let mut responses = Vec::new();
    if let Some(orders) = orders {
        store.save_orders(&orders).map_err(store_error)?;
        log::info!("stored {} orders in {}", orders.len(), config.database);
        responses.push(ApiResponse::success(ORDERS_ACCEPTED));
    }
    if let Some(vehicles) = vehicles {
        store.save_vehicles(&vehicles).map_err(store_error)?;
        log::info!("stored {} vehicles in {}", vehicles.len(), config.database);
        responses.push(ApiResponse::success(VEHICLES_ACCEPTED));
    }
    Ok(responses)
}

/// Load and validate a JSON `{"orders": [...]}` batch.
pub(super) fn load_orders(path: &Utf8Path) -> Result<Vec<Order>, CliError> {
    let batch: OrderBatch = load_json(path, ARG_ORDERS)?;
    validate_orders(&batch.orders).map_err(|source| CliError::InvalidSubmission {
        field: ARG_ORDERS,
        path: path.to_path_buf(),
        source,
    })?;
    Ok(batch.orders)
}

/// Load and validate a JSON `{"vehicles": [...]}` batch.
pub(super) fn load_vehicles(path: &Utf8Path) -> Result<Vec<Vehicle>, CliError> {
    let batch: VehicleBatch = load_json(path, ARG_VEHICLES)?;
    validate_vehicles(&batch.vehicles).map_err(|source| CliError::InvalidSubmission {
        field: ARG_VEHICLES,
        path: path.to_path_buf(),
        source,
    })?;
    Ok(batch.vehicles)
}

fn load_json<T>(path: &Utf8Path, field: &'static str) -> Result<T, CliError>
where
    T: DeserializeOwned,
{
    let file = open_utf8_file(path).map_err(|source| CliError::OpenSubmission {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseSubmission {
        field,
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SubmitConfig, CliError> {
    let merged = SubmitArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SubmitConfig::try_from(merged)
}
