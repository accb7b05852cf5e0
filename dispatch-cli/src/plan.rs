//! Plan command: generate a dispatch plan from the stored snapshot.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use dispatch_core::{DispatchPlan, Planner, SqliteDispatchStore};
use dispatch_solver_greedy::{GreedyPlanner, GreedyPlannerConfig, VehicleOrder};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_DATABASE, ARG_VEHICLE_ORDER, CliError, database_or_default, require_existing, write_json,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Assign every stored order to a vehicle, most urgent first, \
                 choosing the nearest vehicle with spare capacity. Prints one \
                 route per vehicle as JSON. Orders no vehicle can carry are \
                 left out of the plan.",
    about = "Generate a dispatch plan"
)]
#[ortho_config(prefix = "DISPATCH")]
pub(crate) struct PlanArgs {
    /// Path to the SQLite dispatch database (defaults to `dispatch.db`).
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
    /// Vehicle ordering for tie-breaks and output: `by-id` or `as-stored`.
    #[arg(long = ARG_VEHICLE_ORDER, value_name = "order")]
    #[serde(default)]
    pub(crate) vehicle_order: Option<VehicleOrder>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(PlanConfig::from(merged))
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    pub(crate) database: Utf8PathBuf,
    pub(crate) vehicle_order: VehicleOrder,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.database, ARG_DATABASE)
    }
}

impl From<PlanArgs> for PlanConfig {
    fn from(args: PlanArgs) -> Self {
        Self {
            database: database_or_default(args.database),
            vehicle_order: args.vehicle_order.unwrap_or_default(),
        }
    }
}

/// Builds a planner for the current plan invocation.
pub(super) trait PlannerBuilder {
    fn build(&self, config: &PlanConfig) -> Result<Box<dyn Planner>, CliError>;
}

pub(super) struct DefaultPlannerBuilder;

impl PlannerBuilder for DefaultPlannerBuilder {
    fn build(&self, config: &PlanConfig) -> Result<Box<dyn Planner>, CliError> {
        let store_error = |source| CliError::Store {
            path: config.database.clone(),
            source,
        };
        let opened = SqliteDispatchStore::open(config.database.as_std_path());
        let store = opened.map_err(store_error)?;
        let planner_config = GreedyPlannerConfig {
            vehicle_order: config.vehicle_order,
        };
        Ok(Box::new(GreedyPlanner::with_config(store, planner_config)))
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &DefaultPlannerBuilder, &mut stdout)
}

pub(super) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn PlannerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let plan = execute_plan(args, builder)?;
    write_json(writer, &plan, true)
}

fn execute_plan(args: PlanArgs, builder: &dyn PlannerBuilder) -> Result<DispatchPlan, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let planner = builder.build(&config)?;
    let plan = planner.plan().map_err(|source| CliError::Plan { source })?;
    log::info!(
        "planned {} orders across {} vehicles",
        plan.assigned_order_count(),
        plan.len()
    );
    Ok(plan)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(PlanConfig::from(merged))
}
