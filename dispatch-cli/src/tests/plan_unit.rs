//! Focused unit tests covering plan configuration and output.

use super::helpers::utf8_tempdir;
use super::*;
use crate::plan::{PlanConfig, PlannerBuilder, config_from_layers_for_test, run_plan_with};
use dispatch_core::{DispatchPlan, PlanError, Planner, RoutePlan};
use dispatch_solver_greedy::VehicleOrder;
use rstest::rstest;
use serde_json::Value;

struct StubPlanner {
    plan: DispatchPlan,
}

impl Planner for StubPlanner {
    fn plan(&self) -> Result<DispatchPlan, PlanError> {
        Ok(self.plan.clone())
    }
}

struct StubPlannerBuilder {
    plan: DispatchPlan,
}

impl PlannerBuilder for StubPlannerBuilder {
    fn build(&self, _config: &PlanConfig) -> Result<Box<dyn Planner>, CliError> {
        Ok(Box::new(StubPlanner {
            plan: self.plan.clone(),
        }))
    }
}

#[rstest]
fn plan_config_defaults() {
    let config = PlanConfig::from(plan::PlanArgs::default());
    assert_eq!(config.database, Utf8PathBuf::from(DEFAULT_DATABASE));
    assert_eq!(config.vehicle_order, VehicleOrder::ById);
}

#[rstest]
fn plan_requires_an_existing_database() {
    let (_tmp, root) = utf8_tempdir();
    let config = PlanConfig {
        database: root.join("absent.db"),
        vehicle_order: VehicleOrder::ById,
    };
    match config.validate_sources().expect_err("missing database") {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_DATABASE),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn plan_output_uses_dispatch_plan_shape() {
    let (_tmp, root) = utf8_tempdir();
    let database = root.join("dispatch.db");
    std::fs::write(&database, b"").expect("touch database");

    let route = RoutePlan {
        total_load: 12.0,
        total_distance_km: 3.456,
        ..RoutePlan::empty("VEH1")
    };
    let builder = StubPlannerBuilder {
        plan: DispatchPlan::new(vec![route]),
    };
    let args = plan::PlanArgs {
        database: Some(database),
        vehicle_order: None,
    };
    let mut stdout = Vec::new();
    run_plan_with(args, &builder, &mut stdout).expect("plan should succeed");

    let json: Value = serde_json::from_slice(&stdout).expect("stdout is JSON");
    let first = &json["dispatchPlan"][0];
    assert_eq!(first["vehicleId"], "VEH1");
    assert_eq!(first["totalLoad"], 12.0);
    assert_eq!(first["totalDistance"], "3.46 km");
    assert_eq!(first["assignedOrders"], Value::Array(Vec::new()));
}

#[rstest]
fn merge_layers_reads_vehicle_order() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "vehicle_order": "by-id" }), None);
    composer.push_environment(json!({ "vehicle_order": "as-stored" }));

    let config = config_from_layers_for_test(composer.layers()).expect("merged config");
    assert_eq!(config.vehicle_order, VehicleOrder::AsStored);
    assert_eq!(config.database, Utf8PathBuf::from(DEFAULT_DATABASE));
}

#[rstest]
fn merge_layers_rejects_unknown_vehicle_order() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "vehicle_order": "random" }));

    match config_from_layers_for_test(composer.layers()) {
        Err(CliError::Configuration(_)) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn vehicle_order_flag_parses() {
    let cli = Cli::try_parse_from(["dispatch", "plan", "--vehicle-order", "as-stored"])
        .expect("arguments parse");
    match cli.command {
        Command::Plan(args) => assert_eq!(args.vehicle_order, Some(VehicleOrder::AsStored)),
        Command::Submit(_) => panic!("expected plan command"),
    }
}

#[rstest]
fn unknown_vehicle_order_flag_is_rejected() {
    let err = Cli::try_parse_from(["dispatch", "plan", "--vehicle-order", "sideways"])
        .expect_err("invalid value");
    assert!(err.to_string().contains("sideways"));
}
