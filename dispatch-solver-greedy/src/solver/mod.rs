//! `GreedyPlanner` implementation over a `DispatchStore`.

use std::{fmt, str::FromStr};

use dispatch_core::{DispatchPlan, DispatchStore, PlanError, Planner, Vehicle};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::allocate;

/// Order in which vehicles are offered orders, and in which plans are
/// returned.
///
/// The allocator favours the earlier vehicle when two are equally close, so
/// this choice decides ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum VehicleOrder {
    /// Ascending vehicle id.
    #[default]
    ById,
    /// The order the store lists them in.
    AsStored,
}

impl VehicleOrder {
    /// Kebab-case name used on the command line and in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ById => "by-id",
            Self::AsStored => "as-stored",
        }
    }

    fn arrange(self, vehicles: &mut [Vehicle]) {
        match self {
            Self::ById => vehicles.sort_by(|a, b| a.id.cmp(&b.id)),
            Self::AsStored => {}
        }
    }
}

impl fmt::Display for VehicleOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the exact kebab-case names, the same spellings config files and
/// environment variables accept.
impl FromStr for VehicleOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "by-id" => Ok(Self::ById),
            "as-stored" => Ok(Self::AsStored),
            other => Err(format!(
                "unknown vehicle order '{other}' (expected 'by-id' or 'as-stored')"
            )),
        }
    }
}

/// Configuration for [`GreedyPlanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GreedyPlannerConfig {
    /// How vehicles are ordered before allocation.
    pub vehicle_order: VehicleOrder,
}

/// Planner that reads a store snapshot and runs the greedy allocator.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dispatch_core::{Order, Planner, Priority, Vehicle};
/// use dispatch_core::test_support::MemoryStore;
/// use dispatch_solver_greedy::GreedyPlanner;
///
/// let store = MemoryStore::new(
///     [Order::new("ORD1", Coord { x: 0.0, y: 0.0 }, 5.0, Priority::High)],
///     [
///         Vehicle::new("VEH2", 10.0, Coord { x: 0.0, y: 0.0 }),
///         Vehicle::new("VEH1", 10.0, Coord { x: 0.0, y: 0.0 }),
///     ],
/// );
/// let plan = GreedyPlanner::new(store).plan()?;
/// let route = plan.route_for("VEH1").expect("VEH1 has a route");
/// assert_eq!(route.order_ids().collect::<Vec<_>>(), ["ORD1"]);
/// # Ok::<(), dispatch_core::PlanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GreedyPlanner<S>
where
    S: DispatchStore,
{
    store: S,
    config: GreedyPlannerConfig,
}

impl<S> GreedyPlanner<S>
where
    S: DispatchStore,
{
    /// Construct a planner using default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, GreedyPlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    pub const fn with_config(store: S, config: GreedyPlannerConfig) -> Self {
        Self { store, config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &GreedyPlannerConfig {
        &self.config
    }
}

impl<S> Planner for GreedyPlanner<S>
where
    S: DispatchStore + Send + Sync,
{
    fn plan(&self) -> Result<DispatchPlan, PlanError> {
        let orders = self
            .store
            .list_orders()
            .map_err(|err| PlanError::store("orders", err))?;
        let mut vehicles = self
            .store
            .list_vehicles()
            .map_err(|err| PlanError::store("vehicles", err))?;
        log::debug!(
            "planning {} orders over {} vehicles ({})",
            orders.len(),
            vehicles.len(),
            self.config.vehicle_order
        );

        self.config.vehicle_order.arrange(&mut vehicles);
        Ok(DispatchPlan::new(allocate(&orders, &vehicles)))
    }
}
