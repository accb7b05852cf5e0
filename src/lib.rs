//! Facade crate for the dispatch engine.
//!
//! This crate re-exports the core domain types and exposes the greedy planner
//! and the SQLite store behind feature flags.
//!
//! # Examples
//! ```
//! # #[cfg(all(feature = "solver-greedy", feature = "test-support"))]
//! # {
//! use geo::Coord;
//! use dispatch_engine::{GreedyPlanner, Order, Planner, Priority, Vehicle};
//! use dispatch_engine::test_support::MemoryStore;
//!
//! let store = MemoryStore::new(
//!     [Order::new("ORD1", Coord { x: 0.0, y: 0.0 }, 5.0, Priority::High)],
//!     [Vehicle::new("VEH1", 10.0, Coord { x: 0.1, y: 0.0 })],
//! );
//! let plan = GreedyPlanner::new(store).plan().expect("in-memory planning");
//! assert_eq!(plan.assigned_order_count(), 1);
//! # }
//! ```

#![forbid(unsafe_code)]

pub use dispatch_core::{
    DispatchPlan, DispatchStore, FieldViolation, Order, PlanError, Planner, Priority, RoutePlan,
    StoreError, ValidationError, Vehicle, format_distance_km, haversine_km, validate_orders,
    validate_vehicles,
};

#[cfg(feature = "store-sqlite")]
pub use dispatch_core::{SqliteDispatchStore, SqliteDispatchStoreError};

#[cfg(feature = "test-support")]
pub use dispatch_core::test_support;

#[cfg(feature = "solver-greedy")]
pub use dispatch_solver_greedy::{
    GreedyPlanner, GreedyPlannerConfig, RouteState, VehicleOrder, allocate, prioritise,
};
