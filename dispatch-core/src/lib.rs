//! Core domain types for the dispatch engine.
//!
//! Orders and vehicles are plain data read from a [`DispatchStore`]; a
//! [`Planner`] turns a snapshot of both into a [`DispatchPlan`]. Submission
//! batches are checked with [`validate_orders`] and [`validate_vehicles`]
//! before they reach a store.
#![forbid(unsafe_code)]

mod distance;
mod order;
mod plan;
mod planner;
mod priority;
pub mod store;
mod validation;
mod vehicle;

pub use distance::haversine_km;
pub use order::Order;
pub use plan::{DispatchPlan, RoutePlan, format_distance_km};
pub use planner::{PlanError, Planner, StoreError};
pub use priority::Priority;
pub use store::DispatchStore;
#[cfg(feature = "store-sqlite")]
pub use store::{SqliteDispatchStore, SqliteDispatchStoreError};
pub use validation::{FieldViolation, ValidationError, validate_orders, validate_vehicles};
pub use vehicle::Vehicle;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
