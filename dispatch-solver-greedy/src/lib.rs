//! Greedy priority-first dispatch planner.
//!
//! This crate provides [`GreedyPlanner`], the default implementation of the
//! [`Planner`](dispatch_core::Planner) trait. Orders are visited most urgent
//! first; each one goes to the feasible vehicle whose current position is
//! closest, and stays there for the rest of the run. Orders that fit no
//! vehicle are left out of the plan.
//!
//! The building blocks are public so callers can run an allocation without a
//! store: [`prioritise`] builds the order queue, [`RouteState`] tracks one
//! vehicle's partial route and [`allocate`] drives the whole pass.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod allocator;
mod queue;
mod route;
mod solver;

pub use allocator::allocate;
pub use queue::prioritise;
pub use route::RouteState;
pub use solver::{GreedyPlanner, GreedyPlannerConfig, VehicleOrder};
