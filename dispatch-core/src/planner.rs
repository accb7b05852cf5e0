//! The planning seam: a trait that turns stored data into a dispatch plan.

use thiserror::Error;

use crate::DispatchPlan;

/// Boxed error raised by a dispatch store.
pub type StoreError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by [`Planner::plan`].
///
/// Allocation itself cannot fail; only reading the current snapshot can.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The store could not list one of its collections.
    #[error("failed to list {collection} from the dispatch store: {source}")]
    Store {
        /// Collection being read, `"orders"` or `"vehicles"`.
        collection: &'static str,
        /// Error raised by the store implementation.
        #[source]
        source: StoreError,
    },
}

impl PlanError {
    /// Wrap a store failure while reading `collection`.
    pub fn store(collection: &'static str, source: impl Into<StoreError>) -> Self {
        Self::Store {
            collection,
            source: source.into(),
        }
    }
}

/// Generate a dispatch plan from the current orders and vehicles.
///
/// Implementations own their data source and take no per-call arguments.
/// Planners must be `Send + Sync` so a single instance can serve several
/// callers; serialising runs against a shared store is the caller's concern.
///
/// # Examples
/// ```
/// use dispatch_core::{DispatchPlan, PlanError, Planner, RoutePlan};
///
/// struct IdlePlanner;
///
/// impl Planner for IdlePlanner {
///     fn plan(&self) -> Result<DispatchPlan, PlanError> {
///         Ok(DispatchPlan::new(vec![RoutePlan::empty("VEH1")]))
///     }
/// }
///
/// let plan = IdlePlanner.plan()?;
/// assert_eq!(plan.len(), 1);
/// # Ok::<(), PlanError>(())
/// ```
pub trait Planner: Send + Sync {
    /// Produce one route per vehicle.
    fn plan(&self) -> Result<DispatchPlan, PlanError>;
}
