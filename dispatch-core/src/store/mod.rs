//! Data access traits for submitted orders and vehicles.
//!
//! The `DispatchStore` trait defines the two reads the planner needs. Each
//! call returns a snapshot taken at call time; no consistency between the
//! order and vehicle snapshots is promised.

use crate::{Order, Vehicle};

#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqliteDispatchStore, SqliteDispatchStoreError};

/// Read access to the current orders and vehicles.
///
/// Returned collections carry no meaningful order beyond submission order;
/// planners must not rely on any other sorting.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
/// use geo::Coord;
/// use dispatch_core::{DispatchStore, Order, Priority, Vehicle};
///
/// struct FixedStore {
///     orders: Vec<Order>,
///     vehicles: Vec<Vehicle>,
/// }
///
/// impl DispatchStore for FixedStore {
///     type Error = Infallible;
///
///     fn list_orders(&self) -> Result<Vec<Order>, Self::Error> {
///         Ok(self.orders.clone())
///     }
///
///     fn list_vehicles(&self) -> Result<Vec<Vehicle>, Self::Error> {
///         Ok(self.vehicles.clone())
///     }
/// }
///
/// let store = FixedStore {
///     orders: vec![Order::new("ORD1", Coord { x: 0.0, y: 0.0 }, 1.0, Priority::Low)],
///     vehicles: Vec::new(),
/// };
/// assert_eq!(store.list_orders()?.len(), 1);
/// # Ok::<(), Infallible>(())
/// ```
pub trait DispatchStore {
    /// Error raised when a snapshot cannot be read.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return every submitted order.
    fn list_orders(&self) -> Result<Vec<Order>, Self::Error>;

    /// Return every submitted vehicle.
    fn list_vehicles(&self) -> Result<Vec<Vehicle>, Self::Error>;
}

impl<S> DispatchStore for &S
where
    S: DispatchStore + ?Sized,
{
    type Error = S::Error;

    fn list_orders(&self) -> Result<Vec<Order>, Self::Error> {
        (**self).list_orders()
    }

    fn list_vehicles(&self) -> Result<Vec<Vehicle>, Self::Error> {
        (**self).list_vehicles()
    }
}
