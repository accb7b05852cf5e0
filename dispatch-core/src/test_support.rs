//! Test-only helpers: an in-memory `DispatchStore` and terse builders for
//! orders and vehicles, shared by unit tests, behaviour tests and benchmarks.

use std::convert::Infallible;

use geo::Coord;

use crate::{DispatchStore, Order, Priority, Vehicle};

/// Construct an order at `(x, y)` (longitude, latitude) with a placeholder
/// address.
///
/// # Examples
/// ```rust
/// use dispatch_core::Priority;
/// use dispatch_core::test_support::order;
///
/// let order = order("ORD1", 77.6, 12.9, 5.0, Priority::High);
/// assert_eq!(order.latitude, 12.9);
/// ```
#[must_use]
pub fn order(id: &str, x: f64, y: f64, package_weight: f64, priority: Priority) -> Order {
    Order::new(id, Coord { x, y }, package_weight, priority).with_address(format!("{id} drop-off"))
}

/// Construct a vehicle starting at `(x, y)` (longitude, latitude).
///
/// # Examples
/// ```rust
/// use dispatch_core::test_support::vehicle;
///
/// let van = vehicle("VAN", 100.0, 0.0, 0.0);
/// assert_eq!(van.capacity, 100.0);
/// ```
#[must_use]
pub fn vehicle(id: &str, capacity: f64, x: f64, y: f64) -> Vehicle {
    Vehicle::new(id, capacity, Coord { x, y }).with_address(format!("{id} depot"))
}

/// In-memory `DispatchStore` implementation used in tests.
///
/// Collections are returned in insertion order.
#[derive(Default, Debug, Clone)]
pub struct MemoryStore {
    orders: Vec<Order>,
    vehicles: Vec<Vehicle>,
}

impl MemoryStore {
    /// Create a store from collections of orders and vehicles.
    pub fn new<O, V>(orders: O, vehicles: V) -> Self
    where
        O: IntoIterator<Item = Order>,
        V: IntoIterator<Item = Vehicle>,
    {
        Self::default().with_orders(orders).with_vehicles(vehicles)
    }

    /// Append orders to the store.
    #[must_use]
    pub fn with_orders<I>(mut self, orders: I) -> Self
    where
        I: IntoIterator<Item = Order>,
    {
        self.orders.extend(orders);
        self
    }

    /// Append vehicles to the store.
    #[must_use]
    pub fn with_vehicles<I>(mut self, vehicles: I) -> Self
    where
        I: IntoIterator<Item = Vehicle>,
    {
        self.vehicles.extend(vehicles);
        self
    }
}

impl DispatchStore for MemoryStore {
    type Error = Infallible;

    fn list_orders(&self) -> Result<Vec<Order>, Self::Error> {
        Ok(self.orders.clone())
    }

    fn list_vehicles(&self) -> Result<Vec<Vehicle>, Self::Error> {
        Ok(self.vehicles.clone())
    }
}
