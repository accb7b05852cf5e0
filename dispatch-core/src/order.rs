//! Delivery orders as submitted by clients.

use geo::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Priority;

/// A delivery order awaiting dispatch.
///
/// Coordinates are WGS84 degrees. Orders are immutable once submitted: the
/// planner reads them and never changes them.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dispatch_core::{Order, Priority};
///
/// let order = Order::new("ORD1", Coord { x: 77.59, y: 12.97 }, 20.0, Priority::High)
///     .with_address("MG Road, Bengaluru");
///
/// assert_eq!(order.latitude, 12.97);
/// assert_eq!(order.location(), Coord { x: 77.59, y: 12.97 });
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Order {
    /// Unique order identifier.
    #[cfg_attr(feature = "serde", serde(rename = "orderId"))]
    pub id: String,
    /// Drop-off latitude in degrees.
    pub latitude: f64,
    /// Drop-off longitude in degrees.
    pub longitude: f64,
    /// Human-readable drop-off address.
    #[cfg_attr(feature = "serde", serde(default))]
    pub address: String,
    /// Package mass, in the same unit as vehicle capacity.
    pub package_weight: f64,
    /// Urgency class.
    pub priority: Priority,
}

impl Order {
    /// Construct an order at `location` (`x = longitude`, `y = latitude`)
    /// with an empty address.
    pub fn new(
        id: impl Into<String>,
        location: Coord<f64>,
        package_weight: f64,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            latitude: location.y,
            longitude: location.x,
            address: String::new(),
            package_weight,
            priority,
        }
    }

    /// Attach a drop-off address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Drop-off position with `x = longitude` and `y = latitude`.
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }
}
