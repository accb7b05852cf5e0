//! Vehicles and their starting positions.

use geo::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A delivery vehicle available for the next planning run.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dispatch_core::Vehicle;
///
/// let vehicle = Vehicle::new("VEH1", 100.0, Coord { x: 77.6, y: 12.9 });
/// assert_eq!(vehicle.capacity, 100.0);
/// assert_eq!(vehicle.start(), Coord { x: 77.6, y: 12.9 });
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Vehicle {
    /// Unique vehicle identifier.
    #[cfg_attr(feature = "serde", serde(rename = "vehicleId"))]
    pub id: String,
    /// Maximum payload, in the same unit as order weights.
    pub capacity: f64,
    /// Latitude of the vehicle when planning starts.
    pub current_latitude: f64,
    /// Longitude of the vehicle when planning starts.
    pub current_longitude: f64,
    /// Human-readable starting address.
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_address: String,
}

impl Vehicle {
    /// Construct a vehicle parked at `start` (`x = longitude`, `y = latitude`).
    pub fn new(id: impl Into<String>, capacity: f64, start: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            capacity,
            current_latitude: start.y,
            current_longitude: start.x,
            current_address: String::new(),
        }
    }

    /// Attach a starting address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.current_address = address.into();
        self
    }

    /// Starting position with `x = longitude` and `y = latitude`.
    #[must_use]
    pub const fn start(&self) -> Coord<f64> {
        Coord {
            x: self.current_longitude,
            y: self.current_latitude,
        }
    }
}
