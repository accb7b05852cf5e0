//! Submission checks applied before orders and vehicles reach a store.
//!
//! The planner trusts its inputs, so every batch is validated up front.
//! Validation collects every violation rather than stopping at the first,
//! and names each one with a field path such as `orders[2].packageWeight`.

use std::fmt;

use thiserror::Error;

use crate::{Order, Vehicle};

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Path to the field, e.g. `vehicles[0].capacity`.
    pub field: String,
    /// Human-readable reason.
    pub message: String,
}

impl FieldViolation {
    fn new(collection: &str, index: usize, field: &str, message: &str) -> Self {
        Self {
            field: format!("{collection}[{index}].{field}"),
            message: message.to_owned(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors returned by [`validate_orders`] and [`validate_vehicles`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The batch contained no entries.
    #[error("{collection} list cannot be empty")]
    EmptyBatch {
        /// Name of the rejected collection.
        collection: &'static str,
    },
    /// One or more entries had invalid fields.
    #[error("validation failed: {}", join(.violations))]
    InvalidFields {
        /// Every violation found, in batch order.
        violations: Vec<FieldViolation>,
    },
}

impl ValidationError {
    /// Violations carried by the error; empty for [`ValidationError::EmptyBatch`].
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            Self::EmptyBatch { .. } => &[],
            Self::InvalidFields { violations } => violations,
        }
    }
}

fn join(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

const ORDERS: &str = "orders";
const VEHICLES: &str = "vehicles";

/// Validate a batch of submitted orders.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dispatch_core::{Order, Priority, ValidationError, validate_orders};
///
/// let dock = Coord { x: 0.0, y: 0.0 };
/// let ok = Order::new("ORD1", dock, 5.0, Priority::High).with_address("Dock 4");
/// assert!(validate_orders(&[ok]).is_ok());
///
/// let heavy = Order::new("ORD2", dock, -1.0, Priority::Low).with_address("Dock 4");
/// let err = validate_orders(&[heavy]).unwrap_err();
/// assert_eq!(err.violations()[0].field, "orders[0].packageWeight");
/// ```
pub fn validate_orders(orders: &[Order]) -> Result<(), ValidationError> {
    if orders.is_empty() {
        return Err(ValidationError::EmptyBatch { collection: ORDERS });
    }
    let violations = orders
        .iter()
        .enumerate()
        .flat_map(|(index, order)| order_violations(index, order))
        .collect();
    finish(violations)
}

/// Validate a batch of submitted vehicles.
pub fn validate_vehicles(vehicles: &[Vehicle]) -> Result<(), ValidationError> {
    if vehicles.is_empty() {
        return Err(ValidationError::EmptyBatch {
            collection: VEHICLES,
        });
    }
    let violations = vehicles
        .iter()
        .enumerate()
        .flat_map(|(index, vehicle)| vehicle_violations(index, vehicle))
        .collect();
    finish(violations)
}

fn finish(violations: Vec<FieldViolation>) -> Result<(), ValidationError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::InvalidFields { violations })
    }
}

fn order_violations(index: usize, order: &Order) -> Vec<FieldViolation> {
    let mut found = Vec::new();
    let mut reject = |field: &str, message: &str| {
        found.push(FieldViolation::new(ORDERS, index, field, message));
    };
    if order.id.trim().is_empty() {
        reject("orderId", "orderId cannot be blank");
    }
    if !order.latitude.is_finite() {
        reject("latitude", "latitude must be a finite number");
    }
    if !order.longitude.is_finite() {
        reject("longitude", "longitude must be a finite number");
    }
    if order.address.trim().is_empty() {
        reject("address", "address cannot be blank");
    }
    if !is_positive(order.package_weight) {
        reject("packageWeight", "packageWeight must be a positive number");
    }
    found
}

fn vehicle_violations(index: usize, vehicle: &Vehicle) -> Vec<FieldViolation> {
    let mut found = Vec::new();
    let mut reject = |field: &str, message: &str| {
        found.push(FieldViolation::new(VEHICLES, index, field, message));
    };
    if vehicle.id.trim().is_empty() {
        reject("vehicleId", "vehicleId cannot be blank");
    }
    if !is_positive(vehicle.capacity) {
        reject("capacity", "capacity must be a positive number");
    }
    if !vehicle.current_latitude.is_finite() {
        reject(
            "currentLatitude",
            "currentLatitude must be a finite number",
        );
    }
    if !vehicle.current_longitude.is_finite() {
        reject(
            "currentLongitude",
            "currentLongitude must be a finite number",
        );
    }
    if vehicle.current_address.trim().is_empty() {
        reject("currentAddress", "currentAddress cannot be blank");
    }
    found
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Priority;
    use geo::Coord;
    use rstest::{fixture, rstest};

    #[fixture]
    fn order() -> Order {
        Order::new("ORD1", Coord { x: 77.6, y: 12.9 }, 10.0, Priority::Medium)
            .with_address("Indiranagar")
    }

    #[fixture]
    fn vehicle() -> Vehicle {
        Vehicle::new("VEH1", 100.0, Coord { x: 77.5, y: 12.9 }).with_address("Depot")
    }

    #[rstest]
    fn accepts_well_formed_batches(order: Order, vehicle: Vehicle) {
        assert_eq!(validate_orders(&[order]), Ok(()));
        assert_eq!(validate_vehicles(&[vehicle]), Ok(()));
    }

    #[rstest]
    fn rejects_empty_batches() {
        assert_eq!(
            validate_orders(&[]),
            Err(ValidationError::EmptyBatch {
                collection: "orders",
            })
        );
        let err = validate_vehicles(&[]).expect_err("empty vehicles");
        assert_eq!(err.to_string(), "vehicles list cannot be empty");
        assert!(err.violations().is_empty());
    }

    #[rstest]
    #[case(0.0)]
    #[case(-3.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_non_positive_weight(order: Order, #[case] weight: f64) {
        let heavy = Order {
            package_weight: weight,
            ..order
        };
        let err = validate_orders(&[heavy]).expect_err("weight should be rejected");
        assert_eq!(
            err.violations(),
            [FieldViolation {
                field: "orders[0].packageWeight".into(),
                message: "packageWeight must be a positive number".into(),
            }]
        );
    }

    #[rstest]
    fn reports_every_violation_with_its_index(order: Order) {
        let blank = Order {
            id: "  ".into(),
            address: String::new(),
            latitude: f64::NAN,
            ..order.clone()
        };
        let err = validate_orders(&[order, blank]).expect_err("second order is invalid");
        let fields: Vec<&str> = err.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "orders[1].orderId",
                "orders[1].latitude",
                "orders[1].address",
            ]
        );
    }

    #[rstest]
    fn rejects_invalid_vehicle_fields(vehicle: Vehicle) {
        let broken = Vehicle {
            id: String::new(),
            capacity: 0.0,
            current_longitude: f64::NEG_INFINITY,
            current_address: " ".into(),
            ..vehicle
        };
        let err = validate_vehicles(&[broken]).expect_err("vehicle is invalid");
        let fields: Vec<&str> = err.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "vehicles[0].vehicleId",
                "vehicles[0].capacity",
                "vehicles[0].currentLongitude",
                "vehicles[0].currentAddress",
            ]
        );
        let message = err.to_string();
        assert!(message.starts_with("validation failed: vehicles[0].vehicleId"));
    }
}
