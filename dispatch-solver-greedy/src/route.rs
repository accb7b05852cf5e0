//! Per-vehicle route state tracked during an allocation pass.

use dispatch_core::{Order, RoutePlan, Vehicle, haversine_km};
use geo::Coord;

/// A vehicle's partial route while an allocation is running.
///
/// Starts at the vehicle's position with no load and no distance. Commits
/// are permanent: orders are only ever appended.
#[derive(Debug, Clone)]
pub struct RouteState<'a> {
    vehicle: &'a Vehicle,
    position: Coord<f64>,
    load: f64,
    distance_km: f64,
    orders: Vec<&'a Order>,
}

impl<'a> RouteState<'a> {
    /// Start an empty route at the vehicle's current position.
    #[must_use]
    pub const fn new(vehicle: &'a Vehicle) -> Self {
        Self {
            vehicle,
            position: vehicle.start(),
            load: 0.0,
            distance_km: 0.0,
            orders: Vec::new(),
        }
    }

    /// Vehicle this route belongs to.
    #[must_use]
    pub const fn vehicle(&self) -> &'a Vehicle {
        self.vehicle
    }

    /// Position after the last committed stop.
    #[must_use]
    pub const fn position(&self) -> Coord<f64> {
        self.position
    }

    /// Weight carried so far.
    #[must_use]
    pub const fn load(&self) -> f64 {
        self.load
    }

    /// Kilometres travelled so far.
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Orders committed so far, in commit order.
    #[must_use]
    pub fn orders(&self) -> &[&'a Order] {
        &self.orders
    }

    /// Whether `order` still fits in the remaining capacity.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "capacity check sums floating-point weights"
    )]
    pub fn feasible(&self, order: &Order) -> bool {
        self.load + order.package_weight <= self.vehicle.capacity
    }

    /// Distance from the current position to `order`.
    #[must_use]
    pub fn incremental_distance(&self, order: &Order) -> f64 {
        haversine_km(self.position, order.location())
    }

    /// Append `order` and move to its location.
    ///
    /// Capacity is not re-checked; callers test [`RouteState::feasible`]
    /// first.
    #[expect(
        clippy::float_arithmetic,
        reason = "route totals accumulate floating-point distance and weight"
    )]
    pub fn commit(&mut self, order: &'a Order) {
        self.distance_km += self.incremental_distance(order);
        self.load += order.package_weight;
        self.position = order.location();
        self.orders.push(order);
    }

    /// Finish the route.
    #[must_use]
    pub fn into_plan(self) -> RoutePlan {
        RoutePlan {
            vehicle_id: self.vehicle.id.clone(),
            total_load: self.load,
            total_distance_km: self.distance_km,
            assigned_orders: self.orders.into_iter().cloned().collect(),
        }
    }
}
