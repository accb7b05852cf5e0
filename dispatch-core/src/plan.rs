//! Planning output: one route per vehicle.
//!
//! A [`RoutePlan`] records which orders a vehicle carries, in the order they
//! were assigned, together with the aggregate load and travel distance. The
//! JSON form reports distance as a label such as `"12.34 km"`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Order;

const HUNDREDTHS_PER_UNIT: f64 = 100.0;

/// Render a distance in kilometres with two decimals and a unit suffix.
///
/// Halves round away from zero, so `0.125` renders as `"0.13 km"` rather
/// than the half-to-even `"0.12 km"` that `{:.2}` alone would give.
///
/// # Examples
/// ```
/// use dispatch_core::format_distance_km;
///
/// assert_eq!(format_distance_km(0.0), "0.00 km");
/// assert_eq!(format_distance_km(157.249), "157.25 km");
/// ```
#[must_use]
pub fn format_distance_km(km: f64) -> String {
    let hundredths = (km * HUNDREDTHS_PER_UNIT).round() / HUNDREDTHS_PER_UNIT;
    format!("{hundredths:.2} km")
}

/// The route assigned to a single vehicle.
///
/// # Examples
/// ```
/// use dispatch_core::RoutePlan;
///
/// let plan = RoutePlan::empty("VEH1");
/// assert!(plan.assigned_orders.is_empty());
/// assert_eq!(plan.formatted_distance(), "0.00 km");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RoutePlan {
    /// Vehicle carrying the route.
    pub vehicle_id: String,
    /// Sum of assigned package weights.
    pub total_load: f64,
    /// Sum of hop distances from the start position through every stop.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "totalDistance", with = "distance_label")
    )]
    pub total_distance_km: f64,
    /// Orders in assignment order.
    pub assigned_orders: Vec<Order>,
}

impl RoutePlan {
    /// A plan with no stops.
    pub fn empty(vehicle_id: impl Into<String>) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            total_load: 0.0,
            total_distance_km: 0.0,
            assigned_orders: Vec::new(),
        }
    }

    /// Total distance formatted as `"X.XX km"`.
    #[must_use]
    pub fn formatted_distance(&self) -> String {
        format_distance_km(self.total_distance_km)
    }

    /// Identifiers of the assigned orders, in assignment order.
    pub fn order_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.assigned_orders.iter().map(|order| order.id.as_str())
    }
}

/// Complete output of one planning run.
///
/// Holds exactly one [`RoutePlan`] per vehicle that took part in the run.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DispatchPlan {
    /// Routes in vehicle presentation order.
    #[cfg_attr(feature = "serde", serde(rename = "dispatchPlan"))]
    pub routes: Vec<RoutePlan>,
}

impl DispatchPlan {
    /// Wrap a set of routes.
    #[must_use]
    pub const fn new(routes: Vec<RoutePlan>) -> Self {
        Self { routes }
    }

    /// Look up the route for a vehicle.
    #[must_use]
    pub fn route_for(&self, vehicle_id: &str) -> Option<&RoutePlan> {
        self.routes
            .iter()
            .find(|route| route.vehicle_id == vehicle_id)
    }

    /// Number of routes in the plan.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the plan has no routes at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Count of orders placed on any route.
    #[must_use]
    pub fn assigned_order_count(&self) -> usize {
        self.routes
            .iter()
            .map(|route| route.assigned_orders.len())
            .sum()
    }
}

#[cfg(feature = "serde")]
mod distance_label {
    //! Serialises kilometres as `"X.XX km"` and parses the same form back.

    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    const SUFFIX: &str = "km";

    pub(super) fn serialize<S>(km: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_distance_km(*km))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        let value = label.trim().strip_suffix(SUFFIX).unwrap_or(label.trim());
        value
            .trim()
            .parse::<f64>()
            .map_err(|err| D::Error::custom(format!("invalid distance '{label}': {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Priority;
    use geo::Coord;
    use rstest::{fixture, rstest};

    #[fixture]
    fn loaded_route() -> RoutePlan {
        RoutePlan {
            vehicle_id: "VEH1".into(),
            total_load: 30.0,
            total_distance_km: 157.2496,
            assigned_orders: vec![
                Order::new("ORD1", Coord { x: 1.0, y: 1.0 }, 10.0, Priority::High),
                Order::new("ORD2", Coord { x: 2.0, y: 2.0 }, 20.0, Priority::Low),
            ],
        }
    }

    #[rstest]
    #[case(0.0, "0.00 km")]
    #[case(0.004, "0.00 km")]
    #[case(12.345_6, "12.35 km")]
    #[case(0.125, "0.13 km")]
    #[case(0.375, "0.38 km")]
    #[case(2.5, "2.50 km")]
    #[case(1_000.0, "1000.00 km")]
    fn formats_two_decimals(#[case] km: f64, #[case] expected: &str) {
        assert_eq!(format_distance_km(km), expected);
    }

    #[rstest]
    fn order_ids_follow_assignment_order(loaded_route: RoutePlan) {
        let ids: Vec<&str> = loaded_route.order_ids().collect();
        assert_eq!(ids, ["ORD1", "ORD2"]);
    }

    #[rstest]
    fn dispatch_plan_finds_routes_by_vehicle(loaded_route: RoutePlan) {
        let plan = DispatchPlan::new(vec![loaded_route, RoutePlan::empty("VEH2")]);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.assigned_order_count(), 2);
        let idle = plan.route_for("VEH2").expect("VEH2 route");
        assert!(idle.assigned_orders.is_empty());
        assert!(plan.route_for("VEH9").is_none());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_distance_label(loaded_route: RoutePlan) {
        let plan = DispatchPlan::new(vec![loaded_route]);
        let json = serde_json::to_value(&plan).expect("encode plan");
        let route = &json["dispatchPlan"][0];
        assert_eq!(route["vehicleId"], "VEH1");
        assert_eq!(route["totalLoad"], 30.0);
        assert_eq!(route["totalDistance"], "157.25 km");
        assert_eq!(route["assignedOrders"][1]["orderId"], "ORD2");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parses_distance_label_back() {
        let json = r#"{
            "vehicleId": "VEH1",
            "totalLoad": 0.0,
            "totalDistance": "12.50 km",
            "assignedOrders": []
        }"#;
        let route: RoutePlan = serde_json::from_str(json).expect("decode route");
        assert_eq!(route.total_distance_km, 12.5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rejects_malformed_distance_label() {
        let json = r#"{
            "vehicleId": "VEH1",
            "totalLoad": 0.0,
            "totalDistance": "far",
            "assignedOrders": []
        }"#;
        let result: Result<RoutePlan, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
