//! Priority-first nearest-feasible-vehicle allocation.

use dispatch_core::{Order, RoutePlan, Vehicle};

use crate::{RouteState, prioritise};

/// Assign orders to vehicles and return one plan per vehicle.
///
/// Orders are taken most urgent first. Each goes to the vehicle with enough
/// spare capacity whose current position is nearest; on equal distance the
/// vehicle listed first wins. An order no vehicle can carry is skipped.
/// Plans are returned in the order `vehicles` lists them, including
/// vehicles that received nothing. With no vehicles the result is empty.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dispatch_core::{Order, Priority, Vehicle};
/// use dispatch_solver_greedy::allocate;
///
/// let orders = [Order::new("ORD1", Coord { x: 0.1, y: 0.0 }, 20.0, Priority::High)];
/// let vehicles = [
///     Vehicle::new("FAR", 100.0, Coord { x: 5.0, y: 5.0 }),
///     Vehicle::new("NEAR", 100.0, Coord { x: 0.0, y: 0.0 }),
/// ];
///
/// let plans = allocate(&orders, &vehicles);
/// assert!(plans[0].assigned_orders.is_empty());
/// assert_eq!(plans[1].order_ids().collect::<Vec<_>>(), ["ORD1"]);
/// ```
#[must_use]
pub fn allocate(orders: &[Order], vehicles: &[Vehicle]) -> Vec<RoutePlan> {
    if vehicles.is_empty() {
        log::info!(
            "no vehicles available; {} orders left unassigned",
            orders.len()
        );
        return Vec::new();
    }

    let mut routes: Vec<RouteState<'_>> = vehicles.iter().map(RouteState::new).collect();
    let mut assigned = 0_usize;

    for order in prioritise(orders) {
        let nearest = nearest_feasible(&routes, order);
        match nearest.and_then(|index| routes.get_mut(index)) {
            Some(route) => {
                log::debug!(
                    "assigned order {} ({}) to vehicle {}",
                    order.id,
                    order.priority,
                    route.vehicle().id
                );
                route.commit(order);
                assigned += 1;
            }
            None => log::debug!(
                "order {} ({} weight {}) fits no vehicle; left unassigned",
                order.id,
                order.priority,
                order.package_weight
            ),
        }
    }

    log::info!(
        "allocated {assigned} of {} orders across {} vehicles",
        orders.len(),
        vehicles.len()
    );

    routes.into_iter().map(RouteState::into_plan).collect()
}

/// Index of the feasible route closest to `order`, first on ties.
fn nearest_feasible(routes: &[RouteState<'_>], order: &Order) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, route) in routes.iter().enumerate() {
        if !route.feasible(order) {
            continue;
        }
        let distance = route.incremental_distance(order);
        if best.is_none_or(|(_, nearest)| distance < nearest) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_core::Priority;
    use dispatch_core::test_support::{order, vehicle};
    use rstest::rstest;

    fn assigned(plan: &RoutePlan) -> Vec<&str> {
        plan.order_ids().collect()
    }

    #[rstest]
    fn no_vehicles_yields_no_plans() {
        let orders = [order("ORD1", 0.0, 0.0, 1.0, Priority::High)];
        assert!(allocate(&orders, &[]).is_empty());
    }

    #[rstest]
    fn vehicles_without_orders_get_empty_plans() {
        let vehicles = [
            vehicle("V1", 10.0, 0.0, 0.0),
            vehicle("V2", 10.0, 1.0, 1.0),
        ];
        let plans = allocate(&[], &vehicles);
        let ids: Vec<&str> = plans.iter().map(|p| p.vehicle_id.as_str()).collect();
        assert_eq!(ids, ["V1", "V2"]);
        assert!(plans.iter().all(|p| p.assigned_orders.is_empty()));
    }

    #[rstest]
    fn equidistant_vehicles_favour_the_first() {
        let orders = [order("ORD1", 0.0, 0.0, 1.0, Priority::Medium)];
        let vehicles = [
            vehicle("V1", 10.0, 1.0, 0.0),
            vehicle("V2", 10.0, 1.0, 0.0),
        ];
        let plans = allocate(&orders, &vehicles);
        let assignments: Vec<Vec<&str>> = plans.iter().map(assigned).collect();
        assert_eq!(assignments, [vec!["ORD1"], vec![]]);
    }

    #[rstest]
    fn full_vehicle_is_skipped_for_a_farther_one() {
        let orders = [
            order("BIG", 0.0, 0.0, 8.0, Priority::High),
            order("SMALL", 0.0, 0.0, 5.0, Priority::Low),
        ];
        let vehicles = [
            vehicle("NEAR", 10.0, 0.0, 0.1),
            vehicle("FAR", 10.0, 0.0, 3.0),
        ];
        let plans = allocate(&orders, &vehicles);
        assert_eq!(assigned(&plans[0]), ["BIG"]);
        assert_eq!(assigned(&plans[1]), ["SMALL"]);
    }

    #[rstest]
    fn proximity_follows_the_moving_position() {
        // V1 starts nearest to both stops but has moved east by the second.
        let orders = [
            order("EAST", 2.0, 0.0, 1.0, Priority::High),
            order("WEST", -2.0, 0.0, 1.0, Priority::Medium),
        ];
        let vehicles = [
            vehicle("V1", 10.0, 0.0, 0.0),
            vehicle("V2", 10.0, -4.5, 0.0),
        ];
        let plans = allocate(&orders, &vehicles);
        assert_eq!(assigned(&plans[0]), ["EAST"]);
        assert_eq!(assigned(&plans[1]), ["WEST"]);
    }

    #[rstest]
    fn unplaceable_orders_are_dropped_without_blocking_others() {
        let orders = [
            order("TOO-HEAVY", 0.0, 0.0, 50.0, Priority::High),
            order("FITS", 0.0, 0.0, 5.0, Priority::Low),
        ];
        let plans = allocate(&orders, &[vehicle("V1", 10.0, 0.0, 0.0)]);
        assert_eq!(assigned(&plans[0]), ["FITS"]);
        assert_eq!(plans[0].total_load, 5.0);
    }
}
