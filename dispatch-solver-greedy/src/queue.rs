//! Priority queue that fixes the order in which orders are placed.

use dispatch_core::Order;

/// Arrange orders most urgent first.
///
/// The sort is stable, so orders sharing a priority keep their submission
/// order. The input slice is left untouched.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dispatch_core::{Order, Priority};
/// use dispatch_solver_greedy::prioritise;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let orders = [
///     Order::new("low", origin, 1.0, Priority::Low),
///     Order::new("high", origin, 1.0, Priority::High),
///     Order::new("medium", origin, 1.0, Priority::Medium),
/// ];
/// let ids: Vec<&str> = prioritise(&orders).iter().map(|o| o.id.as_str()).collect();
/// assert_eq!(ids, ["high", "medium", "low"]);
/// ```
#[must_use]
pub fn prioritise(orders: &[Order]) -> Vec<&Order> {
    let mut queue: Vec<&Order> = orders.iter().collect();
    queue.sort_by_key(|order| order.priority.rank());
    queue
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_core::Priority;
    use dispatch_core::test_support::order;
    use rstest::rstest;

    fn ids<'a>(queue: &[&'a Order]) -> Vec<&'a str> {
        queue.iter().map(|order| order.id.as_str()).collect()
    }

    #[rstest]
    fn equal_priorities_keep_submission_order() {
        let orders = [
            order("m1", 0.0, 0.0, 1.0, Priority::Medium),
            order("h1", 0.0, 0.0, 1.0, Priority::High),
            order("m2", 0.0, 0.0, 1.0, Priority::Medium),
            order("l1", 0.0, 0.0, 1.0, Priority::Low),
            order("h2", 0.0, 0.0, 1.0, Priority::High),
        ];
        assert_eq!(ids(&prioritise(&orders)), ["h1", "h2", "m1", "m2", "l1"]);
    }

    #[rstest]
    fn empty_input_gives_empty_queue() {
        assert!(prioritise(&[]).is_empty());
    }

    #[rstest]
    fn input_is_not_reordered() {
        let orders = vec![
            order("l", 0.0, 0.0, 1.0, Priority::Low),
            order("h", 0.0, 0.0, 1.0, Priority::High),
        ];
        let before = orders.clone();
        let _queue = prioritise(&orders);
        assert_eq!(orders, before);
    }
}
