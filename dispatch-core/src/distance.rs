//! Great-circle distance between WGS84 coordinates.

use geo::{Coord, Distance, Haversine, Point};

const METRES_PER_KILOMETRE: f64 = 1000.0;

/// Haversine distance in kilometres between two coordinates
/// (`x = longitude`, `y = latitude`, degrees).
///
/// The metric is symmetric and returns `0.0` for identical points. Inputs
/// outside the valid latitude/longitude ranges are not rejected; the
/// trigonometric formula still yields a finite value.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use dispatch_core::haversine_km;
///
/// let london = Coord { x: -0.1278, y: 51.5074 };
/// let paris = Coord { x: 2.3522, y: 48.8566 };
/// let km = haversine_km(london, paris);
/// assert!((km - 343.5).abs() < 1.0);
/// ```
#[must_use]
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    Haversine.distance(Point::from(from), Point::from(to)) / METRES_PER_KILOMETRE
}
