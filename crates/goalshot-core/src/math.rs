use crate::{Angle, Vector2};

/// Rotates a vector a quarter turn counter-clockwise.
pub fn perpendicular(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Scales a vector to the given length, keeping its direction.
///
/// Returns `None` for a zero-length vector, which has no direction.
pub fn with_length(v: &Vector2, length: f64) -> Option<Vector2> {
    let norm = v.norm();
    if norm < 1e-10 {
        return None;
    }
    Some(v * (length / norm))
}

/// Finds the y coordinate where the ray from `origin` along `bearing` crosses the
/// vertical line at `x`.
///
/// The ray is extended through `origin` in both directions. A vertical bearing has
/// no crossing and yields a non-finite value.
pub fn ray_y_at_x(origin: Vector2, bearing: f64, x: f64) -> f64 {
    let bearing = Angle::from_radians(bearing);
    (bearing.sin() / bearing.cos()) * (x - origin.x) + origin.y
}
