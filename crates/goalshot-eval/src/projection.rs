use goalshot_core::{math, Angle, Vector2};
use serde::{Deserialize, Serialize};

use crate::{AngleInterval, AngleSpace};

/// A circular obstacle, usually a robot inflated to its footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub position: Vector2,
    /// Blocking radius in mm
    pub radius: f64,
}

impl Obstacle {
    pub fn new(position: Vector2, radius: f64) -> Self {
        Self { position, radius }
    }
}

/// Projects an obstacle onto the bearings it blocks as seen from `origin`.
///
/// The edges of the disc are approximated by the two points offset from its centre
/// by `radius` perpendicular to the line of sight, instead of the true tangent points.
/// This underestimates the blocked width for obstacles close to the origin.
///
/// The high bound is the low bound plus the wrapped angular width, so the interval
/// stays contiguous even where it crosses the discontinuity of `space`. Returns `None`
/// when the obstacle is centred on the origin.
pub fn project_obstacle(
    origin: Vector2,
    obstacle: &Obstacle,
    space: AngleSpace,
) -> Option<AngleInterval> {
    let line_of_sight = obstacle.position - origin;
    let offset = math::with_length(&math::perpendicular(&line_of_sight), obstacle.radius)?;

    let ccw_edge = Angle::of_vector(&(line_of_sight + offset));
    let cw_edge = Angle::of_vector(&(line_of_sight - offset));

    let low = space.normalize(cw_edge);
    let width = (ccw_edge - cw_edge).radians();
    Some(AngleInterval::span(low, low + width))
}
