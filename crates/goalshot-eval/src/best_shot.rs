use goalshot_core::{math, Angle, GoalSide, Segment, Vector2, PLAYER_RADIUS};
use serde::{Deserialize, Serialize};
use typeshare::typeshare;

use crate::{project_obstacle, AngleInterval, AngleSpace, CoverageMap, Obstacle};

/// Radius robots are inflated to when no other radius is given, in mm.
pub const DEFAULT_OBSTACLE_RADIUS: f64 = PLAYER_RADIUS;

/// The best place to shoot at on a goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[typeshare]
pub struct Shot {
    /// Point on the goal line to aim at, in mm
    pub target: Vector2,
    /// Full width of the unobstructed corridor around `target`, in degrees
    pub open_angle: f64,
}

/// Finds the widest unobstructed corridor from `origin` into the goal between the
/// posts of `goal`, with every obstacle inflated to `radius`.
///
/// Returns `None` when every bearing into the goal is blocked. Without obstacles the
/// result is always the whole goal. The goal segment must be vertical (both posts on
/// the same goal line) and `origin` must not lie on that line; other inputs give
/// meaningless results.
pub fn best_shot(
    goal: &Segment,
    origin: Vector2,
    obstacles: &[Vector2],
    side: GoalSide,
    radius: f64,
) -> Option<Shot> {
    best_shot_with_obstacles(
        goal,
        origin,
        obstacles.iter().map(|p| Obstacle::new(*p, radius)),
        side,
    )
}

/// Like [`best_shot`], but every obstacle carries its own radius.
pub fn best_shot_with_obstacles(
    goal: &Segment,
    origin: Vector2,
    obstacles: impl IntoIterator<Item = Obstacle>,
    side: GoalSide,
) -> Option<Shot> {
    let space = AngleSpace::for_side(side);
    let cone = AngleInterval::span(
        space.normalize(Angle::between_points(origin, goal.start)),
        space.normalize(Angle::between_points(origin, goal.end)),
    );

    let obstacles = obstacles.into_iter();
    let mut occluders = Vec::with_capacity(obstacles.size_hint().0.max(1));
    for obstacle in obstacles {
        match project_obstacle(origin, &obstacle, space) {
            Some(interval) if interval.overlaps(&cone) => occluders.push(interval),
            Some(_) => {}
            None => log::trace!(
                "Skipping obstacle at {:?}, it sits on the shot origin",
                obstacle.position
            ),
        }
    }

    let map = CoverageMap::new(cone, space.sweep_direction(), occluders);
    let free = map.widest_free();
    if free.is_empty() {
        log::trace!(
            "No open shot on {} goal from {:?}, cone {} covered by {} obstacles",
            side,
            origin,
            cone,
            map.occluders().len()
        );
        return None;
    }

    let goal_x = goal.start.x;
    let low_y = math::ray_y_at_x(origin, space.denormalize(free.low()), goal_x);
    let high_y = math::ray_y_at_x(origin, space.denormalize(free.high()), goal_x);
    let target = Vector2::new(goal_x, (low_y + high_y) / 2.0);

    log::trace!(
        "Best shot on {} goal from {:?}: {} of cone {}",
        side,
        origin,
        free,
        cone
    );
    Some(Shot {
        target,
        open_angle: free.width_degrees(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn goal_at(x: f64) -> Segment {
        Segment::new(Vector2::new(x, 500.0), Vector2::new(x, -500.0))
    }

    #[test]
    fn test_no_obstacles_unit_geometry() {
        let shot = best_shot(
            &goal_at(1000.0),
            Vector2::zeros(),
            &[],
            GoalSide::Opp,
            DEFAULT_OBSTACLE_RADIUS,
        )
        .unwrap();

        assert_relative_eq!(shot.target.x, 1000.0);
        assert_relative_eq!(shot.target.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(shot.open_angle, 53.13, epsilon = 0.01);
    }

    #[test]
    fn test_no_obstacles_own_goal() {
        let shot = best_shot(
            &goal_at(-1000.0),
            Vector2::zeros(),
            &[],
            GoalSide::Own,
            DEFAULT_OBSTACLE_RADIUS,
        )
        .unwrap();

        assert_relative_eq!(shot.target.x, -1000.0);
        assert_relative_eq!(shot.target.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(shot.open_angle, 53.13, epsilon = 0.01);
    }

    #[test]
    fn test_large_obstacle_blocks_everything() {
        let shot = best_shot(
            &goal_at(1000.0),
            Vector2::zeros(),
            &[Vector2::new(500.0, 0.0)],
            GoalSide::Opp,
            500.0,
        );
        assert!(shot.is_none());
    }

    #[test]
    fn test_goal_posts_in_either_order() {
        let goal = goal_at(1000.0);
        let reversed = Segment::new(goal.end, goal.start);
        let obstacles = [Vector2::new(600.0, 150.0)];
        let a = best_shot(&goal, Vector2::zeros(), &obstacles, GoalSide::Opp, 90.0).unwrap();
        let b = best_shot(&reversed, Vector2::zeros(), &obstacles, GoalSide::Opp, 90.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_obstacle_outside_cone_is_ignored() {
        let goal = goal_at(1000.0);
        let free = best_shot(&goal, Vector2::zeros(), &[], GoalSide::Opp, 90.0).unwrap();
        let with_far_obstacle = best_shot(
            &goal,
            Vector2::zeros(),
            &[Vector2::new(500.0, 2000.0)],
            GoalSide::Opp,
            90.0,
        )
        .unwrap();
        assert_eq!(free, with_far_obstacle);
    }

    #[test]
    fn test_obstacle_on_origin_is_ignored() {
        let goal = goal_at(1000.0);
        let free = best_shot(&goal, Vector2::zeros(), &[], GoalSide::Opp, 90.0).unwrap();
        let shot = best_shot(&goal, Vector2::zeros(), &[Vector2::zeros()], GoalSide::Opp, 90.0);
        assert_eq!(shot, Some(free));
    }

    #[test]
    fn test_own_goal_obstacle_straddling_pi() {
        // Obstacle dead centre in front of our goal splits it into two equal halves
        let shot = best_shot(
            &goal_at(-1000.0),
            Vector2::zeros(),
            &[Vector2::new(-500.0, 0.0)],
            GoalSide::Own,
            50.0,
        )
        .unwrap();

        let cone_half = 0.5f64.atan().to_degrees();
        let blocked_half = 0.1f64.atan().to_degrees();
        assert_relative_eq!(shot.open_angle, cone_half - blocked_half, epsilon = 1e-9);
        assert_relative_eq!(shot.target.x, -1000.0);
    }

    #[test]
    fn test_per_obstacle_radius() {
        let goal = goal_at(1000.0);
        let small = best_shot_with_obstacles(
            &goal,
            Vector2::zeros(),
            [Obstacle::new(Vector2::new(500.0, 0.0), 10.0)],
            GoalSide::Opp,
        )
        .unwrap();
        let large = best_shot_with_obstacles(
            &goal,
            Vector2::zeros(),
            [Obstacle::new(Vector2::new(500.0, 0.0), 100.0)],
            GoalSide::Opp,
        )
        .unwrap();
        assert!(large.open_angle < small.open_angle);
    }
}
