use goalshot_core::{GoalSide, TeamData, TeamPlayerId, Vector2};

use crate::{best_shot, Shot};

/// Finds the best shot from `origin` on the goal at `side`, treating every robot
/// between `origin` and that goal as an obstacle.
///
/// Robots behind the shooter (further from the goal along x than `origin`) cannot
/// block the shot and are left out, as is every robot listed in `ignore`.
pub fn best_shot_on_goal(
    team: &TeamData,
    origin: Vector2,
    side: GoalSide,
    ignore: &[TeamPlayerId],
    radius: f64,
) -> Option<Shot> {
    let obstacles: Vec<Vector2> = team
        .players()
        .filter(|(id, _)| !ignore.contains(id))
        .map(|(_, p)| p.position)
        .filter(|p| match side {
            GoalSide::Opp => p.x >= origin.x,
            GoalSide::Own => p.x <= origin.x,
        })
        .collect();

    let goal = team.field().goal_posts(side);
    best_shot(&goal, origin, &obstacles, side, radius)
}

/// Finds the best shot for one of the players on the field, from its current position.
///
/// Returns `None` if the player is unknown or has no open shot.
pub fn best_shot_for_player(
    team: &TeamData,
    shooter: TeamPlayerId,
    side: GoalSide,
    radius: f64,
) -> Option<Shot> {
    let Some(player) = team.get_player(shooter) else {
        log::debug!("Player {} is not on the field", shooter);
        return None;
    };
    best_shot_on_goal(team, player.position, side, &[shooter], radius)
}
