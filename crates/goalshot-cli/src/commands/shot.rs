use std::path::Path;

use anyhow::{bail, Context, Result};
use goalshot_core::{EvalSettings, GoalSide, TeamPlayerId, Vector2};
use goalshot_eval::{best_shot_for_player, best_shot_on_goal, Shot};
use serde::Serialize;

use super::{load_team, print_json};

/// Where a shot is taken from.
#[derive(Debug, Clone)]
pub enum ShotOrigin {
    Player(TeamPlayerId),
    Point(Vector2),
}

#[derive(Debug, Serialize)]
struct ShotReport {
    side: GoalSide,
    origin: Vector2,
    shot: Option<Shot>,
}

pub fn shot(
    scenario: &Path,
    settings: &EvalSettings,
    side: GoalSide,
    origin: ShotOrigin,
) -> Result<()> {
    let team = load_team(scenario, settings)?;
    let radius = settings.obstacle_radius;

    let (origin, shot) = match origin {
        ShotOrigin::Player(id) => {
            let player = team
                .get_player(id)
                .with_context(|| format!("Player {} is not in the scenario", id))?;
            (player.position, best_shot_for_player(&team, id, side, radius))
        }
        ShotOrigin::Point(origin) => (origin, best_shot_on_goal(&team, origin, side, &[], radius)),
    };

    match &shot {
        Some(shot) => tracing::info!(
            "Best shot on {} goal: aim at ({:.0}, {:.0}), {:.2} deg open",
            side,
            shot.target.x,
            shot.target.y,
            shot.open_angle
        ),
        None => tracing::info!("No open shot on {} goal", side),
    }
    print_json(&ShotReport { side, origin, shot })
}

/// Parses an `x,y` pair in mm.
pub fn parse_point(s: &str) -> Result<Vector2> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("Expected <x>,<y>, got {s:?}");
    };
    let x = x.trim().parse::<f64>().context("Invalid x coordinate")?;
    let y = y.trim().parse::<f64>().context("Invalid y coordinate")?;
    Ok(Vector2::new(x, y))
}
