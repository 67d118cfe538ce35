use std::path::Path;

use anyhow::Result;
use goalshot_core::{EvalSettings, GoalSide, PlayerId, TeamPlayerId, TeamType, Vector2};
use goalshot_eval::{best_shot_for_player, Shot};
use serde::Serialize;

use super::{load_team, print_json};

#[derive(Debug, Serialize)]
struct PlayerShot {
    id: PlayerId,
    position: Vector2,
    shot: Option<Shot>,
}

/// Evaluates the best shot of each of our players, widest opening first.
pub fn all(scenario: &Path, settings: &EvalSettings, side: GoalSide) -> Result<()> {
    let team = load_team(scenario, settings)?;

    let mut shots: Vec<PlayerShot> = team
        .own_players
        .iter()
        .map(|player| PlayerShot {
            id: player.id,
            position: player.position,
            shot: best_shot_for_player(
                &team,
                TeamPlayerId(TeamType::Own, player.id),
                side,
                settings.obstacle_radius,
            ),
        })
        .collect();
    shots.sort_by(|a, b| open_angle(b).total_cmp(&open_angle(a)));

    if let Some(best) = shots.first().filter(|s| s.shot.is_some()) {
        tracing::info!(
            "Player {} has the widest shot on {} goal ({:.2} deg)",
            best.id,
            side,
            open_angle(best)
        );
    } else {
        tracing::info!("None of our players has an open shot on {} goal", side);
    }
    print_json(&shots)
}

fn open_angle(player: &PlayerShot) -> f64 {
    player.shot.map(|s| s.open_angle).unwrap_or(0.0)
}
