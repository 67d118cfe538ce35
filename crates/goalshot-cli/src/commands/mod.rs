use std::path::Path;

use anyhow::Result;
use goalshot_core::{EvalSettings, TeamData};
use serde::Serialize;

use crate::scenario::Scenario;

pub mod all;
pub mod shot;

fn load_team(scenario: &Path, settings: &EvalSettings) -> Result<TeamData> {
    let scenario = Scenario::load(scenario)?;
    log::debug!(
        "Loaded scenario with {} blue and {} yellow robots, playing as {}",
        scenario.world.blue_players.len(),
        scenario.world.yellow_players.len(),
        scenario.team_color
    );
    Ok(scenario.team_data(settings))
}

/// Prints a result as pretty JSON on stdout.
fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
