use std::{fs, path::Path};

use anyhow::{Context, Result};
use goalshot_core::{EvalSettings, TeamColor, TeamData, WorldData};
use serde::{Deserialize, Serialize};

/// A recorded field situation, in vision coordinates, along with the team we play as.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub team_color: TeamColor,
    pub world: WorldData,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse scenario {}", path.display()))
    }

    /// The scenario from our team's point of view. Falls back to the configured
    /// field if the scenario carries no geometry of its own.
    pub fn team_data(&self, settings: &EvalSettings) -> TeamData {
        let mut team = self.world.team_data(self.team_color);
        if team.field_geom.is_none() {
            team.field_geom = Some(settings.field_geometry.clone());
        }
        team
    }
}
