use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use typeshare::typeshare;

use crate::{FieldGeometry, PLAYER_RADIUS};

/// Settings for shot evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[typeshare]
pub struct EvalSettings {
    /// Radius each robot is inflated to when it is treated as an obstacle, in mm.
    pub obstacle_radius: f64,
    /// Field used when a scenario does not carry its own geometry.
    pub field_geometry: FieldGeometry,
}

impl Default for EvalSettings {
    fn default() -> Self {
        Self {
            obstacle_radius: PLAYER_RADIUS,
            field_geometry: FieldGeometry::default(),
        }
    }
}

impl EvalSettings {
    /// Load the settings from a file, or store the default settings if the file does
    /// not exist. A file that exists but does not parse is ignored in favour of the
    /// defaults.
    pub fn load_or_insert(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => Ok(settings),
                Err(err) => {
                    log::error!("Failed to parse settings in {}: {}", path.display(), err);
                    Ok(Self::default())
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let settings = Self::default();
                settings.store(path)?;
                log::info!("Wrote default settings to {}", path.display());
                Ok(settings)
            }
            Err(err) => Err(err)
                .with_context(|| format!("Failed to read settings from {}", path.display())),
        }
    }

    /// Store the settings in the given file.
    pub fn store(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write settings to {}", path.display()))
    }
}
