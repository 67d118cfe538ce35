use serde::{Deserialize, Serialize};
use typeshare::typeshare;

use crate::{Angle, Vector2};

/// Robot footprint radius in mm.
pub const PLAYER_RADIUS: f64 = 90.0;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[typeshare(serialized_as = "u32")]
pub struct PlayerId(u32);

impl PlayerId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which team a player belongs to, from our point of view.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Hash, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[typeshare]
pub enum TeamType {
    Own,
    Opp,
}

/// A player id that is unique across both teams.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub struct TeamPlayerId(pub TeamType, pub PlayerId);

impl TeamPlayerId {
    pub fn own(id: u32) -> Self {
        Self(TeamType::Own, PlayerId::new(id))
    }

    pub fn opp(id: u32) -> Self {
        Self(TeamType::Opp, PlayerId::new(id))
    }

    pub fn team(&self) -> TeamType {
        self.0
    }

    pub fn id(&self) -> PlayerId {
        self.1
    }
}

impl std::str::FromStr for TeamPlayerId {
    type Err = anyhow::Error;

    /// Parses `own:3` or `opp:3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (team, id) = s
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("Expected <own|opp>:<id>, got {s:?}"))?;
        let id = id.trim().parse::<u32>()?;
        match team.trim() {
            "own" => Ok(Self::own(id)),
            "opp" => Ok(Self::opp(id)),
            other => anyhow::bail!("Unknown team {other:?}, expected own or opp"),
        }
    }
}

impl std::fmt::Display for TeamPlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            TeamType::Own => write!(f, "own:{}", self.1),
            TeamType::Opp => write!(f, "opp:{}", self.1),
        }
    }
}

/// A struct to store the player state from a single frame.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[typeshare]
pub struct PlayerData {
    /// The player's id, unique within its team
    pub id: PlayerId,
    /// Position of the player in mm
    pub position: Vector2,
    /// Velocity of the player in mm/s
    #[serde(default = "Vector2::zeros")]
    pub velocity: Vector2,
    /// Yaw of the player, in radians, (`-pi`, `pi`], where `0` is the positive
    /// x direction, and `pi/2` is the positive y direction.
    #[serde(default)]
    pub yaw: Angle,
}

impl PlayerData {
    pub fn new(id: PlayerId, position: Vector2) -> Self {
        Self {
            id,
            position,
            velocity: Vector2::zeros(),
            yaw: Angle::default(),
        }
    }
}
