use serde::{Deserialize, Serialize};
use typeshare::typeshare;

use crate::{Angle, FieldGeometry, PlayerData, TeamData, Vector2};

/// Team color as assigned by the referee.
///
/// Vision reports positions in a fixed field frame, but either color may defend the
/// positive x side. Shot evaluation works in the frame of one team, where the
/// opponent's goal is on +x and ours on -x; y is the same in both frames. See
/// [`SideAssignment`] for the conversion.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[typeshare]
pub enum TeamColor {
    Blue,
    Yellow,
}

impl TeamColor {
    pub fn opposite(&self) -> Self {
        match self {
            TeamColor::Blue => TeamColor::Yellow,
            TeamColor::Yellow => TeamColor::Blue,
        }
    }
}

impl std::fmt::Display for TeamColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamColor::Blue => write!(f, "Blue"),
            TeamColor::Yellow => write!(f, "Yellow"),
        }
    }
}

/// Which color defends the goal on the world +x side.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[typeshare]
pub enum SideAssignment {
    BlueOnPositive,
    YellowOnPositive,
}

impl SideAssignment {
    /// `1.0` if `color` attacks towards world +x, so its frame equals the world frame,
    /// `-1.0` if its frame is mirrored.
    pub fn attacking_direction_sign(&self, color: TeamColor) -> f64 {
        match (self, color) {
            (SideAssignment::BlueOnPositive, TeamColor::Blue) => -1.0,
            (SideAssignment::BlueOnPositive, TeamColor::Yellow) => 1.0,
            (SideAssignment::YellowOnPositive, TeamColor::Blue) => 1.0,
            (SideAssignment::YellowOnPositive, TeamColor::Yellow) => -1.0,
        }
    }

    /// Converts a world position to team coordinates. The transform is its own
    /// inverse, so this also converts team coordinates back to world coordinates.
    pub fn transform_vec2(&self, color: TeamColor, vec: &Vector2) -> Vector2 {
        Vector2::new(vec.x * self.attacking_direction_sign(color), vec.y)
    }

    pub fn transform_angle(&self, color: TeamColor, angle: Angle) -> Angle {
        if self.attacking_direction_sign(color) > 0.0 {
            angle
        } else {
            // Mirror around y-axis
            Angle::PI - angle
        }
    }

    fn transform_player(&self, color: TeamColor, player: &PlayerData) -> PlayerData {
        PlayerData {
            id: player.id,
            position: self.transform_vec2(color, &player.position),
            velocity: self.transform_vec2(color, &player.velocity),
            yaw: self.transform_angle(color, player.yaw),
        }
    }
}

/// A snapshot of the field in world (vision) coordinates.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[typeshare]
pub struct WorldData {
    #[serde(default)]
    pub blue_players: Vec<PlayerData>,
    #[serde(default)]
    pub yellow_players: Vec<PlayerData>,
    #[serde(default)]
    pub field_geom: Option<FieldGeometry>,
    pub side_assignment: SideAssignment,
}

impl WorldData {
    pub fn get_team_players(&self, color: TeamColor) -> &[PlayerData] {
        match color {
            TeamColor::Blue => &self.blue_players,
            TeamColor::Yellow => &self.yellow_players,
        }
    }

    /// Transforms the snapshot into the given team's coordinates.
    pub fn team_data(&self, color: TeamColor) -> TeamData {
        let side = self.side_assignment;
        TeamData {
            own_players: self
                .get_team_players(color)
                .iter()
                .map(|p| side.transform_player(color, p))
                .collect(),
            opp_players: self
                .get_team_players(color.opposite())
                .iter()
                .map(|p| side.transform_player(color, p))
                .collect(),
            field_geom: self.field_geom.clone(),
        }
    }
}
