use serde::{Deserialize, Serialize};
use typeshare::typeshare;

use crate::{FieldGeometry, PlayerData, TeamPlayerId, TeamType};

/// The world as seen by one team, in team coordinates: we always attack towards
/// +x, our own goal is on the -x side.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[typeshare]
pub struct TeamData {
    pub own_players: Vec<PlayerData>,
    pub opp_players: Vec<PlayerData>,
    pub field_geom: Option<FieldGeometry>,
}

impl TeamData {
    /// The field geometry, or the default field if none has been received yet.
    pub fn field(&self) -> FieldGeometry {
        self.field_geom.clone().unwrap_or_default()
    }

    /// Iterates over the players of both teams, own players first.
    pub fn players(&self) -> impl Iterator<Item = (TeamPlayerId, &PlayerData)> {
        let own = self
            .own_players
            .iter()
            .map(|p| (TeamPlayerId(TeamType::Own, p.id), p));
        let opp = self
            .opp_players
            .iter()
            .map(|p| (TeamPlayerId(TeamType::Opp, p.id), p));
        own.chain(opp)
    }

    pub fn get_player(&self, id: TeamPlayerId) -> Option<&PlayerData> {
        let team = match id.team() {
            TeamType::Own => &self.own_players,
            TeamType::Opp => &self.opp_players,
        };
        team.iter().find(|p| p.id == id.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlayerId, Vector2};

    fn team() -> TeamData {
        TeamData {
            own_players: vec![PlayerData::new(PlayerId::new(1), Vector2::new(1.0, 0.0))],
            opp_players: vec![PlayerData::new(PlayerId::new(1), Vector2::new(-1.0, 0.0))],
            field_geom: None,
        }
    }

    #[test]
    fn test_same_id_on_both_teams_is_distinguished() {
        let team = team();
        let own = team.get_player(TeamPlayerId::own(1)).unwrap();
        let opp = team.get_player(TeamPlayerId::opp(1)).unwrap();
        assert_eq!(own.position.x, 1.0);
        assert_eq!(opp.position.x, -1.0);
        assert!(team.get_player(TeamPlayerId::own(2)).is_none());
    }

    #[test]
    fn test_players_lists_both_teams() {
        let ids: Vec<_> = team().players().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![TeamPlayerId::own(1), TeamPlayerId::opp(1)]);
    }

    #[test]
    fn test_field_falls_back_to_default() {
        assert_eq!(team().field(), FieldGeometry::default());
    }
}
