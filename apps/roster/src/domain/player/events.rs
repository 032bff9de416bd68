use crate::domain::{PlayerId, TeamId};

/// Domain events that occur within the Player aggregate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    /// Fired when a player is registered with a team
    Registered { player_id: PlayerId, team_id: TeamId },
    /// Fired when a player becomes the team captain
    CaptainAssigned { player_id: PlayerId, team_id: TeamId },
    /// Fired when a captain loses the armband to a teammate
    CaptainRelieved { player_id: PlayerId, team_id: TeamId },
}

impl PlayerEvent {
    pub fn player_id(&self) -> PlayerId {
        match self {
            PlayerEvent::Registered { player_id, .. }
            | PlayerEvent::CaptainAssigned { player_id, .. }
            | PlayerEvent::CaptainRelieved { player_id, .. } => *player_id,
        }
    }

    pub fn team_id(&self) -> TeamId {
        match self {
            PlayerEvent::Registered { team_id, .. }
            | PlayerEvent::CaptainAssigned { team_id, .. }
            | PlayerEvent::CaptainRelieved { team_id, .. } => *team_id,
        }
    }
}
