use thiserror::Error;

use crate::domain::{PlayerId, TeamId};

/// Errors that can occur in the roster
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Identifier already in use: {entity} {id}")]
    DuplicateIdentifier { entity: &'static str, id: i64 },

    #[error("Team not found: {0}")]
    TeamNotFound(TeamId),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Team {0} has no captain")]
    CaptainNotSet(TeamId),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl RosterError {
    pub fn duplicate_team(id: TeamId) -> Self {
        Self::DuplicateIdentifier { entity: "team", id }
    }

    pub fn duplicate_player(id: PlayerId) -> Self {
        Self::DuplicateIdentifier { entity: "player", id }
    }

    /// Lookup of a single player by identifier failed
    pub fn unknown_player(id: PlayerId) -> Self {
        Self::PlayerNotFound(format!("id {}", id))
    }

    /// A per-team query had no players to choose from
    pub fn empty_team(team_id: TeamId) -> Self {
        Self::PlayerNotFound(format!("team {} has no players", team_id))
    }
}

pub type RosterResult<T> = Result<T, RosterError>;
