use super::player::PlayerEvent;
use super::team::TeamEvent;

/// Any event emitted by a roster aggregate, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    Team(TeamEvent),
    Player(PlayerEvent),
}

impl From<TeamEvent> for RosterEvent {
    fn from(event: TeamEvent) -> Self {
        RosterEvent::Team(event)
    }
}

impl From<PlayerEvent> for RosterEvent {
    fn from(event: PlayerEvent) -> Self {
        RosterEvent::Player(event)
    }
}
