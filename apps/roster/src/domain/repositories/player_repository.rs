use crate::domain::player::Player;
use crate::domain::{PlayerId, TeamId};
use crate::errors::RosterResult;

/// Repository trait for Player aggregate
///
/// Listing methods return players in ascending identifier order.
pub trait PlayerRepository {
    /// Insert a new player, failing with `DuplicateIdentifier` if the id is taken
    fn insert(&mut self, player: Player) -> RosterResult<()>;

    /// Replace a stored player, failing with `PlayerNotFound` if it is absent
    fn update(&mut self, player: &Player) -> RosterResult<()>;

    /// Find a player by its ID
    fn find_by_id(&self, id: PlayerId) -> Option<Player>;

    /// Whether a player with this ID exists
    fn contains(&self, id: PlayerId) -> bool;

    /// All players of a team, ascending by ID
    fn find_by_team(&self, team_id: TeamId) -> Vec<Player>;

    /// All players, ascending by ID
    fn find_all(&self) -> Vec<Player>;
}
