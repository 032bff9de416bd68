use crate::domain::team::Team;
use crate::domain::TeamId;
use crate::errors::RosterResult;

/// Repository trait for Team aggregate
///
/// Defines the contract for storing and retrieving teams.
/// Listing methods return teams in ascending identifier order.
pub trait TeamRepository {
    /// Insert a new team, failing with `DuplicateIdentifier` if the id is taken
    fn insert(&mut self, team: Team) -> RosterResult<()>;

    /// Find a team by its ID
    fn find_by_id(&self, id: TeamId) -> Option<Team>;

    /// Whether a team with this ID exists
    fn contains(&self, id: TeamId) -> bool;

    /// All teams, ascending by ID
    fn find_all(&self) -> Vec<Team>;
}
