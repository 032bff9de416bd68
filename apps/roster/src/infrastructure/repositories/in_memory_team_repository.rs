use std::collections::BTreeMap;

use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;
use crate::domain::TeamId;
use crate::errors::{RosterError, RosterResult};

/// In-memory implementation of TeamRepository
///
/// Teams live in a `BTreeMap` keyed by identifier, so every listing comes
/// back in ascending order without an explicit sort.
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    teams: BTreeMap<TeamId, Team>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl TeamRepository for InMemoryTeamRepository {
    fn insert(&mut self, team: Team) -> RosterResult<()> {
        if self.teams.contains_key(&team.id()) {
            return Err(RosterError::duplicate_team(team.id()));
        }
        self.teams.insert(team.id(), team);
        Ok(())
    }

    fn find_by_id(&self, id: TeamId) -> Option<Team> {
        self.teams.get(&id).cloned()
    }

    fn contains(&self, id: TeamId) -> bool {
        self.teams.contains_key(&id)
    }

    fn find_all(&self) -> Vec<Team> {
        self.teams.values().cloned().collect()
    }
}
