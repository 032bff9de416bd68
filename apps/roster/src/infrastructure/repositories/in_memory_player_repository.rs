use std::collections::BTreeMap;

use crate::domain::player::Player;
use crate::domain::repositories::PlayerRepository;
use crate::domain::{PlayerId, TeamId};
use crate::errors::{RosterError, RosterResult};

/// In-memory implementation of PlayerRepository
#[derive(Debug, Default)]
pub struct InMemoryPlayerRepository {
    players: BTreeMap<PlayerId, Player>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl PlayerRepository for InMemoryPlayerRepository {
    fn insert(&mut self, player: Player) -> RosterResult<()> {
        if self.players.contains_key(&player.id()) {
            return Err(RosterError::duplicate_player(player.id()));
        }
        self.players.insert(player.id(), player);
        Ok(())
    }

    fn update(&mut self, player: &Player) -> RosterResult<()> {
        match self.players.get_mut(&player.id()) {
            Some(stored) => {
                *stored = player.clone();
                Ok(())
            }
            None => Err(RosterError::unknown_player(player.id())),
        }
    }

    fn find_by_id(&self, id: PlayerId) -> Option<Player> {
        self.players.get(&id).cloned()
    }

    fn contains(&self, id: PlayerId) -> bool {
        self.players.contains_key(&id)
    }

    fn find_by_team(&self, team_id: TeamId) -> Vec<Player> {
        self.players
            .values()
            .filter(|p| p.team_id() == team_id)
            .cloned()
            .collect()
    }

    fn find_all(&self) -> Vec<Player> {
        self.players.values().cloned().collect()
    }
}
