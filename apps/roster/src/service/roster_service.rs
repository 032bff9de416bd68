use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::summary::TeamSummary;
use crate::domain::player::Player;
use crate::domain::repositories::{PlayerRepository, TeamRepository};
use crate::domain::team::{JerseyColors, Team};
use crate::domain::{PlayerId, RosterEvent, TeamId};
use crate::errors::{RosterError, RosterResult};
use crate::infrastructure::repositories::{InMemoryPlayerRepository, InMemoryTeamRepository};

/// Roster façade
///
/// Registers teams and players, keeps one captain per team and answers
/// lookup queries. Every mutation checks all of its preconditions before
/// touching storage, so a failed call leaves the roster unchanged.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use roster::RosterService;
///
/// let mut roster = RosterService::new();
/// let founded = NaiveDate::from_ymd_opt(1990, 5, 1).unwrap();
/// roster.register_team(1, "Reds", founded, "red", "white").unwrap();
/// roster.register_team(2, "Blues", founded, "red", "black").unwrap();
///
/// assert_eq!(roster.away_jersey_color(1, 2).unwrap(), "black");
/// ```
#[derive(Debug)]
pub struct RosterService<T = InMemoryTeamRepository, P = InMemoryPlayerRepository> {
    teams: T,
    players: P,
    history: Vec<RosterEvent>,
}

impl RosterService<InMemoryTeamRepository, InMemoryPlayerRepository> {
    /// Creates an empty roster backed by in-memory storage
    pub fn new() -> Self {
        Self::with_repositories(InMemoryTeamRepository::new(), InMemoryPlayerRepository::new())
    }
}

impl Default for RosterService<InMemoryTeamRepository, InMemoryPlayerRepository> {
    fn default() -> Self {
        Self::new()
    }
}

fn rejected<V>(operation: &'static str, error: RosterError) -> RosterResult<V> {
    warn!(operation, %error, "roster operation rejected");
    Err(error)
}

impl<T: TeamRepository, P: PlayerRepository> RosterService<T, P> {
    pub fn with_repositories(teams: T, players: P) -> Self {
        Self {
            teams,
            players,
            history: Vec::new(),
        }
    }

    // ===== Mutations =====

    /// Registers a new team
    ///
    /// # Errors
    /// * `DuplicateIdentifier` - `id` is already registered
    pub fn register_team(
        &mut self,
        id: TeamId,
        name: impl Into<String>,
        created_on: NaiveDate,
        primary_color: impl Into<String>,
        secondary_color: impl Into<String>,
    ) -> RosterResult<()> {
        if self.teams.contains(id) {
            return rejected("register_team", RosterError::duplicate_team(id));
        }

        let (team, events) = Team::new(
            id,
            name.into(),
            created_on,
            JerseyColors::new(primary_color, secondary_color),
        );
        info!(team_id = id, name = team.name(), "team registered");
        self.teams.insert(team)?;
        self.record(events);
        Ok(())
    }

    /// Registers a new player on an existing team
    ///
    /// # Errors
    /// Checked in this order:
    /// * `TeamNotFound` - `team_id` is not registered
    /// * `DuplicateIdentifier` - `id` is already registered
    /// * `InvalidArgument` - negative identifiers or skill outside `[0, 100]`
    pub fn register_player(
        &mut self,
        id: PlayerId,
        team_id: TeamId,
        name: impl Into<String>,
        birth_date: NaiveDate,
        skill_level: i32,
        salary: Decimal,
    ) -> RosterResult<()> {
        if !self.teams.contains(team_id) {
            return rejected("register_player", RosterError::TeamNotFound(team_id));
        }
        if self.players.contains(id) {
            return rejected("register_player", RosterError::duplicate_player(id));
        }

        let (player, events) =
            match Player::new(id, team_id, name.into(), birth_date, skill_level, salary) {
                Ok(created) => created,
                Err(error) => return rejected("register_player", error),
            };
        info!(player_id = id, team_id, skill = skill_level, "player registered");
        self.players.insert(player)?;
        self.record(events);
        Ok(())
    }

    /// Makes `player_id` the captain of their team, relieving any previous
    /// captain of that team
    ///
    /// # Errors
    /// * `PlayerNotFound` - `player_id` is not registered
    pub fn set_captain(&mut self, player_id: PlayerId) -> RosterResult<()> {
        let mut captain = match self.players.find_by_id(player_id) {
            Some(player) => player,
            None => return rejected("set_captain", RosterError::unknown_player(player_id)),
        };

        let mut events = Vec::new();
        for mut teammate in self.players.find_by_team(captain.team_id()) {
            if teammate.id() == player_id {
                continue;
            }
            if let Some(event) = teammate.relieve_captaincy() {
                self.players.update(&teammate)?;
                events.push(event);
            }
        }
        if let Some(event) = captain.promote_to_captain() {
            self.players.update(&captain)?;
            events.push(event);
        }

        info!(player_id, team_id = captain.team_id(), "captain set");
        self.record(events);
        Ok(())
    }

    // ===== Lookups =====

    /// Returns the current captain of a team
    ///
    /// # Errors
    /// * `TeamNotFound` - the team is not registered
    /// * `CaptainNotSet` - nobody on the team is captain
    pub fn team_captain(&self, team_id: TeamId) -> RosterResult<PlayerId> {
        self.require_team(team_id)?;
        self.players
            .find_by_team(team_id)
            .iter()
            .find(|p| p.is_captain())
            .map(Player::id)
            .ok_or(RosterError::CaptainNotSet(team_id))
    }

    pub fn player_name(&self, player_id: PlayerId) -> RosterResult<String> {
        self.require_player(player_id)
            .map(|p| p.name().to_string())
    }

    pub fn team_name(&self, team_id: TeamId) -> RosterResult<String> {
        self.require_team(team_id).map(|t| t.name().to_string())
    }

    pub fn player_salary(&self, player_id: PlayerId) -> RosterResult<Decimal> {
        self.require_player(player_id).map(|p| p.salary())
    }

    /// Player identifiers of a team, ascending
    pub fn team_players(&self, team_id: TeamId) -> RosterResult<Vec<PlayerId>> {
        self.require_team(team_id)?;
        Ok(self
            .players
            .find_by_team(team_id)
            .iter()
            .map(Player::id)
            .collect())
    }

    /// All team identifiers, ascending
    pub fn teams(&self) -> Vec<TeamId> {
        self.teams.find_all().iter().map(Team::id).collect()
    }

    // ===== Aggregations =====

    /// Highest skill on the team; ties go to the lowest identifier
    pub fn best_player(&self, team_id: TeamId) -> RosterResult<PlayerId> {
        self.select_from_team(team_id, |players| {
            players
                .iter()
                .max_by(|a, b| a.skill().cmp(&b.skill()).then_with(|| b.id().cmp(&a.id())))
                .map(Player::id)
        })
    }

    /// Earliest birth date on the team; ties go to the lowest identifier
    pub fn oldest_player(&self, team_id: TeamId) -> RosterResult<PlayerId> {
        self.select_from_team(team_id, |players| {
            players
                .iter()
                .min_by(|a, b| {
                    a.birth_date()
                        .cmp(&b.birth_date())
                        .then_with(|| a.id().cmp(&b.id()))
                })
                .map(Player::id)
        })
    }

    /// Highest salary on the team; ties go to the lowest identifier
    pub fn highest_paid_player(&self, team_id: TeamId) -> RosterResult<PlayerId> {
        self.select_from_team(team_id, |players| {
            players
                .iter()
                .max_by(|a, b| a.salary().cmp(&b.salary()).then_with(|| b.id().cmp(&a.id())))
                .map(Player::id)
        })
    }

    /// Up to `n` players across all teams by descending skill, ties by
    /// ascending identifier
    pub fn top_players(&self, n: usize) -> Vec<PlayerId> {
        let mut players = self.players.find_all();
        players.sort_by(|a, b| b.skill().cmp(&a.skill()).then_with(|| a.id().cmp(&b.id())));
        debug!(requested = n, available = players.len(), "top players");
        players.iter().take(n).map(Player::id).collect()
    }

    /// Jersey color the away team wears against the home team
    ///
    /// # Errors
    /// * `TeamNotFound` - either team is not registered
    pub fn away_jersey_color(
        &self,
        home_team_id: TeamId,
        away_team_id: TeamId,
    ) -> RosterResult<String> {
        let home = self.require_team(home_team_id)?;
        let away = self.require_team(away_team_id)?;
        Ok(away.away_color_against(&home).to_string())
    }

    /// Builds the read model for one team
    pub fn team_summary(&self, team_id: TeamId) -> RosterResult<TeamSummary> {
        let team = self.require_team(team_id)?;
        let players = self.players.find_by_team(team_id);

        let mut summary = TeamSummary::from(&team);
        summary.players = players.iter().map(Player::id).collect();
        summary.captain = self.team_captain(team_id).ok();
        summary.best_player = self.best_player(team_id).ok();
        summary.oldest_player = self.oldest_player(team_id).ok();
        summary.highest_paid_player = self.highest_paid_player(team_id).ok();
        summary.payroll = players.iter().map(Player::salary).sum();
        Ok(summary)
    }

    /// Read-only access to the player storage
    pub fn player_store(&self) -> &P {
        &self.players
    }

    /// Read-only access to the team storage
    pub fn team_store(&self) -> &T {
        &self.teams
    }

    /// Events emitted by successful mutations, oldest first
    pub fn history(&self) -> &[RosterEvent] {
        &self.history
    }

    // ===== Helpers =====

    fn require_team(&self, team_id: TeamId) -> RosterResult<Team> {
        self.teams.find_by_id(team_id).ok_or_else(|| {
            debug!(team_id, "team lookup failed");
            RosterError::TeamNotFound(team_id)
        })
    }

    fn require_player(&self, player_id: PlayerId) -> RosterResult<Player> {
        self.players.find_by_id(player_id).ok_or_else(|| {
            debug!(player_id, "player lookup failed");
            RosterError::unknown_player(player_id)
        })
    }

    fn select_from_team<F>(&self, team_id: TeamId, select: F) -> RosterResult<PlayerId>
    where
        F: FnOnce(&[Player]) -> Option<PlayerId>,
    {
        self.require_team(team_id)?;
        let players = self.players.find_by_team(team_id);
        select(players.as_slice()).ok_or_else(|| RosterError::empty_team(team_id))
    }

    fn record<E: Into<RosterEvent>>(&mut self, events: Vec<E>) {
        self.history.extend(events.into_iter().map(Into::into));
    }
}
