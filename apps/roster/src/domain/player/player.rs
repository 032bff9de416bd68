use super::events::PlayerEvent;
use super::value_objects::SkillLevel;
use crate::domain::{PlayerId, TeamId};
use crate::errors::{RosterError, RosterResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Player aggregate
///
/// A registered individual belonging to exactly one team. The captain flag
/// is the only field that changes after registration.
///
/// # Invariants
/// - Identifier and team identifier are non-negative
/// - Skill level lies within `[0, 100]`
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use roster::domain::player::Player;
/// use rust_decimal::Decimal;
///
/// let (player, _) = Player::new(
///     10,
///     1,
///     "Ana".to_string(),
///     NaiveDate::from_ymd_opt(1995, 3, 14).unwrap(),
///     88,
///     Decimal::new(150_000, 2),
/// ).expect("valid player");
///
/// assert_eq!(player.skill().value(), 88);
/// assert!(!player.is_captain());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    team_id: TeamId,
    name: String,
    birth_date: NaiveDate,
    skill: SkillLevel,
    salary: Decimal,
    captain: bool,
}

impl Player {
    /// Creates a new Player aggregate
    ///
    /// # Returns
    /// * `Ok((Player, Vec<PlayerEvent>))` - New player and events generated
    /// * `Err(RosterError::InvalidArgument)` - If any invariant is violated
    pub fn new(
        id: PlayerId,
        team_id: TeamId,
        name: String,
        birth_date: NaiveDate,
        skill_level: i32,
        salary: Decimal,
    ) -> RosterResult<(Self, Vec<PlayerEvent>)> {
        if id < 0 {
            return Err(RosterError::InvalidArgument(format!(
                "player id {} is negative",
                id
            )));
        }
        if team_id < 0 {
            return Err(RosterError::InvalidArgument(format!(
                "team id {} is negative",
                team_id
            )));
        }
        let skill = SkillLevel::new(skill_level)?;

        let player = Self {
            id,
            team_id,
            name,
            birth_date,
            skill,
            salary,
            captain: false,
        };

        let events = vec![PlayerEvent::Registered {
            player_id: id,
            team_id,
        }];

        Ok((player, events))
    }

    /// Hands this player the armband
    ///
    /// Returns `None` when the player already is captain.
    pub fn promote_to_captain(&mut self) -> Option<PlayerEvent> {
        if self.captain {
            return None;
        }
        self.captain = true;
        Some(PlayerEvent::CaptainAssigned {
            player_id: self.id,
            team_id: self.team_id,
        })
    }

    /// Takes the armband away
    ///
    /// Returns `None` when the player was not captain.
    pub fn relieve_captaincy(&mut self) -> Option<PlayerEvent> {
        if !self.captain {
            return None;
        }
        self.captain = false;
        Some(PlayerEvent::CaptainRelieved {
            player_id: self.id,
            team_id: self.team_id,
        })
    }

    // ===== Getters =====

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn team_id(&self) -> TeamId {
        self.team_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn skill(&self) -> SkillLevel {
        self.skill
    }

    pub fn salary(&self) -> Decimal {
        self.salary
    }

    pub fn is_captain(&self) -> bool {
        self.captain
    }
}
