use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::team::{JerseyColors, Team};
use crate::domain::{PlayerId, TeamId};

/// Read model describing one team and its roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSummary {
    pub id: TeamId,
    pub name: String,
    pub created_on: NaiveDate,
    pub colors: JerseyColors,
    pub players: Vec<PlayerId>,
    pub captain: Option<PlayerId>,
    pub best_player: Option<PlayerId>,
    pub oldest_player: Option<PlayerId>,
    pub highest_paid_player: Option<PlayerId>,
    pub payroll: Decimal,
}

impl From<&Team> for TeamSummary {
    /// Team fields only; roster fields start empty
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            created_on: team.created_on(),
            colors: team.colors().clone(),
            players: Vec::new(),
            captain: None,
            best_player: None,
            oldest_player: None,
            highest_paid_player: None,
            payroll: Decimal::ZERO,
        }
    }
}
