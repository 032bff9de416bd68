use chrono::NaiveDate;

use crate::domain::TeamId;

/// Domain events that occur within the Team aggregate
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use roster::domain::team::events::TeamEvent;
///
/// let event = TeamEvent::Registered {
///     team_id: 1,
///     name: "Reds".to_string(),
///     created_on: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
/// };
/// assert_eq!(event.team_id(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamEvent {
    /// Fired when a team is registered
    Registered {
        team_id: TeamId,
        name: String,
        created_on: NaiveDate,
    },
}

impl TeamEvent {
    /// Returns the team_id for this event
    pub fn team_id(&self) -> TeamId {
        match self {
            TeamEvent::Registered { team_id, .. } => *team_id,
        }
    }
}
