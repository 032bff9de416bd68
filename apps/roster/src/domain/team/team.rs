use super::events::TeamEvent;
use super::value_objects::JerseyColors;
use crate::domain::TeamId;
use chrono::NaiveDate;

/// Team aggregate root
///
/// A registered club with a name, a founding date and two jersey colors.
/// Teams are immutable once registered.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use roster::domain::team::{JerseyColors, Team};
///
/// let (team, events) = Team::new(
///     1,
///     "Reds".to_string(),
///     NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
///     JerseyColors::new("red", "white"),
/// );
///
/// assert_eq!(team.name(), "Reds");
/// assert_eq!(events.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: TeamId,
    name: String,
    created_on: NaiveDate,
    colors: JerseyColors,
}

impl Team {
    /// Creates a new Team aggregate
    ///
    /// # Arguments
    /// * `id` - Externally supplied identifier
    /// * `name` - Display name
    /// * `created_on` - Founding date
    /// * `colors` - Primary and secondary jersey colors
    ///
    /// # Returns
    /// The new team and a `Registered` event. Teams carry no invariants of
    /// their own; identifier uniqueness is the repository's concern.
    pub fn new(
        id: TeamId,
        name: String,
        created_on: NaiveDate,
        colors: JerseyColors,
    ) -> (Self, Vec<TeamEvent>) {
        let team = Self {
            id,
            name,
            created_on,
            colors,
        };

        let events = vec![TeamEvent::Registered {
            team_id: team.id,
            name: team.name.clone(),
            created_on: team.created_on,
        }];

        (team, events)
    }

    // ===== Getters =====

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    pub fn colors(&self) -> &JerseyColors {
        &self.colors
    }

    /// Color this team wears when visiting `home`
    pub fn away_color_against(&self, home: &Team) -> &str {
        self.colors.away_against(&home.colors)
    }
}
