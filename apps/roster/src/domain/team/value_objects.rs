use serde::{Deserialize, Serialize};

/// The pair of jersey colors a team is registered with
///
/// # Away Color Rule
/// ```text
/// away.primary != home.primary  -> away.primary
/// away.primary == home.primary  -> away.secondary
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JerseyColors {
    /// Color worn by default
    pub primary: String,
    /// Color worn when the primary clashes with the home team
    pub secondary: String,
}

impl JerseyColors {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// Picks the color this team wears when playing away against `home`
    ///
    /// # Example
    /// ```
    /// use roster::domain::team::value_objects::JerseyColors;
    ///
    /// let home = JerseyColors::new("red", "white");
    /// let away = JerseyColors::new("red", "black");
    /// assert_eq!(away.away_against(&home), "black");
    /// ```
    pub fn away_against(&self, home: &JerseyColors) -> &str {
        if self.primary == home.primary {
            &self.secondary
        } else {
            &self.primary
        }
    }
}

impl std::fmt::Display for JerseyColors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.primary, self.secondary)
    }
}
