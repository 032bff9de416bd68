use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{RosterError, RosterResult};

/// Skill level value object
///
/// # Invariants
/// - Lies within `[0, 100]`
/// - Is immutable after construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 100;

    /// Creates a new SkillLevel value object
    ///
    /// # Returns
    /// * `Ok(SkillLevel)` - If `level` is within range
    /// * `Err(RosterError::InvalidArgument)` - Otherwise
    ///
    /// # Example
    /// ```
    /// use roster::domain::player::value_objects::SkillLevel;
    ///
    /// let level = SkillLevel::new(87).expect("valid level");
    /// assert_eq!(level.value(), 87);
    /// assert!(SkillLevel::new(101).is_err());
    /// ```
    pub fn new(level: i32) -> RosterResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(SkillLevel(level as u8))
        } else {
            Err(RosterError::InvalidArgument(format!(
                "skill level {} outside [{}, {}]",
                level,
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
