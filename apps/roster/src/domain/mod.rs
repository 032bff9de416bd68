// Domain layer module exports
// Domain is independent of infrastructure concerns

pub mod events;
pub mod player;
pub mod repositories;
pub mod team;

/// Externally supplied team identifier
pub type TeamId = i64;

/// Externally supplied player identifier
pub type PlayerId = i64;

pub use events::RosterEvent;
