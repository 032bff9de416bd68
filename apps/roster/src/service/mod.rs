// Application service layer
// Orchestrates the domain aggregates over the repository ports

pub mod roster_service;
pub mod summary;

pub use roster_service::RosterService;
pub use summary::TeamSummary;
