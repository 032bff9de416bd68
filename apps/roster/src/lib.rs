//! Roster Library
//!
//! In-memory team and player registry: registration, captaincy, and the
//! lookup and aggregation queries built on top of them.

pub mod config;
pub mod domain;
pub mod errors;
pub mod infrastructure;
pub mod service;

pub use errors::{RosterError, RosterResult};
pub use service::{RosterService, TeamSummary};
