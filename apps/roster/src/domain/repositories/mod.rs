// Repository interfaces (ports)
// Implemented by adapters in the infrastructure layer

pub mod player_repository;
pub mod team_repository;

pub use player_repository::PlayerRepository;
pub use team_repository::TeamRepository;
