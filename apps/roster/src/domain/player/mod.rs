// Player domain module
// Contains the player aggregate, the skill value object, and domain events

#![allow(clippy::module_inception)]

pub mod events;
pub mod player;
pub mod value_objects;

pub use events::PlayerEvent;
pub use player::Player;
pub use value_objects::SkillLevel;
