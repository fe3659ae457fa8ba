//! Prelude module for convenient imports

pub use super::game_statistics::Entity as GameStatistics;
pub use super::games::Entity as Games;
pub use super::players::Entity as Players;
pub use super::teams::Entity as Teams;
