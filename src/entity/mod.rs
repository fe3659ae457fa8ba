//! Entity module for database models

pub mod game_statistics;
pub mod games;
pub mod players;
pub mod prelude;
pub mod teams;
