// Business logic service implementations

pub mod game_service;
pub mod game_statistic_service;
pub mod player_service;
pub mod team_service;
