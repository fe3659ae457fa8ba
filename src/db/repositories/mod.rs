// Database repository management

mod game_repository;
mod game_statistic_repository;
mod player_repository;
mod team_repository;

pub use game_repository::GameRepository;
pub use game_statistic_repository::GameStatisticRepository;
pub use player_repository::PlayerRepository;
pub use team_repository::TeamRepository;

use sea_orm::DatabaseConnection;

/// Container for all database repositories
pub struct Repositories {
    pub teams: TeamRepository,
    pub players: PlayerRepository,
    pub games: GameRepository,
    pub statistics: GameStatisticRepository,
}

impl Repositories {
    /// Creates a new repositories container with database connection
    pub fn new(conn: DatabaseConnection) -> Self {
        Repositories {
            teams: TeamRepository::new(conn.clone()),
            players: PlayerRepository::new(conn.clone()),
            games: GameRepository::new(conn.clone()),
            statistics: GameStatisticRepository::new(conn),
        }
    }
}
