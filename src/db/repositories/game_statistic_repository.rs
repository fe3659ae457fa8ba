// Game statistic database operations

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter,
};

use crate::db::error::DbError;
use crate::entity::prelude::{GameStatistics, Games, Teams};
use crate::entity::{game_statistics, players};
use crate::models::{GameStatisticInput, GameWithTeams, StatisticDetails};

/// Repository for game statistic rows
pub struct GameStatisticRepository {
    conn: DatabaseConnection,
}

impl GameStatisticRepository {
    /// Creates a new game statistic repository with the given database connection
    pub fn new(conn: DatabaseConnection) -> Self {
        GameStatisticRepository { conn }
    }

    /// Retrieves all game statistics
    pub async fn get_all(&self) -> Result<Vec<game_statistics::Model>, DbError> {
        GameStatistics::find()
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Retrieves game statistics matching an arbitrary filter condition
    pub async fn find(
        &self,
        condition: Condition,
    ) -> Result<Vec<game_statistics::Model>, DbError> {
        GameStatistics::find()
            .filter(condition)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Retrieves a game statistic by id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<game_statistics::Model>, DbError> {
        GameStatistics::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Inserts a new game statistic and returns it with its generated id
    pub async fn add(
        &self,
        input: GameStatisticInput,
    ) -> Result<game_statistics::Model, DbError> {
        let statistic = game_statistics::ActiveModel {
            game_id: Set(input.game_id),
            player_id: Set(input.player_id),
            minutes_played: Set(input.minutes_played),
            points: Set(input.points),
            assists: Set(input.assists),
            rebounds: Set(input.rebounds),
            steals: Set(input.steals),
            blocks: Set(input.blocks),
            turnovers: Set(input.turnovers),
            ..Default::default()
        };

        statistic.insert(&self.conn).await.map_err(Into::into)
    }

    /// Replaces a game statistic row by primary key, committing immediately
    pub async fn update(
        &self,
        statistic: game_statistics::Model,
    ) -> Result<game_statistics::Model, DbError> {
        let statistic = game_statistics::ActiveModel {
            id: Set(statistic.id),
            game_id: Set(statistic.game_id),
            player_id: Set(statistic.player_id),
            minutes_played: Set(statistic.minutes_played),
            points: Set(statistic.points),
            assists: Set(statistic.assists),
            rebounds: Set(statistic.rebounds),
            steals: Set(statistic.steals),
            blocks: Set(statistic.blocks),
            turnovers: Set(statistic.turnovers),
        };

        statistic.update(&self.conn).await.map_err(Into::into)
    }

    /// Deletes a game statistic by id, reporting whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbError> {
        let result = GameStatistics::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }

    /// Retrieves statistics for the given game
    pub async fn find_by_game_id(
        &self,
        game_id: i32,
    ) -> Result<Vec<game_statistics::Model>, DbError> {
        self.find(Condition::all().add(game_statistics::Column::GameId.eq(game_id)))
            .await
    }

    /// Retrieves statistics for the given player
    pub async fn find_by_player_id(
        &self,
        player_id: i32,
    ) -> Result<Vec<game_statistics::Model>, DbError> {
        self.find(Condition::all().add(game_statistics::Column::PlayerId.eq(player_id)))
            .await
    }

    /// Retrieves the statistic for an exact game/player pair, first match or absent
    pub async fn get_by_game_and_player(
        &self,
        game_id: i32,
        player_id: i32,
    ) -> Result<Option<game_statistics::Model>, DbError> {
        GameStatistics::find()
            .filter(game_statistics::Column::GameId.eq(game_id))
            .filter(game_statistics::Column::PlayerId.eq(player_id))
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Retrieves every statistic for the given game with player and game
    /// details attached. Zero-point rows are included.
    pub async fn find_by_game_id_with_details(
        &self,
        game_id: i32,
    ) -> Result<Vec<StatisticDetails>, DbError> {
        let rows = GameStatistics::find()
            .filter(game_statistics::Column::GameId.eq(game_id))
            .find_also_related(players::Entity)
            .all(&self.conn)
            .await?;

        if rows.is_empty() {
            return Ok(vec![]);
        }

        // One game shared by every row; fetch it and its teams once
        let game = match Games::find_by_id(game_id).one(&self.conn).await? {
            Some(game) => {
                let home_team = Teams::find_by_id(game.home_team_id).one(&self.conn).await?;
                let away_team = Teams::find_by_id(game.away_team_id).one(&self.conn).await?;
                Some(GameWithTeams {
                    game,
                    home_team,
                    away_team,
                })
            }
            None => None,
        };

        Ok(rows
            .into_iter()
            .map(|(statistic, player)| StatisticDetails {
                statistic,
                player,
                game: game.clone(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::db::{seed, DbPool, Repositories};
    use crate::models::{GameInput, PlayerInput, TeamInput};
    use chrono::{NaiveDate, TimeZone, Utc};

    async fn repositories() -> Repositories {
        let config = ApiConfig {
            host: "127.0.0.1".to_owned(),
            port: 0,
            database_url: "sqlite::memory:".to_owned(),
        };
        let pool = DbPool::new(&config).await.expect("connect test database");
        seed::create_tables(pool.get_connection())
            .await
            .expect("create schema");
        pool.repositories()
    }

    struct Fixture {
        repos: Repositories,
        game_id: i32,
        scorer_id: i32,
        benchwarmer_id: i32,
    }

    /// One game with two stat lines: one scorer and one zero-point player.
    async fn fixture() -> Fixture {
        let repos = repositories().await;
        let home = repos
            .teams
            .add(TeamInput {
                name: "Hawks".to_owned(),
                city: "Springfield".to_owned(),
                sport: "Basketball".to_owned(),
                founded_year: 1990,
                mascot: "Hawk".to_owned(),
                home_stadium: "Springfield Arena".to_owned(),
            })
            .await
            .unwrap();
        let away = repos
            .teams
            .add(TeamInput {
                name: "Sharks".to_owned(),
                city: "Shelbyville".to_owned(),
                sport: "Basketball".to_owned(),
                founded_year: 1992,
                mascot: "Shark".to_owned(),
                home_stadium: "Shelbyville Dome".to_owned(),
            })
            .await
            .unwrap();
        let game = repos
            .games
            .add(GameInput {
                game_date_time: Utc.with_ymd_and_hms(2024, 3, 1, 19, 0, 0).unwrap(),
                home_team_id: home.id,
                away_team_id: away.id,
                home_team_score: 92,
                away_team_score: 88,
                stadium: "Springfield Arena".to_owned(),
                status: "Completed".to_owned(),
            })
            .await
            .unwrap();

        let mut player_ids = vec![];
        for (last, points) in [("Stone", 25), ("Reed", 0)] {
            let player = repos
                .players
                .add(PlayerInput {
                    first_name: "Alex".to_owned(),
                    last_name: last.to_owned(),
                    jersey_number: 12,
                    position: "Guard".to_owned(),
                    date_of_birth: NaiveDate::from_ymd_opt(1995, 6, 1).unwrap(),
                    height_in_cm: 190,
                    weight_in_kg: 88,
                    team_id: home.id,
                })
                .await
                .unwrap();
            repos
                .statistics
                .add(GameStatisticInput {
                    game_id: game.id,
                    player_id: player.id,
                    minutes_played: 20,
                    points,
                    assists: 2,
                    rebounds: 3,
                    steals: 1,
                    blocks: 0,
                    turnovers: 1,
                })
                .await
                .unwrap();
            player_ids.push(player.id);
        }

        Fixture {
            repos,
            game_id: game.id,
            scorer_id: player_ids[0],
            benchwarmer_id: player_ids[1],
        }
    }

    #[tokio::test]
    async fn get_by_game_and_player_matches_the_exact_pair() {
        let f = fixture().await;

        let statistic = f
            .repos
            .statistics
            .get_by_game_and_player(f.game_id, f.scorer_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(statistic.points, 25);

        assert!(f
            .repos
            .statistics
            .get_by_game_and_player(f.game_id, 999)
            .await
            .unwrap()
            .is_none());
        assert!(f
            .repos
            .statistics
            .get_by_game_and_player(999, f.scorer_id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn with_details_keeps_zero_point_rows() {
        let f = fixture().await;

        let details = f
            .repos
            .statistics
            .find_by_game_id_with_details(f.game_id)
            .await
            .unwrap();

        assert_eq!(details.len(), 2);
        let benchwarmer = details
            .iter()
            .find(|d| d.statistic.player_id == f.benchwarmer_id)
            .unwrap();
        assert_eq!(benchwarmer.statistic.points, 0);
    }

    #[tokio::test]
    async fn with_details_attaches_player_and_game_with_teams() {
        let f = fixture().await;

        let details = f
            .repos
            .statistics
            .find_by_game_id_with_details(f.game_id)
            .await
            .unwrap();

        for row in &details {
            assert!(row.player.is_some());
            let game = row.game.as_ref().unwrap();
            assert_eq!(game.game.id, f.game_id);
            assert_eq!(game.home_team.as_ref().unwrap().name, "Hawks");
            assert_eq!(game.away_team.as_ref().unwrap().name, "Sharks");
        }
    }

    #[tokio::test]
    async fn with_details_on_game_without_statistics_is_empty() {
        let f = fixture().await;

        let details = f
            .repos
            .statistics
            .find_by_game_id_with_details(f.game_id + 1)
            .await
            .unwrap();
        assert!(details.is_empty());
    }

    #[tokio::test]
    async fn find_by_player_id_returns_only_that_players_lines() {
        let f = fixture().await;

        let lines = f
            .repos
            .statistics
            .find_by_player_id(f.scorer_id)
            .await
            .unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].player_id, f.scorer_id);
    }
}
