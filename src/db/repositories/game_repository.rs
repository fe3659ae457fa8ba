// Game database operations

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter,
};

use crate::db::error::DbError;
use crate::entity::prelude::{GameStatistics, Games, Teams};
use crate::entity::{game_statistics, games, players, teams};
use crate::models::{GameDetails, GameInput, GameWithTeams, StatisticWithPlayer};

/// Repository for game rows
pub struct GameRepository {
    conn: DatabaseConnection,
}

impl GameRepository {
    /// Creates a new game repository with the given database connection
    pub fn new(conn: DatabaseConnection) -> Self {
        GameRepository { conn }
    }

    /// Retrieves all games
    pub async fn get_all(&self) -> Result<Vec<games::Model>, DbError> {
        Games::find().all(&self.conn).await.map_err(Into::into)
    }

    /// Retrieves games matching an arbitrary filter condition
    pub async fn find(&self, condition: Condition) -> Result<Vec<games::Model>, DbError> {
        Games::find()
            .filter(condition)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Retrieves a game by id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<games::Model>, DbError> {
        Games::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Inserts a new game and returns it with its generated id
    pub async fn add(&self, input: GameInput) -> Result<games::Model, DbError> {
        let game = games::ActiveModel {
            game_date_time: Set(input.game_date_time),
            home_team_id: Set(input.home_team_id),
            away_team_id: Set(input.away_team_id),
            home_team_score: Set(input.home_team_score),
            away_team_score: Set(input.away_team_score),
            stadium: Set(input.stadium),
            status: Set(input.status),
            ..Default::default()
        };

        game.insert(&self.conn).await.map_err(Into::into)
    }

    /// Replaces a game row by primary key, committing immediately
    pub async fn update(&self, game: games::Model) -> Result<games::Model, DbError> {
        let game = games::ActiveModel {
            id: Set(game.id),
            game_date_time: Set(game.game_date_time),
            home_team_id: Set(game.home_team_id),
            away_team_id: Set(game.away_team_id),
            home_team_score: Set(game.home_team_score),
            away_team_score: Set(game.away_team_score),
            stadium: Set(game.stadium),
            status: Set(game.status),
        };

        game.update(&self.conn).await.map_err(Into::into)
    }

    /// Deletes a game by id, reporting whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbError> {
        let result = Games::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }

    /// Retrieves a game with home team, away team, statistics and each
    /// statistic's player
    pub async fn get_with_details(&self, id: i32) -> Result<Option<GameDetails>, DbError> {
        let game = match Games::find_by_id(id).one(&self.conn).await? {
            Some(game) => game,
            None => return Ok(None),
        };

        let home_team = Teams::find_by_id(game.home_team_id).one(&self.conn).await?;
        let away_team = Teams::find_by_id(game.away_team_id).one(&self.conn).await?;

        let statistics = GameStatistics::find()
            .filter(game_statistics::Column::GameId.eq(game.id))
            .find_also_related(players::Entity)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(|(statistic, player)| StatisticWithPlayer { statistic, player })
            .collect();

        Ok(Some(GameDetails {
            game,
            home_team,
            away_team,
            statistics,
        }))
    }

    /// Retrieves all games with both team records attached
    pub async fn get_all_with_teams(&self) -> Result<Vec<GameWithTeams>, DbError> {
        let games = self.get_all().await?;
        self.attach_teams(games).await
    }

    /// Retrieves games where the given team plays at home or away
    pub async fn find_by_team_id(&self, team_id: i32) -> Result<Vec<GameWithTeams>, DbError> {
        let games = self
            .find(
                Condition::any()
                    .add(games::Column::HomeTeamId.eq(team_id))
                    .add(games::Column::AwayTeamId.eq(team_id)),
            )
            .await?;
        self.attach_teams(games).await
    }

    /// Retrieves games scheduled within the date range, inclusive at both ends
    pub async fn find_by_date_range(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Vec<GameWithTeams>, DbError> {
        let games = self
            .find(
                Condition::all()
                    .add(games::Column::GameDateTime.gte(start_date))
                    .add(games::Column::GameDateTime.lte(end_date)),
            )
            .await?;
        self.attach_teams(games).await
    }

    /// Retrieves games with the given status (exact string match)
    pub async fn find_by_status(&self, status: &str) -> Result<Vec<GameWithTeams>, DbError> {
        let games = self
            .find(Condition::all().add(games::Column::Status.eq(status)))
            .await?;
        self.attach_teams(games).await
    }

    /// Attaches home and away team records to each game.
    ///
    /// Two-step ORM approach: batch-fetch the referenced teams in one query,
    /// then assemble in memory. Both relations of a game point at teams, so
    /// SeaORM's single-relation eager loading does not apply here.
    async fn attach_teams(&self, games: Vec<games::Model>) -> Result<Vec<GameWithTeams>, DbError> {
        if games.is_empty() {
            return Ok(vec![]);
        }

        let mut team_ids: Vec<i32> = games
            .iter()
            .flat_map(|g| [g.home_team_id, g.away_team_id])
            .collect();
        team_ids.sort_unstable();
        team_ids.dedup();

        let teams_by_id: HashMap<i32, teams::Model> = Teams::find()
            .filter(teams::Column::Id.is_in(team_ids))
            .all(&self.conn)
            .await?
            .into_iter()
            .map(|team| (team.id, team))
            .collect();

        Ok(games
            .into_iter()
            .map(|game| GameWithTeams {
                home_team: teams_by_id.get(&game.home_team_id).cloned(),
                away_team: teams_by_id.get(&game.away_team_id).cloned(),
                game,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::db::{seed, DbPool, Repositories};
    use crate::models::TeamInput;
    use chrono::TimeZone;

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

    fn team_input(name: &str) -> TeamInput {
        TeamInput {
            name: name.to_owned(),
            city: "Springfield".to_owned(),
            sport: "Basketball".to_owned(),
            founded_year: 1990,
            mascot: "Hawk".to_owned(),
            home_stadium: "Springfield Arena".to_owned(),
        }
    }

    fn game_input(
        date_time: DateTime<Utc>,
        home_team_id: i32,
        away_team_id: i32,
        status: &str,
    ) -> GameInput {
        GameInput {
            game_date_time: date_time,
            home_team_id,
            away_team_id,
            home_team_score: 0,
            away_team_score: 0,
            stadium: "Springfield Arena".to_owned(),
            status: status.to_owned(),
        }
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, d, 19, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn find_by_team_id_matches_home_or_away() {
        let repos = repositories().await;
        let a = repos.teams.add(team_input("Hawks")).await.unwrap();
        let b = repos.teams.add(team_input("Sharks")).await.unwrap();
        let c = repos.teams.add(team_input("Eagles")).await.unwrap();

        let home = repos
            .games
            .add(game_input(day(1), a.id, b.id, "Scheduled"))
            .await
            .unwrap();
        let away = repos
            .games
            .add(game_input(day(2), c.id, a.id, "Scheduled"))
            .await
            .unwrap();
        repos
            .games
            .add(game_input(day(3), b.id, c.id, "Scheduled"))
            .await
            .unwrap();

        let games = repos.games.find_by_team_id(a.id).await.unwrap();
        let mut ids: Vec<i32> = games.iter().map(|g| g.game.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![home.id, away.id]);
    }

    #[tokio::test]
    async fn find_by_date_range_is_inclusive_at_both_bounds() {
        let repos = repositories().await;
        let a = repos.teams.add(team_input("Hawks")).await.unwrap();
        let b = repos.teams.add(team_input("Sharks")).await.unwrap();

        for d in [1, 2, 3, 4, 5] {
            repos
                .games
                .add(game_input(day(d), a.id, b.id, "Scheduled"))
                .await
                .unwrap();
        }

        let games = repos
            .games
            .find_by_date_range(day(2), day(4))
            .await
            .unwrap();
        let mut days: Vec<u32> = games
            .iter()
            .map(|g| {
                use chrono::Datelike;
                g.game.game_date_time.day()
            })
            .collect();
        days.sort_unstable();
        assert_eq!(days, vec![2, 3, 4]);
    }

    #[tokio::test]
    async fn attached_teams_match_the_foreign_keys() {
        let repos = repositories().await;
        let a = repos.teams.add(team_input("Hawks")).await.unwrap();
        let b = repos.teams.add(team_input("Sharks")).await.unwrap();
        repos
            .games
            .add(game_input(day(1), a.id, b.id, "Scheduled"))
            .await
            .unwrap();

        let games = repos.games.get_all_with_teams().await.unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].home_team.as_ref().unwrap().name, "Hawks");
        assert_eq!(games[0].away_team.as_ref().unwrap().name, "Sharks");
    }

    #[tokio::test]
    async fn get_with_details_collects_teams_statistics_and_players() {
        let repos = repositories().await;
        let a = repos.teams.add(team_input("Hawks")).await.unwrap();
        let b = repos.teams.add(team_input("Sharks")).await.unwrap();
        let game = repos
            .games
            .add(game_input(day(1), a.id, b.id, "Completed"))
            .await
            .unwrap();
        let player = repos
            .players
            .add(crate::models::PlayerInput {
                first_name: "Alex".to_owned(),
                last_name: "Stone".to_owned(),
                jersey_number: 12,
                position: "Guard".to_owned(),
                date_of_birth: chrono::NaiveDate::from_ymd_opt(1995, 6, 1).unwrap(),
                height_in_cm: 190,
                weight_in_kg: 88,
                team_id: a.id,
            })
            .await
            .unwrap();
        repos
            .statistics
            .add(crate::models::GameStatisticInput {
                game_id: game.id,
                player_id: player.id,
                minutes_played: 30,
                points: 18,
                assists: 4,
                rebounds: 6,
                steals: 1,
                blocks: 0,
                turnovers: 2,
            })
            .await
            .unwrap();

        let details = repos.games.get_with_details(game.id).await.unwrap().unwrap();
        assert_eq!(details.game.id, game.id);
        assert_eq!(details.home_team.unwrap().id, a.id);
        assert_eq!(details.away_team.unwrap().id, b.id);
        assert_eq!(details.statistics.len(), 1);
        assert_eq!(
            details.statistics[0].player.as_ref().unwrap().id,
            player.id
        );

        assert!(repos.games.get_with_details(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_status_matches_exact_string() {
        let repos = repositories().await;
        let a = repos.teams.add(team_input("Hawks")).await.unwrap();
        let b = repos.teams.add(team_input("Sharks")).await.unwrap();
        repos
            .games
            .add(game_input(day(1), a.id, b.id, "Completed"))
            .await
            .unwrap();
        repos
            .games
            .add(game_input(day(2), a.id, b.id, "Scheduled"))
            .await
            .unwrap();

        let completed = repos.games.find_by_status("Completed").await.unwrap();
        assert_eq!(completed.len(), 1);
        assert!(repos.games.find_by_status("completed").await.unwrap().is_empty());
    }
}
