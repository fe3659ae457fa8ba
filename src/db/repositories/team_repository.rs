// Team database operations

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter,
};

use crate::db::error::DbError;
use crate::entity::prelude::Teams;
use crate::entity::{players, teams};
use crate::models::{TeamInput, TeamWithPlayers};

/// Repository for team rows
pub struct TeamRepository {
    conn: DatabaseConnection,
}

impl TeamRepository {
    /// Creates a new team repository with the given database connection
    pub fn new(conn: DatabaseConnection) -> Self {
        TeamRepository { conn }
    }

    /// Retrieves all teams
    pub async fn get_all(&self) -> Result<Vec<teams::Model>, DbError> {
        Teams::find().all(&self.conn).await.map_err(Into::into)
    }

    /// Retrieves teams matching an arbitrary filter condition
    pub async fn find(&self, condition: Condition) -> Result<Vec<teams::Model>, DbError> {
        Teams::find()
            .filter(condition)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Retrieves a team by id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<teams::Model>, DbError> {
        Teams::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Inserts a new team and returns it with its generated id
    pub async fn add(&self, input: TeamInput) -> Result<teams::Model, DbError> {
        let team = teams::ActiveModel {
            name: Set(input.name),
            city: Set(input.city),
            sport: Set(input.sport),
            founded_year: Set(input.founded_year),
            mascot: Set(input.mascot),
            home_stadium: Set(input.home_stadium),
            ..Default::default()
        };

        team.insert(&self.conn).await.map_err(Into::into)
    }

    /// Replaces a team row by primary key, committing immediately
    pub async fn update(&self, team: teams::Model) -> Result<teams::Model, DbError> {
        let team = teams::ActiveModel {
            id: Set(team.id),
            name: Set(team.name),
            city: Set(team.city),
            sport: Set(team.sport),
            founded_year: Set(team.founded_year),
            mascot: Set(team.mascot),
            home_stadium: Set(team.home_stadium),
        };

        team.update(&self.conn).await.map_err(Into::into)
    }

    /// Deletes a team by id, reporting whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbError> {
        let result = Teams::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }

    /// Retrieves a team by id with its players eager-loaded
    pub async fn get_with_players(&self, id: i32) -> Result<Option<TeamWithPlayers>, DbError> {
        let rows = Teams::find_by_id(id)
            .find_with_related(players::Entity)
            .all(&self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .next()
            .map(|(team, players)| TeamWithPlayers { team, players }))
    }

    /// Retrieves all teams with their players eager-loaded
    pub async fn get_all_with_players(&self) -> Result<Vec<TeamWithPlayers>, DbError> {
        let rows = Teams::find()
            .find_with_related(players::Entity)
            .all(&self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(team, players)| TeamWithPlayers { team, players })
            .collect())
    }

    /// Retrieves teams playing the given sport
    pub async fn find_by_sport(&self, sport: &str) -> Result<Vec<teams::Model>, DbError> {
        self.find(Condition::all().add(teams::Column::Sport.eq(sport)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::db::{seed, DbPool};

    async fn repository() -> TeamRepository {
        let config = ApiConfig {
            host: "127.0.0.1".to_owned(),
            port: 0,
            database_url: "sqlite::memory:".to_owned(),
        };
        let pool = DbPool::new(&config).await.expect("connect test database");
        seed::create_tables(pool.get_connection())
            .await
            .expect("create schema");
        pool.repositories().teams
    }

    fn player_input(last_name: &str, team_id: i32) -> crate::models::PlayerInput {
        crate::models::PlayerInput {
            first_name: "Alex".to_owned(),
            last_name: last_name.to_owned(),
            jersey_number: 12,
            position: "Guard".to_owned(),
            date_of_birth: chrono::NaiveDate::from_ymd_opt(1995, 6, 1).unwrap(),
            height_in_cm: 190,
            weight_in_kg: 88,
            team_id,
        }
    }

    fn team_input(name: &str, sport: &str) -> TeamInput {
        TeamInput {
            name: name.to_owned(),
            city: "Springfield".to_owned(),
            sport: sport.to_owned(),
            founded_year: 1990,
            mascot: "Hawk".to_owned(),
            home_stadium: "Springfield Arena".to_owned(),
        }
    }

    #[tokio::test]
    async fn add_then_get_by_id_returns_added_team() {
        let repo = repository().await;

        let added = repo.add(team_input("Hawks", "Basketball")).await.unwrap();
        let found = repo.get_by_id(added.id).await.unwrap();

        assert_eq!(found, Some(added));
    }

    #[tokio::test]
    async fn get_by_id_one_is_a_regular_id() {
        let repo = repository().await;

        let added = repo.add(team_input("Hawks", "Basketball")).await.unwrap();
        assert_eq!(added.id, 1);
        assert_eq!(repo.get_by_id(1).await.unwrap(), Some(added));
    }

    #[tokio::test]
    async fn delete_missing_id_returns_false_and_leaves_store_unchanged() {
        let repo = repository().await;
        repo.add(team_input("Hawks", "Basketball")).await.unwrap();

        assert!(!repo.delete(42).await.unwrap());
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_existing_id_removes_the_row() {
        let repo = repository().await;
        let added = repo.add(team_input("Hawks", "Basketball")).await.unwrap();

        assert!(repo.delete(added.id).await.unwrap());
        assert_eq!(repo.get_by_id(added.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_replaces_every_field_and_preserves_id() {
        let repo = repository().await;
        let added = repo.add(team_input("Hawks", "Basketball")).await.unwrap();

        let updated = repo
            .update(teams::Model {
                id: added.id,
                name: "Eagles".to_owned(),
                city: "Shelbyville".to_owned(),
                sport: "Hockey".to_owned(),
                founded_year: 2001,
                mascot: "Eagle".to_owned(),
                home_stadium: "Shelbyville Dome".to_owned(),
            })
            .await
            .unwrap();

        assert_eq!(updated.id, added.id);
        assert_eq!(repo.get_by_id(added.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn with_players_queries_group_players_under_their_team() {
        let repo = repository().await;
        let players = crate::db::repositories::PlayerRepository::new(repo.conn.clone());

        let hawks = repo.add(team_input("Hawks", "Basketball")).await.unwrap();
        let sharks = repo.add(team_input("Sharks", "Hockey")).await.unwrap();
        players.add(player_input("Stone", hawks.id)).await.unwrap();
        players.add(player_input("Reed", hawks.id)).await.unwrap();
        players.add(player_input("Marsh", sharks.id)).await.unwrap();

        let hawks_with_players = repo.get_with_players(hawks.id).await.unwrap().unwrap();
        assert_eq!(hawks_with_players.team, hawks);
        assert_eq!(hawks_with_players.players.len(), 2);

        let all = repo.get_all_with_players().await.unwrap();
        assert_eq!(all.len(), 2);
        let sharks_entry = all.iter().find(|t| t.team.id == sharks.id).unwrap();
        assert_eq!(sharks_entry.players.len(), 1);
        assert_eq!(sharks_entry.players[0].last_name, "Marsh");

        assert!(repo.get_with_players(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_sport_filters_on_exact_sport() {
        let repo = repository().await;
        repo.add(team_input("Hawks", "Basketball")).await.unwrap();
        repo.add(team_input("Sharks", "Hockey")).await.unwrap();

        let hockey = repo.find_by_sport("Hockey").await.unwrap();
        assert_eq!(hockey.len(), 1);
        assert_eq!(hockey[0].name, "Sharks");
        assert!(repo.find_by_sport("Cricket").await.unwrap().is_empty());
    }
}
