// Player database operations

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter,
};

use crate::db::error::DbError;
use crate::entity::prelude::Players;
use crate::entity::{players, teams};
use crate::models::{PlayerInput, PlayerWithTeam};

/// Repository for player rows
pub struct PlayerRepository {
    conn: DatabaseConnection,
}

impl PlayerRepository {
    /// Creates a new player repository with the given database connection
    pub fn new(conn: DatabaseConnection) -> Self {
        PlayerRepository { conn }
    }

    /// Retrieves all players
    pub async fn get_all(&self) -> Result<Vec<players::Model>, DbError> {
        Players::find().all(&self.conn).await.map_err(Into::into)
    }

    /// Retrieves players matching an arbitrary filter condition
    pub async fn find(&self, condition: Condition) -> Result<Vec<players::Model>, DbError> {
        Players::find()
            .filter(condition)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Retrieves a player by id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<players::Model>, DbError> {
        Players::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Inserts a new player and returns it with its generated id
    pub async fn add(&self, input: PlayerInput) -> Result<players::Model, DbError> {
        let player = players::ActiveModel {
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            jersey_number: Set(input.jersey_number),
            position: Set(input.position),
            date_of_birth: Set(input.date_of_birth),
            height_in_cm: Set(input.height_in_cm),
            weight_in_kg: Set(input.weight_in_kg),
            team_id: Set(input.team_id),
            ..Default::default()
        };

        player.insert(&self.conn).await.map_err(Into::into)
    }

    /// Replaces a player row by primary key, committing immediately
    pub async fn update(&self, player: players::Model) -> Result<players::Model, DbError> {
        let player = players::ActiveModel {
            id: Set(player.id),
            first_name: Set(player.first_name),
            last_name: Set(player.last_name),
            jersey_number: Set(player.jersey_number),
            position: Set(player.position),
            date_of_birth: Set(player.date_of_birth),
            height_in_cm: Set(player.height_in_cm),
            weight_in_kg: Set(player.weight_in_kg),
            team_id: Set(player.team_id),
        };

        player.update(&self.conn).await.map_err(Into::into)
    }

    /// Deletes a player by id, reporting whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbError> {
        let result = Players::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }

    /// Retrieves a player by id with their team eager-loaded
    pub async fn get_with_team(&self, id: i32) -> Result<Option<PlayerWithTeam>, DbError> {
        let row = Players::find_by_id(id)
            .find_also_related(teams::Entity)
            .one(&self.conn)
            .await?;

        Ok(row.map(|(player, team)| PlayerWithTeam { player, team }))
    }

    /// Retrieves players belonging to the given team
    pub async fn find_by_team_id(&self, team_id: i32) -> Result<Vec<players::Model>, DbError> {
        self.find(Condition::all().add(players::Column::TeamId.eq(team_id)))
            .await
    }

    /// Retrieves players with the given position
    pub async fn find_by_position(&self, position: &str) -> Result<Vec<players::Model>, DbError> {
        self.find(Condition::all().add(players::Column::Position.eq(position)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::db::{seed, DbPool, Repositories};
    use crate::models::TeamInput;
    use chrono::NaiveDate;

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

    fn player_input(last_name: &str, position: &str, team_id: i32) -> PlayerInput {
        PlayerInput {
            first_name: "Alex".to_owned(),
            last_name: last_name.to_owned(),
            jersey_number: 12,
            position: position.to_owned(),
            date_of_birth: NaiveDate::from_ymd_opt(1995, 6, 1).unwrap(),
            height_in_cm: 190,
            weight_in_kg: 88,
            team_id,
        }
    }

    #[tokio::test]
    async fn get_with_team_includes_the_team_record() {
        let repos = repositories().await;
        let team = repos.teams.add(team_input("Hawks")).await.unwrap();
        let player = repos
            .players
            .add(player_input("Stone", "Guard", team.id))
            .await
            .unwrap();

        let with_team = repos.players.get_with_team(player.id).await.unwrap().unwrap();
        assert_eq!(with_team.player, player);
        assert_eq!(with_team.team, Some(team));
    }

    #[tokio::test]
    async fn get_with_team_on_missing_player_is_absent() {
        let repos = repositories().await;
        assert!(repos.players.get_with_team(7).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_team_id_and_position_filter_exactly() {
        let repos = repositories().await;
        let hawks = repos.teams.add(team_input("Hawks")).await.unwrap();
        let sharks = repos.teams.add(team_input("Sharks")).await.unwrap();
        repos
            .players
            .add(player_input("Stone", "Guard", hawks.id))
            .await
            .unwrap();
        repos
            .players
            .add(player_input("Reed", "Center", hawks.id))
            .await
            .unwrap();
        repos
            .players
            .add(player_input("Marsh", "Guard", sharks.id))
            .await
            .unwrap();

        let hawks_players = repos.players.find_by_team_id(hawks.id).await.unwrap();
        assert_eq!(hawks_players.len(), 2);

        let guards = repos.players.find_by_position("Guard").await.unwrap();
        assert_eq!(guards.len(), 2);
        assert!(guards.iter().all(|p| p.position == "Guard"));
    }

    #[tokio::test]
    async fn update_replaces_every_field_and_preserves_id() {
        let repos = repositories().await;
        let hawks = repos.teams.add(team_input("Hawks")).await.unwrap();
        let sharks = repos.teams.add(team_input("Sharks")).await.unwrap();
        let added = repos
            .players
            .add(player_input("Stone", "Guard", hawks.id))
            .await
            .unwrap();

        let updated = repos
            .players
            .update(players::Model {
                id: added.id,
                first_name: "Jamie".to_owned(),
                last_name: "Stone".to_owned(),
                jersey_number: 4,
                position: "Center".to_owned(),
                date_of_birth: NaiveDate::from_ymd_opt(1993, 1, 20).unwrap(),
                height_in_cm: 205,
                weight_in_kg: 104,
                team_id: sharks.id,
            })
            .await
            .unwrap();

        assert_eq!(updated.id, added.id);
        assert_eq!(
            repos.players.get_by_id(added.id).await.unwrap(),
            Some(updated)
        );
    }
}
