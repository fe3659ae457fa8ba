// Player business logic implementation

use crate::db::DbError;
use crate::entity::players;
use crate::handlers::AppState;
use crate::models::{PlayerInput, PlayerWithTeam};

pub async fn get_all_players(state: &AppState) -> Result<Vec<players::Model>, DbError> {
    state.players.get_all().await.map_err(|err| {
        tracing::error!(error = %err, "error occurred while getting all players");
        err
    })
}

pub async fn get_player_by_id(
    state: &AppState,
    id: i32,
) -> Result<Option<players::Model>, DbError> {
    state.players.get_by_id(id).await.map_err(|err| {
        tracing::error!(player_id = id, error = %err, "error occurred while getting player");
        err
    })
}

pub async fn get_player_with_team(
    state: &AppState,
    id: i32,
) -> Result<Option<PlayerWithTeam>, DbError> {
    state.players.get_with_team(id).await.map_err(|err| {
        tracing::error!(player_id = id, error = %err, "error occurred while getting player with team");
        err
    })
}

pub async fn get_players_by_team_id(
    state: &AppState,
    team_id: i32,
) -> Result<Vec<players::Model>, DbError> {
    state.players.find_by_team_id(team_id).await.map_err(|err| {
        tracing::error!(team_id, error = %err, "error occurred while getting players by team");
        err
    })
}

pub async fn get_players_by_position(
    state: &AppState,
    position: &str,
) -> Result<Vec<players::Model>, DbError> {
    state
        .players
        .find_by_position(position)
        .await
        .map_err(|err| {
            tracing::error!(position, error = %err, "error occurred while getting players by position");
            err
        })
}

pub async fn create_player(
    state: &AppState,
    input: PlayerInput,
) -> Result<players::Model, DbError> {
    let last_name = input.last_name.clone();
    state.players.add(input).await.map_err(|err| {
        tracing::error!(player_name = %last_name, error = %err, "error occurred while creating player");
        err
    })
}

pub async fn update_player(
    state: &AppState,
    id: i32,
    input: PlayerInput,
) -> Result<Option<players::Model>, DbError> {
    let existing = get_player_by_id(state, id).await?;
    if existing.is_none() {
        return Ok(None);
    }

    let player = players::Model {
        id,
        first_name: input.first_name,
        last_name: input.last_name,
        jersey_number: input.jersey_number,
        position: input.position,
        date_of_birth: input.date_of_birth,
        height_in_cm: input.height_in_cm,
        weight_in_kg: input.weight_in_kg,
        team_id: input.team_id,
    };

    state.players.update(player).await.map(Some).map_err(|err| {
        tracing::error!(player_id = id, error = %err, "error occurred while updating player");
        err
    })
}

pub async fn delete_player(state: &AppState, id: i32) -> Result<bool, DbError> {
    state.players.delete(id).await.map_err(|err| {
        tracing::error!(player_id = id, error = %err, "error occurred while deleting player");
        err
    })
}
