// Handlers for player-related API endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::entity::players;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{PlayerInput, PlayerWithTeam};
use crate::services::player_service;

/// Handler for GET /api/players - Returns all players
pub async fn get_players(State(state): State<AppState>) -> ApiResult<Json<Vec<players::Model>>> {
    let players = player_service::get_all_players(&state).await?;
    Ok(Json(players))
}

/// Handler for GET /api/players/{id} - Returns a specific player
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<players::Model>> {
    let player = player_service::get_player_by_id(&state, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(player))
}

/// Handler for GET /api/players/{id}/team - Returns a player with their team
pub async fn get_player_with_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<PlayerWithTeam>> {
    let player = player_service::get_player_with_team(&state, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(player))
}

/// Handler for GET /api/players/team/{team_id} - Returns players on a team
pub async fn get_players_by_team(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> ApiResult<Json<Vec<players::Model>>> {
    let players = player_service::get_players_by_team_id(&state, team_id).await?;
    Ok(Json(players))
}

/// Handler for GET /api/players/position/{position} - Returns players by position
pub async fn get_players_by_position(
    State(state): State<AppState>,
    Path(position): Path<String>,
) -> ApiResult<Json<Vec<players::Model>>> {
    let players = player_service::get_players_by_position(&state, &position).await?;
    Ok(Json(players))
}

/// Handler for POST /api/players - Creates a player, 201 with Location header
pub async fn create_player(
    State(state): State<AppState>,
    Json(input): Json<PlayerInput>,
) -> ApiResult<impl IntoResponse> {
    let player = player_service::create_player(&state, input).await?;
    let location = format!("/api/players/{}", player.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(player),
    ))
}

/// Handler for PUT /api/players/{id} - Replaces a player, 204 on success
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<PlayerInput>,
) -> ApiResult<StatusCode> {
    player_service::update_player(&state, id, input)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for DELETE /api/players/{id} - Deletes a player, 204 on success
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    if !player_service::delete_player(&state, id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
