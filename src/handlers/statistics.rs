// Handlers for game statistic API endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::entity::game_statistics;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{GameStatisticInput, StatisticDetails};
use crate::services::game_statistic_service;

/// Handler for GET /api/statistics - Returns all statistics
pub async fn get_statistics(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<game_statistics::Model>>> {
    let statistics = game_statistic_service::get_all_statistics(&state).await?;
    Ok(Json(statistics))
}

/// Handler for GET /api/statistics/{id} - Returns a specific statistic
pub async fn get_statistic(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<game_statistics::Model>> {
    let statistic = game_statistic_service::get_statistic_by_id(&state, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(statistic))
}

/// Handler for GET /api/statistics/game/{game_id} - Returns statistics for a game
pub async fn get_statistics_by_game(
    State(state): State<AppState>,
    Path(game_id): Path<i32>,
) -> ApiResult<Json<Vec<game_statistics::Model>>> {
    let statistics = game_statistic_service::get_statistics_by_game_id(&state, game_id).await?;
    Ok(Json(statistics))
}

/// Handler for GET /api/statistics/game/{game_id}/details - Returns
/// statistics for a game with player and game details attached
pub async fn get_statistics_by_game_with_details(
    State(state): State<AppState>,
    Path(game_id): Path<i32>,
) -> ApiResult<Json<Vec<StatisticDetails>>> {
    let statistics =
        game_statistic_service::get_statistics_by_game_id_with_details(&state, game_id).await?;
    Ok(Json(statistics))
}

/// Handler for GET /api/statistics/player/{player_id} - Returns statistics
/// for a player
pub async fn get_statistics_by_player(
    State(state): State<AppState>,
    Path(player_id): Path<i32>,
) -> ApiResult<Json<Vec<game_statistics::Model>>> {
    let statistics =
        game_statistic_service::get_statistics_by_player_id(&state, player_id).await?;
    Ok(Json(statistics))
}

/// Handler for GET /api/statistics/game/{game_id}/player/{player_id} -
/// Returns the statistic for an exact game/player pair
pub async fn get_statistic_by_game_and_player(
    State(state): State<AppState>,
    Path((game_id, player_id)): Path<(i32, i32)>,
) -> ApiResult<Json<game_statistics::Model>> {
    let statistic =
        game_statistic_service::get_statistic_by_game_and_player(&state, game_id, player_id)
            .await?
            .ok_or(ApiError::NotFound)?;
    Ok(Json(statistic))
}

/// Handler for POST /api/statistics - Creates a statistic, 201 with Location header
pub async fn create_statistic(
    State(state): State<AppState>,
    Json(input): Json<GameStatisticInput>,
) -> ApiResult<impl IntoResponse> {
    let statistic = game_statistic_service::create_statistic(&state, input).await?;
    let location = format!("/api/statistics/{}", statistic.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(statistic),
    ))
}

/// Handler for PUT /api/statistics/{id} - Replaces a statistic, 204 on success
pub async fn update_statistic(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<GameStatisticInput>,
) -> ApiResult<StatusCode> {
    game_statistic_service::update_statistic(&state, id, input)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for DELETE /api/statistics/{id} - Deletes a statistic, 204 on success
pub async fn delete_statistic(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    if !game_statistic_service::delete_statistic(&state, id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
