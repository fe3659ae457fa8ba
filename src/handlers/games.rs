// Handlers for game-related API endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::entity::games;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{DateRangeQuery, GameDetails, GameInput, GameWithTeams, ScoreUpdate, StatusUpdate};
use crate::services::game_service;

/// Handler for GET /api/games - Returns all games with their teams
pub async fn get_games(State(state): State<AppState>) -> ApiResult<Json<Vec<GameWithTeams>>> {
    let games = game_service::get_all_games_with_teams(&state).await?;
    Ok(Json(games))
}

/// Handler for GET /api/games/{id} - Returns a specific game
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<games::Model>> {
    let game = game_service::get_game_by_id(&state, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(game))
}

/// Handler for GET /api/games/{id}/details - Returns a game with teams,
/// statistics and each statistic's player
pub async fn get_game_with_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<GameDetails>> {
    let game = game_service::get_game_with_details(&state, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(game))
}

/// Handler for GET /api/games/team/{team_id} - Returns games for a team,
/// home or away
pub async fn get_games_by_team(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> ApiResult<Json<Vec<GameWithTeams>>> {
    let games = game_service::get_games_by_team_id(&state, team_id).await?;
    Ok(Json(games))
}

/// Handler for GET /api/games/daterange?startDate&endDate - Returns games
/// within the range, inclusive at both ends
pub async fn get_games_by_date_range(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> ApiResult<Json<Vec<GameWithTeams>>> {
    let games =
        game_service::get_games_by_date_range(&state, range.start_date, range.end_date).await?;
    Ok(Json(games))
}

/// Handler for GET /api/games/status/{status} - Returns games by status
pub async fn get_games_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> ApiResult<Json<Vec<GameWithTeams>>> {
    let games = game_service::get_games_by_status(&state, &status).await?;
    Ok(Json(games))
}

/// Handler for POST /api/games - Creates a game, 201 with Location header
pub async fn create_game(
    State(state): State<AppState>,
    Json(input): Json<GameInput>,
) -> ApiResult<impl IntoResponse> {
    let game = game_service::create_game(&state, input).await?;
    let location = format!("/api/games/{}", game.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(game),
    ))
}

/// Handler for PUT /api/games/{id} - Replaces a game, 204 on success
pub async fn update_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<GameInput>,
) -> ApiResult<StatusCode> {
    game_service::update_game(&state, id, input)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for PATCH /api/games/{id}/score - Updates only the scores
pub async fn update_game_score(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(update): Json<ScoreUpdate>,
) -> ApiResult<StatusCode> {
    game_service::update_game_score(&state, id, update.home_team_score, update.away_team_score)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for PATCH /api/games/{id}/status - Updates only the status
pub async fn update_game_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(update): Json<StatusUpdate>,
) -> ApiResult<StatusCode> {
    game_service::update_game_status(&state, id, update.status)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for DELETE /api/games/{id} - Deletes a game, 204 on success
pub async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    if !game_service::delete_game(&state, id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
