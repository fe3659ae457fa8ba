// Handlers for team-related API endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::entity::teams;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{TeamInput, TeamWithPlayers};
use crate::services::team_service;

/// Handler for GET /api/teams - Returns all teams
pub async fn get_teams(State(state): State<AppState>) -> ApiResult<Json<Vec<teams::Model>>> {
    let teams = team_service::get_all_teams(&state).await?;
    Ok(Json(teams))
}

/// Handler for GET /api/teams/{id} - Returns a specific team
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<teams::Model>> {
    let team = team_service::get_team_by_id(&state, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(team))
}

/// Handler for GET /api/teams/{id}/players - Returns a team with its players
pub async fn get_team_with_players(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<TeamWithPlayers>> {
    let team = team_service::get_team_with_players(&state, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(team))
}

/// Handler for GET /api/teams/sport/{sport} - Returns teams filtered by sport
pub async fn get_teams_by_sport(
    State(state): State<AppState>,
    Path(sport): Path<String>,
) -> ApiResult<Json<Vec<teams::Model>>> {
    let teams = team_service::get_teams_by_sport(&state, &sport).await?;
    Ok(Json(teams))
}

/// Handler for POST /api/teams - Creates a team, 201 with Location header
pub async fn create_team(
    State(state): State<AppState>,
    Json(input): Json<TeamInput>,
) -> ApiResult<impl IntoResponse> {
    let team = team_service::create_team(&state, input).await?;
    let location = format!("/api/teams/{}", team.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(team),
    ))
}

/// Handler for PUT /api/teams/{id} - Replaces a team, 204 on success
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<TeamInput>,
) -> ApiResult<StatusCode> {
    team_service::update_team(&state, id, input)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for DELETE /api/teams/{id} - Deletes a team, 204 on success
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    if !team_service::delete_team(&state, id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
