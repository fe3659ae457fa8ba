// Team business logic implementation
//
// Thin pass-through over the team repository: failures are logged with the
// relevant ids and re-raised unchanged.

use crate::db::DbError;
use crate::entity::teams;
use crate::handlers::AppState;
use crate::models::{TeamInput, TeamWithPlayers};

pub async fn get_all_teams(state: &AppState) -> Result<Vec<teams::Model>, DbError> {
    state.teams.get_all().await.map_err(|err| {
        tracing::error!(error = %err, "error occurred while getting all teams");
        err
    })
}

pub async fn get_team_by_id(state: &AppState, id: i32) -> Result<Option<teams::Model>, DbError> {
    state.teams.get_by_id(id).await.map_err(|err| {
        tracing::error!(team_id = id, error = %err, "error occurred while getting team");
        err
    })
}

pub async fn get_team_with_players(
    state: &AppState,
    id: i32,
) -> Result<Option<TeamWithPlayers>, DbError> {
    state.teams.get_with_players(id).await.map_err(|err| {
        tracing::error!(team_id = id, error = %err, "error occurred while getting team with players");
        err
    })
}

pub async fn get_teams_by_sport(
    state: &AppState,
    sport: &str,
) -> Result<Vec<teams::Model>, DbError> {
    state.teams.find_by_sport(sport).await.map_err(|err| {
        tracing::error!(sport, error = %err, "error occurred while getting teams by sport");
        err
    })
}

pub async fn create_team(state: &AppState, input: TeamInput) -> Result<teams::Model, DbError> {
    let name = input.name.clone();
    state.teams.add(input).await.map_err(|err| {
        tracing::error!(team_name = %name, error = %err, "error occurred while creating team");
        err
    })
}

/// Read-before-write: absent teams are reported as `None` without touching
/// the store; the payload is persisted under the existing id otherwise.
pub async fn update_team(
    state: &AppState,
    id: i32,
    input: TeamInput,
) -> Result<Option<teams::Model>, DbError> {
    let existing = get_team_by_id(state, id).await?;
    if existing.is_none() {
        return Ok(None);
    }

    let team = teams::Model {
        id,
        name: input.name,
        city: input.city,
        sport: input.sport,
        founded_year: input.founded_year,
        mascot: input.mascot,
        home_stadium: input.home_stadium,
    };

    state.teams.update(team).await.map(Some).map_err(|err| {
        tracing::error!(team_id = id, error = %err, "error occurred while updating team");
        err
    })
}

pub async fn delete_team(state: &AppState, id: i32) -> Result<bool, DbError> {
    state.teams.delete(id).await.map_err(|err| {
        tracing::error!(team_id = id, error = %err, "error occurred while deleting team");
        err
    })
}
