// Game business logic implementation

use chrono::{DateTime, Utc};

use crate::db::DbError;
use crate::entity::games;
use crate::handlers::AppState;
use crate::models::{GameDetails, GameInput, GameWithTeams};

pub async fn get_all_games_with_teams(state: &AppState) -> Result<Vec<GameWithTeams>, DbError> {
    state.games.get_all_with_teams().await.map_err(|err| {
        tracing::error!(error = %err, "error occurred while getting all games with teams");
        err
    })
}

pub async fn get_game_by_id(state: &AppState, id: i32) -> Result<Option<games::Model>, DbError> {
    state.games.get_by_id(id).await.map_err(|err| {
        tracing::error!(game_id = id, error = %err, "error occurred while getting game");
        err
    })
}

pub async fn get_game_with_details(
    state: &AppState,
    id: i32,
) -> Result<Option<GameDetails>, DbError> {
    state.games.get_with_details(id).await.map_err(|err| {
        tracing::error!(game_id = id, error = %err, "error occurred while getting game with details");
        err
    })
}

pub async fn get_games_by_team_id(
    state: &AppState,
    team_id: i32,
) -> Result<Vec<GameWithTeams>, DbError> {
    state.games.find_by_team_id(team_id).await.map_err(|err| {
        tracing::error!(team_id, error = %err, "error occurred while getting games by team");
        err
    })
}

pub async fn get_games_by_date_range(
    state: &AppState,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> Result<Vec<GameWithTeams>, DbError> {
    state
        .games
        .find_by_date_range(start_date, end_date)
        .await
        .map_err(|err| {
            tracing::error!(
                %start_date,
                %end_date,
                error = %err,
                "error occurred while getting games in date range"
            );
            err
        })
}

pub async fn get_games_by_status(
    state: &AppState,
    status: &str,
) -> Result<Vec<GameWithTeams>, DbError> {
    state.games.find_by_status(status).await.map_err(|err| {
        tracing::error!(status, error = %err, "error occurred while getting games by status");
        err
    })
}

pub async fn create_game(state: &AppState, input: GameInput) -> Result<games::Model, DbError> {
    let (home, away) = (input.home_team_id, input.away_team_id);
    state.games.add(input).await.map_err(|err| {
        tracing::error!(
            home_team_id = home,
            away_team_id = away,
            error = %err,
            "error occurred while creating game"
        );
        err
    })
}

pub async fn update_game(
    state: &AppState,
    id: i32,
    input: GameInput,
) -> Result<Option<games::Model>, DbError> {
    let existing = get_game_by_id(state, id).await?;
    if existing.is_none() {
        return Ok(None);
    }

    let game = games::Model {
        id,
        game_date_time: input.game_date_time,
        home_team_id: input.home_team_id,
        away_team_id: input.away_team_id,
        home_team_score: input.home_team_score,
        away_team_score: input.away_team_score,
        stadium: input.stadium,
        status: input.status,
    };

    state.games.update(game).await.map(Some).map_err(|err| {
        tracing::error!(game_id = id, error = %err, "error occurred while updating game");
        err
    })
}

/// Narrow partial update: only the two score fields change.
pub async fn update_game_score(
    state: &AppState,
    id: i32,
    home_score: i32,
    away_score: i32,
) -> Result<Option<games::Model>, DbError> {
    let game = get_game_by_id(state, id).await?;
    let mut game = match game {
        Some(game) => game,
        None => return Ok(None),
    };

    game.home_team_score = home_score;
    game.away_team_score = away_score;

    state.games.update(game).await.map(Some).map_err(|err| {
        tracing::error!(game_id = id, error = %err, "error occurred while updating game score");
        err
    })
}

/// Narrow partial update: only the status field changes. Any string is
/// accepted; transitions are not validated.
pub async fn update_game_status(
    state: &AppState,
    id: i32,
    status: String,
) -> Result<Option<games::Model>, DbError> {
    let game = get_game_by_id(state, id).await?;
    let mut game = match game {
        Some(game) => game,
        None => return Ok(None),
    };

    game.status = status;

    state.games.update(game).await.map(Some).map_err(|err| {
        tracing::error!(game_id = id, error = %err, "error occurred while updating game status");
        err
    })
}

pub async fn delete_game(state: &AppState, id: i32) -> Result<bool, DbError> {
    state.games.delete(id).await.map_err(|err| {
        tracing::error!(game_id = id, error = %err, "error occurred while deleting game");
        err
    })
}
