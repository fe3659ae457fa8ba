// Game statistic business logic implementation

use crate::db::DbError;
use crate::entity::game_statistics;
use crate::handlers::AppState;
use crate::models::{GameStatisticInput, StatisticDetails};

pub async fn get_all_statistics(
    state: &AppState,
) -> Result<Vec<game_statistics::Model>, DbError> {
    state.statistics.get_all().await.map_err(|err| {
        tracing::error!(error = %err, "error occurred while getting all statistics");
        err
    })
}

pub async fn get_statistic_by_id(
    state: &AppState,
    id: i32,
) -> Result<Option<game_statistics::Model>, DbError> {
    state.statistics.get_by_id(id).await.map_err(|err| {
        tracing::error!(statistic_id = id, error = %err, "error occurred while getting statistic");
        err
    })
}

pub async fn get_statistics_by_game_id(
    state: &AppState,
    game_id: i32,
) -> Result<Vec<game_statistics::Model>, DbError> {
    state
        .statistics
        .find_by_game_id(game_id)
        .await
        .map_err(|err| {
            tracing::error!(game_id, error = %err, "error occurred while getting statistics by game");
            err
        })
}

pub async fn get_statistics_by_player_id(
    state: &AppState,
    player_id: i32,
) -> Result<Vec<game_statistics::Model>, DbError> {
    state
        .statistics
        .find_by_player_id(player_id)
        .await
        .map_err(|err| {
            tracing::error!(player_id, error = %err, "error occurred while getting statistics by player");
            err
        })
}

pub async fn get_statistic_by_game_and_player(
    state: &AppState,
    game_id: i32,
    player_id: i32,
) -> Result<Option<game_statistics::Model>, DbError> {
    state
        .statistics
        .get_by_game_and_player(game_id, player_id)
        .await
        .map_err(|err| {
            tracing::error!(
                game_id,
                player_id,
                error = %err,
                "error occurred while getting statistic by game and player"
            );
            err
        })
}

pub async fn get_statistics_by_game_id_with_details(
    state: &AppState,
    game_id: i32,
) -> Result<Vec<StatisticDetails>, DbError> {
    state
        .statistics
        .find_by_game_id_with_details(game_id)
        .await
        .map_err(|err| {
            tracing::error!(game_id, error = %err, "error occurred while getting statistics with details");
            err
        })
}

pub async fn create_statistic(
    state: &AppState,
    input: GameStatisticInput,
) -> Result<game_statistics::Model, DbError> {
    let (game_id, player_id) = (input.game_id, input.player_id);
    state.statistics.add(input).await.map_err(|err| {
        tracing::error!(game_id, player_id, error = %err, "error occurred while creating statistic");
        err
    })
}

pub async fn update_statistic(
    state: &AppState,
    id: i32,
    input: GameStatisticInput,
) -> Result<Option<game_statistics::Model>, DbError> {
    let existing = get_statistic_by_id(state, id).await?;
    if existing.is_none() {
        return Ok(None);
    }

    let statistic = game_statistics::Model {
        id,
        game_id: input.game_id,
        player_id: input.player_id,
        minutes_played: input.minutes_played,
        points: input.points,
        assists: input.assists,
        rebounds: input.rebounds,
        steals: input.steals,
        blocks: input.blocks,
        turnovers: input.turnovers,
    };

    state
        .statistics
        .update(statistic)
        .await
        .map(Some)
        .map_err(|err| {
            tracing::error!(statistic_id = id, error = %err, "error occurred while updating statistic");
            err
        })
}

pub async fn delete_statistic(state: &AppState, id: i32) -> Result<bool, DbError> {
    state.statistics.delete(id).await.map_err(|err| {
        tracing::error!(statistic_id = id, error = %err, "error occurred while deleting statistic");
        err
    })
}
