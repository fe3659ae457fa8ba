// Handlers Module
// This module contains the API endpoint handlers and the route table

pub mod games;
pub mod health;
pub mod players;
pub mod statistics;
pub mod teams;

use std::sync::Arc;

use axum::routing::{get, patch};
use axum::Router;

use crate::db::Repositories;

/// Type alias for the application state
pub type AppState = Arc<Repositories>;

/// Builds the API route table over the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/teams",
            get(teams::get_teams).post(teams::create_team),
        )
        .route(
            "/api/teams/{id}",
            get(teams::get_team)
                .put(teams::update_team)
                .delete(teams::delete_team),
        )
        .route("/api/teams/{id}/players", get(teams::get_team_with_players))
        .route("/api/teams/sport/{sport}", get(teams::get_teams_by_sport))
        .route(
            "/api/players",
            get(players::get_players).post(players::create_player),
        )
        .route(
            "/api/players/{id}",
            get(players::get_player)
                .put(players::update_player)
                .delete(players::delete_player),
        )
        .route(
            "/api/players/{id}/team",
            get(players::get_player_with_team),
        )
        .route(
            "/api/players/team/{team_id}",
            get(players::get_players_by_team),
        )
        .route(
            "/api/players/position/{position}",
            get(players::get_players_by_position),
        )
        .route(
            "/api/games",
            get(games::get_games).post(games::create_game),
        )
        .route(
            "/api/games/{id}",
            get(games::get_game)
                .put(games::update_game)
                .delete(games::delete_game),
        )
        .route("/api/games/{id}/details", get(games::get_game_with_details))
        .route("/api/games/{id}/score", patch(games::update_game_score))
        .route("/api/games/{id}/status", patch(games::update_game_status))
        .route("/api/games/team/{team_id}", get(games::get_games_by_team))
        .route("/api/games/daterange", get(games::get_games_by_date_range))
        .route("/api/games/status/{status}", get(games::get_games_by_status))
        .route(
            "/api/statistics",
            get(statistics::get_statistics).post(statistics::create_statistic),
        )
        .route(
            "/api/statistics/{id}",
            get(statistics::get_statistic)
                .put(statistics::update_statistic)
                .delete(statistics::delete_statistic),
        )
        .route(
            "/api/statistics/game/{game_id}",
            get(statistics::get_statistics_by_game),
        )
        .route(
            "/api/statistics/game/{game_id}/details",
            get(statistics::get_statistics_by_game_with_details),
        )
        .route(
            "/api/statistics/player/{player_id}",
            get(statistics::get_statistics_by_player),
        )
        .route(
            "/api/statistics/game/{game_id}/player/{player_id}",
            get(statistics::get_statistic_by_game_and_player),
        )
        .with_state(state)
}
