// API request/response models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{game_statistics, games, players, teams};

/// Payload for creating or replacing a team
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInput {
    pub name: String,
    pub city: String,
    pub sport: String,
    pub founded_year: i32,
    pub mascot: String,
    pub home_stadium: String,
}

/// Payload for creating or replacing a player
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInput {
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: i32,
    pub position: String,
    pub date_of_birth: NaiveDate,
    pub height_in_cm: i32,
    pub weight_in_kg: i32,
    pub team_id: i32,
}

/// Payload for creating or replacing a game
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInput {
    pub game_date_time: DateTime<Utc>,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_team_score: i32,
    pub away_team_score: i32,
    pub stadium: String,
    pub status: String,
}

/// Payload for creating or replacing a game statistic
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatisticInput {
    pub game_id: i32,
    pub player_id: i32,
    pub minutes_played: i32,
    pub points: i32,
    pub assists: i32,
    pub rebounds: i32,
    pub steals: i32,
    pub blocks: i32,
    pub turnovers: i32,
}

/// Request body for PATCH /api/games/{id}/score
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreUpdate {
    pub home_team_score: i32,
    pub away_team_score: i32,
}

/// Request body for PATCH /api/games/{id}/status
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// Query parameters for GET /api/games/daterange
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Team with its players eager-loaded
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamWithPlayers {
    #[serde(flatten)]
    pub team: teams::Model,
    pub players: Vec<players::Model>,
}

/// Player with its team eager-loaded
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerWithTeam {
    #[serde(flatten)]
    pub player: players::Model,
    pub team: Option<teams::Model>,
}

/// Game with both team records attached
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameWithTeams {
    #[serde(flatten)]
    pub game: games::Model,
    pub home_team: Option<teams::Model>,
    pub away_team: Option<teams::Model>,
}

/// Statistic row with the player who produced it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticWithPlayer {
    #[serde(flatten)]
    pub statistic: game_statistics::Model,
    pub player: Option<players::Model>,
}

/// Game with teams, statistics and each statistic's player
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetails {
    #[serde(flatten)]
    pub game: games::Model,
    pub home_team: Option<teams::Model>,
    pub away_team: Option<teams::Model>,
    pub statistics: Vec<StatisticWithPlayer>,
}

/// Statistic row with its player and its game (teams attached)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticDetails {
    #[serde(flatten)]
    pub statistic: game_statistics::Model,
    pub player: Option<players::Model>,
    pub game: Option<GameWithTeams>,
}
