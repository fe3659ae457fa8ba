// Schema creation and startup sample data

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::sea_query::{ColumnDef, Table, TableCreateStatement};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::db::error::DbError;
use crate::entity::prelude::{GameStatistics, Games, Players, Teams};
use crate::entity::{game_statistics, games, players, teams};

/// Creates the schema and populates the store with sample data when empty.
pub async fn initialize(conn: &DatabaseConnection) -> Result<(), DbError> {
    create_tables(conn).await?;

    // Seed table by table, skipping any table that already has rows
    if Teams::find().count(conn).await? == 0 {
        seed_teams(conn).await?;
    }
    if Players::find().count(conn).await? == 0 {
        seed_players(conn).await?;
    }
    if Games::find().count(conn).await? == 0 {
        seed_games(conn).await?;
    }
    if GameStatistics::find().count(conn).await? == 0 {
        seed_game_statistics(conn).await?;
    }

    Ok(())
}

/// Creates the four tables from scratch.
///
/// Foreign keys are deliberately not declared: references are never
/// cascaded or blocked, matching the store this replaces, and deleting a
/// team with games on record must succeed.
pub async fn create_tables(conn: &DatabaseConnection) -> Result<(), DbError> {
    let backend = conn.get_database_backend();

    let teams_table = Table::create()
        .table(Teams)
        .if_not_exists()
        .col(
            ColumnDef::new(teams::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(teams::Column::Name).string().not_null())
        .col(ColumnDef::new(teams::Column::City).string().not_null())
        .col(ColumnDef::new(teams::Column::Sport).string().not_null())
        .col(
            ColumnDef::new(teams::Column::FoundedYear)
                .integer()
                .not_null(),
        )
        .col(ColumnDef::new(teams::Column::Mascot).string().not_null())
        .col(
            ColumnDef::new(teams::Column::HomeStadium)
                .string()
                .not_null(),
        )
        .to_owned();

    let players_table = Table::create()
        .table(Players)
        .if_not_exists()
        .col(
            ColumnDef::new(players::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(players::Column::FirstName)
                .string()
                .not_null(),
        )
        .col(
            ColumnDef::new(players::Column::LastName)
                .string()
                .not_null(),
        )
        .col(
            ColumnDef::new(players::Column::JerseyNumber)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(players::Column::Position)
                .string()
                .not_null(),
        )
        .col(
            ColumnDef::new(players::Column::DateOfBirth)
                .date()
                .not_null(),
        )
        .col(
            ColumnDef::new(players::Column::HeightInCm)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(players::Column::WeightInKg)
                .integer()
                .not_null(),
        )
        .col(ColumnDef::new(players::Column::TeamId).integer().not_null())
        .to_owned();

    let games_table = Table::create()
        .table(Games)
        .if_not_exists()
        .col(
            ColumnDef::new(games::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(games::Column::GameDateTime)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(games::Column::HomeTeamId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(games::Column::AwayTeamId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(games::Column::HomeTeamScore)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(games::Column::AwayTeamScore)
                .integer()
                .not_null(),
        )
        .col(ColumnDef::new(games::Column::Stadium).string().not_null())
        .col(ColumnDef::new(games::Column::Status).string().not_null())
        .to_owned();

    let statistics_table = Table::create()
        .table(GameStatistics)
        .if_not_exists()
        .col(
            ColumnDef::new(game_statistics::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(game_statistics::Column::GameId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(game_statistics::Column::PlayerId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(game_statistics::Column::MinutesPlayed)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(game_statistics::Column::Points)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(game_statistics::Column::Assists)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(game_statistics::Column::Rebounds)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(game_statistics::Column::Steals)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(game_statistics::Column::Blocks)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(game_statistics::Column::Turnovers)
                .integer()
                .not_null(),
        )
        .to_owned();

    let tables: [TableCreateStatement; 4] =
        [teams_table, players_table, games_table, statistics_table];
    for table in &tables {
        conn.execute(backend.build(table)).await?;
    }

    Ok(())
}

async fn seed_teams(conn: &DatabaseConnection) -> Result<(), DbError> {
    let teams = [
        ("Lakers", "Los Angeles", 1947, "None", "Crypto.com Arena"),
        ("Celtics", "Boston", 1946, "Lucky the Leprechaun", "TD Garden"),
        ("Warriors", "Golden State", 1946, "Thunder", "Chase Center"),
        ("Bulls", "Chicago", 1966, "Benny the Bull", "United Center"),
    ];

    for (name, city, founded_year, mascot, home_stadium) in teams {
        teams::ActiveModel {
            name: Set(name.to_owned()),
            city: Set(city.to_owned()),
            sport: Set("Basketball".to_owned()),
            founded_year: Set(founded_year),
            mascot: Set(mascot.to_owned()),
            home_stadium: Set(home_stadium.to_owned()),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}

async fn seed_players(conn: &DatabaseConnection) -> Result<(), DbError> {
    let lakers = team_id_by_name(conn, "Lakers").await?;
    let celtics = team_id_by_name(conn, "Celtics").await?;
    let warriors = team_id_by_name(conn, "Warriors").await?;
    let bulls = team_id_by_name(conn, "Bulls").await?;

    let players = [
        ("LeBron", "James", 23, "Forward", (1984, 12, 30), 206, 113, lakers),
        ("Anthony", "Davis", 3, "Center", (1993, 3, 11), 208, 115, lakers),
        ("Jayson", "Tatum", 0, "Forward", (1998, 3, 3), 203, 95, celtics),
        ("Jaylen", "Brown", 7, "Guard", (1996, 10, 24), 198, 101, celtics),
        ("Stephen", "Curry", 30, "Guard", (1988, 3, 14), 188, 84, warriors),
        ("Klay", "Thompson", 11, "Guard", (1990, 2, 8), 198, 98, warriors),
        ("Zach", "LaVine", 8, "Guard", (1995, 3, 10), 196, 91, bulls),
        ("Nikola", "Vucevic", 9, "Center", (1990, 10, 24), 213, 120, bulls),
    ];

    for (first, last, jersey, position, (y, m, d), height, weight, team_id) in players {
        let date_of_birth = NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| DbError::QueryError(format!("invalid seed date {y}-{m}-{d}")))?;
        players::ActiveModel {
            first_name: Set(first.to_owned()),
            last_name: Set(last.to_owned()),
            jersey_number: Set(jersey),
            position: Set(position.to_owned()),
            date_of_birth: Set(date_of_birth),
            height_in_cm: Set(height),
            weight_in_kg: Set(weight),
            team_id: Set(team_id),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}

async fn seed_games(conn: &DatabaseConnection) -> Result<(), DbError> {
    let lakers = team_id_by_name(conn, "Lakers").await?;
    let celtics = team_id_by_name(conn, "Celtics").await?;
    let warriors = team_id_by_name(conn, "Warriors").await?;
    let bulls = team_id_by_name(conn, "Bulls").await?;

    let now = Utc::now();
    let games = [
        (now - Duration::days(10), lakers, celtics, 105, 98, "Crypto.com Arena", "Completed"),
        (now - Duration::days(5), warriors, bulls, 120, 110, "Chase Center", "Completed"),
        (now + Duration::days(5), celtics, warriors, 0, 0, "TD Garden", "Scheduled"),
        (now + Duration::days(10), bulls, lakers, 0, 0, "United Center", "Scheduled"),
    ];

    for (date_time, home, away, home_score, away_score, stadium, status) in games {
        games::ActiveModel {
            game_date_time: Set(date_time),
            home_team_id: Set(home),
            away_team_id: Set(away),
            home_team_score: Set(home_score),
            away_team_score: Set(away_score),
            stadium: Set(stadium.to_owned()),
            status: Set(status.to_owned()),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}

async fn seed_game_statistics(conn: &DatabaseConnection) -> Result<(), DbError> {
    let lakers = team_id_by_name(conn, "Lakers").await?;
    let celtics = team_id_by_name(conn, "Celtics").await?;
    let warriors = team_id_by_name(conn, "Warriors").await?;
    let bulls = team_id_by_name(conn, "Bulls").await?;

    // (last name, minutes, points, assists, rebounds, steals, blocks, turnovers)
    let lakers_vs_celtics = [
        ("James", 38, 32, 8, 7, 2, 1, 3),
        ("Davis", 36, 24, 3, 12, 1, 3, 2),
        ("Tatum", 40, 30, 5, 6, 2, 0, 4),
        ("Brown", 38, 22, 4, 5, 1, 1, 2),
    ];
    let warriors_vs_bulls = [
        ("Curry", 36, 35, 7, 4, 3, 0, 2),
        ("Thompson", 34, 23, 2, 5, 1, 1, 1),
        ("LaVine", 38, 28, 6, 4, 1, 1, 3),
        ("Vucevic", 35, 18, 3, 14, 0, 2, 2),
    ];

    for (home, away, lines) in [
        (lakers, celtics, lakers_vs_celtics),
        (warriors, bulls, warriors_vs_bulls),
    ] {
        let game = Games::find()
            .filter(games::Column::Status.eq("Completed"))
            .filter(games::Column::HomeTeamId.eq(home))
            .filter(games::Column::AwayTeamId.eq(away))
            .one(conn)
            .await?;

        if let Some(game) = game {
            for (last, minutes, points, assists, rebounds, steals, blocks, turnovers) in lines {
                let player_id = player_id_by_last_name(conn, last).await?;
                game_statistics::ActiveModel {
                    game_id: Set(game.id),
                    player_id: Set(player_id),
                    minutes_played: Set(minutes),
                    points: Set(points),
                    assists: Set(assists),
                    rebounds: Set(rebounds),
                    steals: Set(steals),
                    blocks: Set(blocks),
                    turnovers: Set(turnovers),
                    ..Default::default()
                }
                .insert(conn)
                .await?;
            }
        }
    }

    Ok(())
}

async fn team_id_by_name(conn: &DatabaseConnection, name: &str) -> Result<i32, DbError> {
    Teams::find()
        .filter(teams::Column::Name.eq(name))
        .one(conn)
        .await?
        .map(|team| team.id)
        .ok_or_else(|| DbError::QueryError(format!("seed team {} missing", name)))
}

async fn player_id_by_last_name(conn: &DatabaseConnection, last_name: &str) -> Result<i32, DbError> {
    Players::find()
        .filter(players::Column::LastName.eq(last_name))
        .one(conn)
        .await?
        .map(|player| player.id)
        .ok_or_else(|| DbError::QueryError(format!("seed player {} missing", last_name)))
}
