use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Status is free text; "Scheduled", "InProgress", "Completed", "Postponed"
/// and "Cancelled" by convention. Transitions are not validated.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub game_date_time: DateTimeUtc,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_team_score: i32,
    pub away_team_score: i32,
    pub stadium: String,
    pub status: String,
}

// Two relations point at teams, so Related<teams::Entity> is deliberately
// not implemented; home/away joins go through the repository instead.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teams::Entity",
        from = "Column::HomeTeamId",
        to = "super::teams::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    HomeTeam,
    #[sea_orm(
        belongs_to = "super::teams::Entity",
        from = "Column::AwayTeamId",
        to = "super::teams::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    AwayTeam,
    #[sea_orm(has_many = "super::game_statistics::Entity")]
    GameStatistics,
}

impl Related<super::game_statistics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameStatistics.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
