use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pull_request")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub pull_request_id: String,
    pub title: String,
    pub author_id: String,
    pub status: PrStatus,
    pub created_at: DateTimeUtc,
    /// Set exactly once, on the OPEN -> MERGED transition.
    pub merged_at: Option<DateTimeUtc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PrStatus {
    #[sea_orm(string_value = "OPEN")]
    #[serde(rename = "OPEN")]
    Open,
    #[sea_orm(string_value = "MERGED")]
    #[serde(rename = "MERGED")]
    Merged,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::UserId",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Author,

    #[sea_orm(has_many = "super::pr_reviewer::Entity")]
    PrReviewer,
}

impl Related<super::pr_reviewer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PrReviewer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
