use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rounds")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "game_id")]
    pub game_id: i64,
    #[sea_orm(column_name = "phrase_id")]
    pub phrase_id: i64,
    pub name: String,
    #[sea_orm(column_name = "is_ended")]
    pub is_ended: bool,
    /// `{team_ids_ordering}` frozen at creation
    #[sea_orm(column_type = "JsonBinary")]
    pub configs: Json,
    #[sea_orm(column_name = "created_by")]
    pub created_by: i64,
    #[sea_orm(column_name = "updated_by")]
    pub updated_by: i64,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::games::Entity",
        from = "Column::GameId",
        to = "super::games::Column::Id",
        on_delete = "Cascade"
    )]
    Game,
    #[sea_orm(
        belongs_to = "super::phrases::Entity",
        from = "Column::PhraseId",
        to = "super::phrases::Column::Id",
        on_delete = "Cascade"
    )]
    Phrase,
    #[sea_orm(has_many = "super::guesses::Entity")]
    Guesses,
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Game.def()
    }
}

impl Related<super::phrases::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Phrase.def()
    }
}

impl Related<super::guesses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guesses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
