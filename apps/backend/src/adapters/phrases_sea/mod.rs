//! SeaORM adapter for phrases repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::{fetch_page, PageRows};
use crate::entities::phrases;

pub mod dto;

pub use dto::PhraseCreate;

/// Find a phrase scoped to its game
pub async fn find_in_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    phrase_id: i64,
) -> Result<Option<phrases::Model>, sea_orm::DbErr> {
    phrases::Entity::find_by_id(phrase_id)
        .filter(phrases::Column::GameId.eq(game_id))
        .one(conn)
        .await
}

pub async fn list_page_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    page: u64,
    per_page: u64,
) -> Result<PageRows<phrases::Model>, sea_orm::DbErr> {
    let select = phrases::Entity::find()
        .filter(phrases::Column::GameId.eq(game_id))
        .order_by_asc(phrases::Column::Id);
    fetch_page(conn, select, page, per_page).await
}

/// All phrase ids of a game, ascending
pub async fn ids_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<i64>, sea_orm::DbErr> {
    phrases::Entity::find()
        .select_only()
        .column(phrases::Column::Id)
        .filter(phrases::Column::GameId.eq(game_id))
        .order_by_asc(phrases::Column::Id)
        .into_tuple::<i64>()
        .all(conn)
        .await
}

pub async fn create_phrase(
    txn: &DatabaseTransaction,
    dto: PhraseCreate,
) -> Result<phrases::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let phrase = phrases::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        value: Set(dto.value),
        created_by: Set(dto.actor_id),
        updated_by: Set(dto.actor_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    phrase.insert(txn).await
}

pub async fn delete_by_id(
    txn: &DatabaseTransaction,
    phrase_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = phrases::Entity::delete_by_id(phrase_id).exec(txn).await?;
    Ok(res.rows_affected)
}
