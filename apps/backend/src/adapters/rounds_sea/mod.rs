//! SeaORM adapter for rounds repository.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::{fetch_page, PageRows};
use crate::entities::rounds;

pub mod dto;

pub use dto::{RoundCreate, RoundRename};

/// Find a round scoped to its game
pub async fn find_in_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    round_id: i64,
) -> Result<Option<rounds::Model>, sea_orm::DbErr> {
    rounds::Entity::find_by_id(round_id)
        .filter(rounds::Column::GameId.eq(game_id))
        .one(conn)
        .await
}

/// The game's round that has not ended yet, if any
pub async fn find_active_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<rounds::Model>, sea_orm::DbErr> {
    rounds::Entity::find()
        .filter(rounds::Column::GameId.eq(game_id))
        .filter(rounds::Column::IsEnded.eq(false))
        .one(conn)
        .await
}

pub async fn list_page_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    page: u64,
    per_page: u64,
) -> Result<PageRows<rounds::Model>, sea_orm::DbErr> {
    let select = rounds::Entity::find()
        .filter(rounds::Column::GameId.eq(game_id))
        .order_by_asc(rounds::Column::Id);
    fetch_page(conn, select, page, per_page).await
}

/// Phrase ids already bound to rounds of the game
pub async fn used_phrase_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<i64>, sea_orm::DbErr> {
    rounds::Entity::find()
        .select_only()
        .column(rounds::Column::PhraseId)
        .filter(rounds::Column::GameId.eq(game_id))
        .into_tuple::<i64>()
        .all(conn)
        .await
}

pub async fn create_round(
    txn: &DatabaseTransaction,
    dto: RoundCreate,
) -> Result<rounds::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let round = rounds::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        phrase_id: Set(dto.phrase_id),
        name: Set(dto.name),
        is_ended: Set(false),
        configs: Set(dto.configs),
        created_by: Set(dto.actor_id),
        updated_by: Set(dto.actor_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    round.insert(txn).await
}

pub async fn rename_round(
    txn: &DatabaseTransaction,
    dto: RoundRename,
) -> Result<rounds::Model, sea_orm::DbErr> {
    let round = rounds::Entity::find_by_id(dto.id)
        .one(txn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Round not found".to_string()))?;

    let mut round: rounds::ActiveModel = round.into();
    round.name = Set(dto.name);
    round.updated_by = Set(dto.actor_id);
    round.updated_at = Set(time::OffsetDateTime::now_utc());

    round.update(txn).await
}

/// Flip `is_ended` only if the round is still open.
///
/// Returns rows affected: 0 means another writer ended it first.
pub async fn mark_ended(
    txn: &DatabaseTransaction,
    round_id: i64,
    actor_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = rounds::Entity::update_many()
        .col_expr(rounds::Column::IsEnded, Expr::value(true))
        .col_expr(rounds::Column::UpdatedBy, Expr::value(actor_id))
        .col_expr(
            rounds::Column::UpdatedAt,
            Expr::value(time::OffsetDateTime::now_utc()),
        )
        .filter(rounds::Column::Id.eq(round_id))
        .filter(rounds::Column::IsEnded.eq(false))
        .exec(txn)
        .await?;
    Ok(res.rows_affected)
}

pub async fn delete_by_id(txn: &DatabaseTransaction, round_id: i64) -> Result<u64, sea_orm::DbErr> {
    let res = rounds::Entity::delete_by_id(round_id).exec(txn).await?;
    Ok(res.rows_affected)
}
