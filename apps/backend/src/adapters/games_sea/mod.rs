//! SeaORM adapter for games repository.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet, QueryOrder, Set,
};

use super::{fetch_page, PageRows};
use crate::entities::games;

pub mod dto;

pub use dto::{GameCreate, GameUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

/// Games newest first.
pub async fn list_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    page: u64,
    per_page: u64,
) -> Result<PageRows<games::Model>, sea_orm::DbErr> {
    let select = games::Entity::find().order_by_desc(games::Column::Id);
    fetch_page(conn, select, page, per_page).await
}

pub async fn create_game(
    txn: &DatabaseTransaction,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let game = games::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        configs: Set(dto.configs),
        created_by: Set(dto.actor_id),
        updated_by: Set(dto.actor_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    game.insert(txn).await
}

pub async fn update_game(
    txn: &DatabaseTransaction,
    dto: GameUpdate,
) -> Result<games::Model, sea_orm::DbErr> {
    let game = find_by_id(txn, dto.id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Game not found".to_string()))?;

    let mut game: games::ActiveModel = game.into();
    game.name = Set(dto.name);
    game.configs = Set(dto.configs);
    game.updated_by = Set(dto.actor_id);
    game.updated_at = Set(time::OffsetDateTime::now_utc());

    game.update(txn).await
}

/// Delete a game (children cascade). Returns rows affected.
pub async fn delete_by_id(txn: &DatabaseTransaction, game_id: i64) -> Result<u64, sea_orm::DbErr> {
    let res = games::Entity::delete_by_id(game_id).exec(txn).await?;
    Ok(res.rows_affected)
}
