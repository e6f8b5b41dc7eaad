//! Game repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::OffsetDateTime;

use super::Page;
use crate::adapters::games_sea as games_adapter;
use crate::domain::GameConfigs;
use crate::entities::games;
use crate::errors::domain::DomainError;

/// Game domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub configs: GameConfigs,
    pub created_by: i64,
    pub updated_by: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<games::Model> for Game {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            configs: GameConfigs::from_document(&model.configs),
            created_by: model.created_by,
            updated_by: model.updated_by,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_id(conn, game_id).await?;
    Ok(game.map(Game::from))
}

/// Like [`find_by_id`] but a missing game is `GAME_NOT_FOUND`.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| DomainError::game_not_found(game_id))
}

pub async fn list_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    page: u64,
    per_page: u64,
) -> Result<Page<Game>, DomainError> {
    let rows = games_adapter::list_page(conn, page, per_page).await?;
    Ok(Page::from_rows(rows))
}

pub async fn create_game(
    txn: &DatabaseTransaction,
    name: String,
    configs: GameConfigs,
    actor_id: i64,
) -> Result<Game, DomainError> {
    let dto = games_adapter::GameCreate {
        name,
        configs: configs.to_document(),
        actor_id,
    };
    let game = games_adapter::create_game(txn, dto).await?;
    Ok(Game::from(game))
}

pub async fn update_game(
    txn: &DatabaseTransaction,
    game_id: i64,
    name: String,
    configs: GameConfigs,
    actor_id: i64,
) -> Result<Game, DomainError> {
    let dto = games_adapter::GameUpdate {
        id: game_id,
        name,
        configs: configs.to_document(),
        actor_id,
    };
    let game = games_adapter::update_game(txn, dto).await?;
    Ok(Game::from(game))
}

/// Delete a game and everything under it. Missing game is `GAME_NOT_FOUND`.
pub async fn delete_game(txn: &DatabaseTransaction, game_id: i64) -> Result<(), DomainError> {
    match games_adapter::delete_by_id(txn, game_id).await? {
        0 => Err(DomainError::game_not_found(game_id)),
        _ => Ok(()),
    }
}
