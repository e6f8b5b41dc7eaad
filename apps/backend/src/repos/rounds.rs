//! Round repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use super::Page;
use crate::adapters::rounds_sea as rounds_adapter;
use crate::domain::RoundConfigs;
use crate::entities::rounds;
use crate::errors::domain::DomainError;

/// Round domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub id: i64,
    pub game_id: i64,
    pub phrase_id: i64,
    pub name: String,
    pub is_ended: bool,
    pub configs: RoundConfigs,
}

impl From<rounds::Model> for Round {
    fn from(model: rounds::Model) -> Self {
        Self {
            id: model.id,
            game_id: model.game_id,
            phrase_id: model.phrase_id,
            name: model.name,
            is_ended: model.is_ended,
            configs: RoundConfigs::from_document(&model.configs),
        }
    }
}

pub async fn require_in_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    round_id: i64,
) -> Result<Round, DomainError> {
    rounds_adapter::find_in_game(conn, game_id, round_id)
        .await?
        .map(Round::from)
        .ok_or_else(|| DomainError::round_not_found(round_id))
}

pub async fn find_active_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Round>, DomainError> {
    let round = rounds_adapter::find_active_by_game(conn, game_id).await?;
    Ok(round.map(Round::from))
}

pub async fn list_page_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    page: u64,
    per_page: u64,
) -> Result<Page<Round>, DomainError> {
    let rows = rounds_adapter::list_page_by_game(conn, game_id, page, per_page).await?;
    Ok(Page::from_rows(rows))
}

pub async fn used_phrase_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<i64>, DomainError> {
    Ok(rounds_adapter::used_phrase_ids(conn, game_id).await?)
}

pub async fn create_round(
    txn: &DatabaseTransaction,
    game_id: i64,
    phrase_id: i64,
    name: String,
    configs: &RoundConfigs,
    actor_id: i64,
) -> Result<Round, DomainError> {
    let dto = rounds_adapter::RoundCreate {
        game_id,
        phrase_id,
        name,
        configs: configs.to_document(),
        actor_id,
    };
    let round = rounds_adapter::create_round(txn, dto).await?;
    Ok(Round::from(round))
}

pub async fn rename_round(
    txn: &DatabaseTransaction,
    round_id: i64,
    name: String,
    actor_id: i64,
) -> Result<Round, DomainError> {
    let dto = rounds_adapter::RoundRename {
        id: round_id,
        name,
        actor_id,
    };
    let round = rounds_adapter::rename_round(txn, dto).await?;
    Ok(Round::from(round))
}

/// End an open round. `false` when it was already ended.
pub async fn mark_ended(
    txn: &DatabaseTransaction,
    round_id: i64,
    actor_id: i64,
) -> Result<bool, DomainError> {
    let affected = rounds_adapter::mark_ended(txn, round_id, actor_id).await?;
    Ok(affected == 1)
}

pub async fn delete_round(txn: &DatabaseTransaction, round_id: i64) -> Result<(), DomainError> {
    match rounds_adapter::delete_by_id(txn, round_id).await? {
        0 => Err(DomainError::round_not_found(round_id)),
        _ => Ok(()),
    }
}
