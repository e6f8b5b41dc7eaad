//! Phrase repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use super::Page;
use crate::adapters::phrases_sea as phrases_adapter;
use crate::entities::phrases;
use crate::errors::domain::DomainError;

/// Phrase domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub id: i64,
    pub game_id: i64,
    pub value: String,
}

impl From<phrases::Model> for Phrase {
    fn from(model: phrases::Model) -> Self {
        Self {
            id: model.id,
            game_id: model.game_id,
            value: model.value,
        }
    }
}

pub async fn require_in_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    phrase_id: i64,
) -> Result<Phrase, DomainError> {
    phrases_adapter::find_in_game(conn, game_id, phrase_id)
        .await?
        .map(Phrase::from)
        .ok_or_else(|| DomainError::phrase_not_found(phrase_id))
}

pub async fn list_page_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    page: u64,
    per_page: u64,
) -> Result<Page<Phrase>, DomainError> {
    let rows = phrases_adapter::list_page_by_game(conn, game_id, page, per_page).await?;
    Ok(Page::from_rows(rows))
}

pub async fn ids_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<i64>, DomainError> {
    Ok(phrases_adapter::ids_by_game(conn, game_id).await?)
}

pub async fn create_phrase(
    txn: &DatabaseTransaction,
    game_id: i64,
    value: String,
    actor_id: i64,
) -> Result<Phrase, DomainError> {
    let dto = phrases_adapter::PhraseCreate {
        game_id,
        value,
        actor_id,
    };
    let phrase = phrases_adapter::create_phrase(txn, dto).await?;
    Ok(Phrase::from(phrase))
}

pub async fn delete_phrase(txn: &DatabaseTransaction, phrase_id: i64) -> Result<(), DomainError> {
    match phrases_adapter::delete_by_id(txn, phrase_id).await? {
        0 => Err(DomainError::phrase_not_found(phrase_id)),
        _ => Ok(()),
    }
}
