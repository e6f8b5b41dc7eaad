use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::info;

use crate::domain::normalize::normalize_phrase;
use crate::error::AppError;
use crate::repos::phrases::{self, Phrase};
use crate::repos::{games, Page, PageRequest};

/// Add a phrase; the value is stored normalized (trimmed, upper-case).
pub async fn create_phrase(
    txn: &DatabaseTransaction,
    actor_id: i64,
    game_id: i64,
    raw_value: &str,
) -> Result<Phrase, AppError> {
    games::require_game(txn, game_id).await?;
    let value = normalize_phrase(raw_value)?;
    let phrase = phrases::create_phrase(txn, game_id, value, actor_id).await?;
    info!(game_id, phrase_id = phrase.id, actor_id, "phrase created");
    Ok(phrase)
}

pub async fn list_phrases<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    paging: PageRequest,
) -> Result<Page<Phrase>, AppError> {
    let paging = paging.validate()?;
    games::require_game(conn, game_id).await?;
    Ok(phrases::list_page_by_game(conn, game_id, paging.page, paging.per_page).await?)
}

pub async fn get_phrase<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    phrase_id: i64,
) -> Result<Phrase, AppError> {
    Ok(phrases::require_in_game(conn, game_id, phrase_id).await?)
}

/// Deleting a phrase also removes the rounds (and guesses) bound to it.
pub async fn delete_phrase(
    txn: &DatabaseTransaction,
    actor_id: i64,
    game_id: i64,
    phrase_id: i64,
) -> Result<(), AppError> {
    phrases::require_in_game(txn, game_id, phrase_id).await?;
    phrases::delete_phrase(txn, phrase_id).await?;
    info!(game_id, phrase_id, actor_id, "phrase deleted");
    Ok(())
}
