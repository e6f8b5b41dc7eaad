//! Round creation: turn order and phrase are resolved once and frozen.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::{debug, info};

use crate::domain::normalize::validate_name;
use crate::domain::phrase_selection::select_phrase;
use crate::domain::turn_order::resolve_turn_order;
use crate::domain::RoundConfigs;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::rounds::{self, Round};
use crate::repos::{games, phrases, teams, Page, PageRequest};

/// Start the next round of a game.
///
/// Fails with `ANY_ROUND_STILL_ONGOING` while another round is open,
/// `EMPTY_TEAMS` without teams and `PHRASES_ALL_USED` once every phrase
/// had its round.
pub async fn create_round(
    txn: &DatabaseTransaction,
    actor_id: i64,
    game_id: i64,
    raw_name: &str,
    starting_team_id: i64,
) -> Result<Round, AppError> {
    let game = games::require_game(txn, game_id).await?;

    if let Some(active) = rounds::find_active_by_game(txn, game_id).await? {
        debug!(game_id, active_round_id = active.id, "round still ongoing");
        return Err(DomainError::conflict(
            ConflictKind::AnyRoundStillOngoing,
            "Another round of this game is still ongoing",
        )
        .into());
    }

    let name = validate_name(raw_name)?;

    let team_ids = teams::ids_by_game(txn, game_id).await?;
    let phrase_ids = phrases::ids_by_game(txn, game_id).await?;
    let used_phrase_ids = rounds::used_phrase_ids(txn, game_id).await?;

    // ThreadRng is !Send; keep it out of any await.
    let (team_ids_ordering, phrase_id) = {
        let mut rng = rand::rng();
        let ordering = resolve_turn_order(
            &team_ids,
            game.configs.team_order,
            starting_team_id,
            &mut rng,
        )?;
        let phrase_id = select_phrase(
            &phrase_ids,
            &used_phrase_ids,
            game.configs.phrase_order,
            &mut rng,
        )?;
        (ordering, phrase_id)
    };

    let configs = RoundConfigs { team_ids_ordering };
    let round = rounds::create_round(txn, game_id, phrase_id, name, &configs, actor_id).await?;

    info!(
        game_id,
        round_id = round.id,
        phrase_id,
        teams = configs.team_ids_ordering.len(),
        actor_id,
        "round created"
    );
    Ok(round)
}

pub async fn list_rounds<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    paging: PageRequest,
) -> Result<Page<Round>, AppError> {
    let paging = paging.validate()?;
    games::require_game(conn, game_id).await?;
    Ok(rounds::list_page_by_game(conn, game_id, paging.page, paging.per_page).await?)
}

pub async fn get_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    round_id: i64,
) -> Result<Round, AppError> {
    Ok(rounds::require_in_game(conn, game_id, round_id).await?)
}

/// Rename only; phrase, order and state are fixed.
pub async fn update_round(
    txn: &DatabaseTransaction,
    actor_id: i64,
    game_id: i64,
    round_id: i64,
    raw_name: &str,
) -> Result<Round, AppError> {
    let name = validate_name(raw_name)?;
    rounds::require_in_game(txn, game_id, round_id).await?;
    let round = rounds::rename_round(txn, round_id, name, actor_id).await?;
    info!(game_id, round_id, actor_id, "round renamed");
    Ok(round)
}

pub async fn delete_round(
    txn: &DatabaseTransaction,
    actor_id: i64,
    game_id: i64,
    round_id: i64,
) -> Result<(), AppError> {
    rounds::require_in_game(txn, game_id, round_id).await?;
    rounds::delete_round(txn, round_id).await?;
    info!(game_id, round_id, actor_id, "round deleted");
    Ok(())
}
