//! Guess intake: validate, adjudicate against the round's history, append.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::{debug, info, warn};

use crate::domain::adjudication::{GuessStatus, GuessType};
use crate::domain::normalize::normalize_guess;
use crate::error::AppError;
use crate::errors::domain::{BadRequestKind, DomainError};
use crate::repos::guesses::{self, Guess, NewGuess};
use crate::repos::rounds::{self, Round};
use crate::repos::{games, phrases, teams, Page, PageRequest};

#[derive(Debug, Clone)]
pub struct GuessInput {
    pub team_id: i64,
    pub guess_type: GuessType,
    pub value: String,
}

/// What the guessing team is told.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub status: GuessStatus,
    pub score: i32,
    pub team_id: i64,
    pub should_end: bool,
}

fn round_ended(round_id: i64) -> DomainError {
    DomainError::bad_request(
        BadRequestKind::RoundEnded,
        format!("Round {round_id} has already ended"),
    )
}

/// Score a guess and record it; a winning guess ends the round.
pub async fn create_guess(
    txn: &DatabaseTransaction,
    actor_id: i64,
    game_id: i64,
    round_id: i64,
    input: GuessInput,
) -> Result<GuessOutcome, AppError> {
    games::require_game(txn, game_id).await?;
    let round = rounds::require_in_game(txn, game_id, round_id).await?;
    submit_guess(txn, actor_id, &round, input).await
}

/// Adjudicate and record a guess against `round` as the caller loaded it.
///
/// `round` may be stale: the final flip of `is_ended` is checked against the
/// database, and losing it fails the whole transaction.
pub async fn submit_guess(
    txn: &DatabaseTransaction,
    actor_id: i64,
    round: &Round,
    input: GuessInput,
) -> Result<GuessOutcome, AppError> {
    let (game_id, round_id) = (round.game_id, round.id);
    if round.is_ended {
        return Err(round_ended(round_id).into());
    }

    let value = normalize_guess(input.guess_type, &input.value)?;

    if teams::find_in_game(txn, game_id, input.team_id)
        .await?
        .is_none()
    {
        return Err(DomainError::bad_request(
            BadRequestKind::TeamNotInGame,
            format!("Team {} does not belong to game {game_id}", input.team_id),
        )
        .into());
    }

    let phrase = phrases::require_in_game(txn, game_id, round.phrase_id).await?;
    let revealed = guesses::revealed_letters(txn, round_id).await?;
    let judgement = input.guess_type.adjudicate(&phrase.value, &revealed, &value);

    debug!(
        round_id,
        team_id = input.team_id,
        guess_type = ?input.guess_type,
        status = ?judgement.status,
        score = judgement.score,
        "guess adjudicated"
    );

    guesses::create_guess(
        txn,
        NewGuess {
            round_id,
            team_id: input.team_id,
            guess_type: input.guess_type,
            status: judgement.status,
            value,
            score: judgement.score,
        },
        actor_id,
    )
    .await?;

    if judgement.should_end {
        // Compare-and-set: a concurrent winning guess may have closed it first.
        if !rounds::mark_ended(txn, round_id, actor_id).await? {
            warn!(round_id, team_id = input.team_id, "round ended concurrently");
            return Err(round_ended(round_id).into());
        }
        info!(game_id, round_id, team_id = input.team_id, "round ended");
    }

    Ok(GuessOutcome {
        status: judgement.status,
        score: judgement.score,
        team_id: input.team_id,
        should_end: judgement.should_end,
    })
}

/// Guesses of a round in submission order.
pub async fn list_guesses<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    round_id: i64,
    paging: PageRequest,
) -> Result<Page<Guess>, AppError> {
    let paging = paging.validate()?;
    rounds::require_in_game(conn, game_id, round_id).await?;
    Ok(guesses::list_page_by_round(conn, round_id, paging.page, paging.per_page).await?)
}
