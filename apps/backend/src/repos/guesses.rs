//! Guess repository functions for domain layer.

use std::collections::HashSet;

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::OffsetDateTime;

use super::Page;
use crate::adapters::guesses_sea as guesses_adapter;
use crate::domain::adjudication::{GuessStatus, GuessType};
use crate::entities::guesses;
use crate::errors::domain::DomainError;

/// Guess domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub id: i64,
    pub round_id: i64,
    pub team_id: i64,
    pub guess_type: GuessType,
    pub status: GuessStatus,
    pub value: String,
    pub score: i32,
    pub created_by: i64,
    pub created_at: OffsetDateTime,
}

/// Leaderboard line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamScore {
    pub team_id: i64,
    pub total_score: i64,
}

impl From<guesses::GuessType> for GuessType {
    fn from(value: guesses::GuessType) -> Self {
        match value {
            guesses::GuessType::Letter => GuessType::Letter,
            guesses::GuessType::Phrase => GuessType::Phrase,
        }
    }
}

impl From<GuessType> for guesses::GuessType {
    fn from(value: GuessType) -> Self {
        match value {
            GuessType::Letter => guesses::GuessType::Letter,
            GuessType::Phrase => guesses::GuessType::Phrase,
        }
    }
}

impl From<guesses::GuessStatus> for GuessStatus {
    fn from(value: guesses::GuessStatus) -> Self {
        match value {
            guesses::GuessStatus::Correct => GuessStatus::Correct,
            guesses::GuessStatus::Wrong => GuessStatus::Wrong,
        }
    }
}

impl From<GuessStatus> for guesses::GuessStatus {
    fn from(value: GuessStatus) -> Self {
        match value {
            GuessStatus::Correct => guesses::GuessStatus::Correct,
            GuessStatus::Wrong => guesses::GuessStatus::Wrong,
        }
    }
}

impl From<guesses::Model> for Guess {
    fn from(model: guesses::Model) -> Self {
        Self {
            id: model.id,
            round_id: model.round_id,
            team_id: model.team_id,
            guess_type: model.guess_type.into(),
            status: model.status.into(),
            value: model.value,
            score: model.score,
            created_by: model.created_by,
            created_at: model.created_at,
        }
    }
}

/// New guess after adjudication
#[derive(Debug, Clone)]
pub struct NewGuess {
    pub round_id: i64,
    pub team_id: i64,
    pub guess_type: GuessType,
    pub status: GuessStatus,
    pub value: String,
    pub score: i32,
}

pub async fn list_page_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    page: u64,
    per_page: u64,
) -> Result<Page<Guess>, DomainError> {
    let rows = guesses_adapter::list_page_by_round(conn, round_id, page, per_page).await?;
    Ok(Page::from_rows(rows))
}

/// Letters revealed so far in the round
pub async fn revealed_letters<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<HashSet<char>, DomainError> {
    let values = guesses_adapter::correct_letter_values(conn, round_id).await?;
    Ok(values.iter().filter_map(|v| v.chars().next()).collect())
}

pub async fn leaderboard<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<TeamScore>, DomainError> {
    let rows = guesses_adapter::team_scores_by_game(conn, game_id).await?;
    Ok(rows
        .into_iter()
        .map(|row| TeamScore {
            team_id: row.team_id,
            total_score: row.total_score,
        })
        .collect())
}

pub async fn create_guess(
    txn: &DatabaseTransaction,
    guess: NewGuess,
    actor_id: i64,
) -> Result<Guess, DomainError> {
    let dto = guesses_adapter::GuessCreate {
        round_id: guess.round_id,
        team_id: guess.team_id,
        guess_type: guess.guess_type.into(),
        status: guess.status.into(),
        value: guess.value,
        score: guess.score,
        actor_id,
    };
    let guess = guesses_adapter::create_guess(txn, dto).await?;
    Ok(Guess::from(guess))
}
