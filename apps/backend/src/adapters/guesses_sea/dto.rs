//! DTOs for guesses_sea adapter.

use sea_orm::FromQueryResult;

use crate::entities::guesses::{GuessStatus, GuessType};

/// DTO for appending an adjudicated guess.
#[derive(Debug, Clone)]
pub struct GuessCreate {
    pub round_id: i64,
    pub team_id: i64,
    pub guess_type: GuessType,
    pub status: GuessStatus,
    pub value: String,
    pub score: i32,
    pub actor_id: i64,
}

/// Aggregated score of one team across a game's rounds.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct TeamScoreRow {
    pub team_id: i64,
    pub total_score: i64,
}
