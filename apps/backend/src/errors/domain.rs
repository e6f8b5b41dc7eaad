//! Domain-level error type used across services and repos.
//!
//! HTTP- and DB-agnostic. Handlers return `Result<T, crate::error::AppError>`
//! and convert with `From<DomainError> for AppError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Required text is empty after trimming
    Blank,
    /// Text exceeds its column limit
    TooLong,
    /// Letter guess longer than a single character
    LetterTooLong,
    /// Paging parameters out of range
    Pagination,
    Other(String),
}

/// Request is understood but not allowed in the current state
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BadRequestKind {
    RoundEnded,
    TeamNotInGame,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Round,
    Team,
    Phrase,
    Other(String),
}

/// Game rule conflicts
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    AnyRoundStillOngoing,
    EmptyTeams,
    PhrasesAllUsed,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation failure
    Validation(ValidationKind, String),
    /// Valid input rejected by the current state
    BadRequest(BadRequestKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::BadRequest(kind, d) => write!(f, "bad request {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn bad_request(kind: BadRequestKind, detail: impl Into<String>) -> Self {
        Self::BadRequest(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    pub fn game_not_found(game_id: i64) -> Self {
        Self::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
    }
    pub fn round_not_found(round_id: i64) -> Self {
        Self::not_found(NotFoundKind::Round, format!("Round {round_id} not found"))
    }
    pub fn team_not_found(team_id: i64) -> Self {
        Self::not_found(NotFoundKind::Team, format!("Team {team_id} not found"))
    }
    pub fn phrase_not_found(phrase_id: i64) -> Self {
        Self::not_found(NotFoundKind::Phrase, format!("Phrase {phrase_id} not found"))
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        crate::infra::db_errors::map_db_err(e)
    }
}
