//! Error codes for the guessr API.
//!
//! Every code that can appear in a Problem Details body lives here; never
//! pass ad-hoc strings as error codes. Codes are SCREAMING_SNAKE_CASE and map
//! 1:1 to the `code` field of HTTP error responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Caller identity missing or malformed
    Unauthorized,

    // Request validation
    /// Field-level validation failure
    ValidationError,
    /// Request is well-formed but not allowed in the current state
    BadRequest,
    /// Path parameter is not a valid id
    InvalidId,

    // Resource not found
    GameNotFound,
    RoundNotFound,
    TeamNotFound,
    PhraseNotFound,
    /// Generic not found (unmatched route, unknown record)
    NotFound,

    // Game rule conflicts
    /// A round of the game is still active
    AnyRoundStillOngoing,
    /// The game has no teams to order
    EmptyTeams,
    /// Every phrase of the game was already played
    PhrasesAllUsed,
    /// Generic conflict (fallback for unmatched constraint violations)
    Conflict,

    // System errors
    DbError,
    DbUnavailable,
    DbTimeout,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// Canonical string as it appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidId => "INVALID_ID",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::RoundNotFound => "ROUND_NOT_FOUND",
            Self::TeamNotFound => "TEAM_NOT_FOUND",
            Self::PhraseNotFound => "PHRASE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::AnyRoundStillOngoing => "ANY_ROUND_STILL_ONGOING",
            Self::EmptyTeams => "EMPTY_TEAMS",
            Self::PhrasesAllUsed => "PHRASES_ALL_USED",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
