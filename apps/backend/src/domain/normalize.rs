//! Text normalization and input limits for names, phrases and guesses.

use crate::domain::adjudication::GuessType;
use crate::errors::domain::{DomainError, ValidationKind};

/// Column limit shared by names, phrase values and guess values.
pub const MAX_TEXT_LEN: usize = 200;

/// Trim and upper-case.
pub fn normalize_text(raw: &str) -> String {
    raw.trim().to_uppercase()
}

fn check_len(field: &str, value: &str) -> Result<(), DomainError> {
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(DomainError::validation(
            ValidationKind::TooLong,
            format!("{field} must be at most {MAX_TEXT_LEN} characters"),
        ));
    }
    Ok(())
}

/// Display name of a game, team or round: trimmed, non-blank.
pub fn validate_name(raw: &str) -> Result<String, DomainError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::Blank,
            "name must not be blank",
        ));
    }
    check_len("name", name)?;
    Ok(name.to_string())
}

/// Phrase value as stored and compared.
pub fn normalize_phrase(raw: &str) -> Result<String, DomainError> {
    let value = normalize_text(raw);
    if value.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::Blank,
            "phrase value must not be blank",
        ));
    }
    check_len("phrase value", &value)?;
    Ok(value)
}

/// Guess value as stored and adjudicated.
///
/// The single-character rule applies to what the team typed. Case mapping
/// may expand a letter (`ß` to `SS`); such a guess matches no hidden letter.
pub fn normalize_guess(guess_type: GuessType, raw: &str) -> Result<String, DomainError> {
    let typed = raw.trim();
    check_len("guess value", typed)?;
    if guess_type == GuessType::Letter && typed.chars().count() > 1 {
        return Err(DomainError::validation(
            ValidationKind::LetterTooLong,
            "letter guess must be a single character",
        ));
    }
    let value = typed.to_uppercase();
    check_len("guess value", &value)?;
    Ok(value)
}
