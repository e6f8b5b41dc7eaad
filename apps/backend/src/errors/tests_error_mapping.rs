// DomainError -> AppError mapping; no HTTP server or database involved
use crate::errors::domain::{
    BadRequestKind, ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let de = DomainError::validation(ValidationKind::TooLong, "name too long");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_bad_request() {
    let ended = DomainError::bad_request(BadRequestKind::RoundEnded, "round already ended");
    let app: AppError = ended.into();
    assert_eq!(app.code(), ErrorCode::BadRequest);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_game_rule_conflicts() {
    let cases = [
        (ConflictKind::AnyRoundStillOngoing, "ANY_ROUND_STILL_ONGOING"),
        (ConflictKind::EmptyTeams, "EMPTY_TEAMS"),
        (ConflictKind::PhrasesAllUsed, "PHRASES_ALL_USED"),
        (ConflictKind::Other("Unique".into()), "CONFLICT"),
    ];
    for (kind, code) in cases {
        let app: AppError = DomainError::conflict(kind, "conflict").into();
        assert_eq!(app.code().as_str(), code);
        assert_eq!(app.status().as_u16(), 409);
    }
}

#[test]
fn maps_not_found_per_entity() {
    let cases = [
        (DomainError::game_not_found(1), "GAME_NOT_FOUND"),
        (DomainError::round_not_found(2), "ROUND_NOT_FOUND"),
        (DomainError::team_not_found(3), "TEAM_NOT_FOUND"),
        (DomainError::phrase_not_found(4), "PHRASE_NOT_FOUND"),
        (
            DomainError::not_found(NotFoundKind::Other("Record".into()), "gone"),
            "NOT_FOUND",
        ),
    ];
    for (err, code) in cases {
        let app: AppError = err.into();
        assert_eq!(app.code().as_str(), code);
        assert_eq!(app.status().as_u16(), 404);
    }
}

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);

    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let other = DomainError::infra(InfraErrorKind::Other("DbErr".into()), "boom");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "DB_ERROR");
    assert_eq!(app.status().as_u16(), 500);
}
