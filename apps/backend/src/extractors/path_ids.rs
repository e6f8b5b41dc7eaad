//! Typed numeric ids from the route path.
//!
//! Only the shape is checked here (positive integer, else 400 `INVALID_ID`);
//! existence and parent scoping belong to the services.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

fn path_id(req: &HttpRequest, key: &str) -> Result<i64, AppError> {
    let raw = req
        .match_info()
        .get(key)
        .ok_or_else(|| AppError::bad_request(ErrorCode::InvalidId, format!("Missing {key}")))?;

    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::bad_request(
            ErrorCode::InvalidId,
            format!("Invalid {key}: {raw}"),
        )),
    }
}

macro_rules! path_id_extractor {
    ($name:ident, $key:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = AppError;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                ready(path_id(req, $key).map($name))
            }
        }
    };
}

path_id_extractor!(GameId, "game_id");
path_id_extractor!(PhraseId, "phrase_id");
path_id_extractor!(RoundId, "round_id");
path_id_extractor!(TeamId, "team_id");
