use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::error::AppError;
use crate::middleware::caller_identity::CallerClaims;

/// Authenticated caller, stamped into audit columns.
///
/// Built from the `CallerClaims` the `CallerIdentity` middleware stored in
/// request extensions; absent claims are a 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<CallerClaims>().copied();
        ready(
            claims
                .map(|c| CurrentUser { id: c.user_id })
                .ok_or_else(|| AppError::unauthorized("Missing caller identity")),
        )
    }
}
