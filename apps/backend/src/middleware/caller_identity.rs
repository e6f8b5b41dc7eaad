//! Caller identity from a trusted gateway header.
//!
//! Authentication happens upstream; the gateway forwards the authenticated
//! user id as `X-User-Id`. This middleware parses it into [`CallerClaims`] in
//! request extensions and never rejects on its own: handlers that need a
//! caller take the `CurrentUser` extractor, which answers 401 when the claims
//! are missing.

use std::future::{ready, Ready};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::debug;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Identity asserted by the gateway for this request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerClaims {
    pub user_id: i64,
}

fn parse_user_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

pub struct CallerIdentity;

impl<S, B> Transform<S, ServiceRequest> for CallerIdentity
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = CallerIdentityMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CallerIdentityMiddleware { service }))
    }
}

pub struct CallerIdentityMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for CallerIdentityMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let claims = req
            .headers()
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_user_id)
            .map(|user_id| CallerClaims { user_id });

        if let Some(claims) = claims {
            req.extensions_mut().insert(claims);
        } else if req.headers().contains_key(USER_ID_HEADER) {
            debug!("ignoring malformed caller id header");
        }

        let fut = self.service.call(req);

        Box::pin(async move {
            if let Some(claims) = claims {
                tracing::Span::current().record("user_id", claims.user_id);
            }
            fut.await
        })
    }
}
