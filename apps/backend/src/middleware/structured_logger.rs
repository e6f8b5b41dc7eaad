use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::caller_identity::CallerClaims;
use super::request_trace::TraceId;
use crate::error::AppError;

/// Emits one `request_completed` event per request; level follows the status class.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .map(|t| t.0.clone())
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            let completed = Completed {
                method,
                path,
                trace_id,
                duration_us: start.elapsed().as_micros() as u64,
            };

            match &result {
                Ok(res) => {
                    // CallerIdentity runs inside the /api scope; its claims land
                    // in the shared request extensions.
                    let user_id = res
                        .request()
                        .extensions()
                        .get::<CallerClaims>()
                        .map(|c| c.user_id);
                    let code = res
                        .response()
                        .error()
                        .and_then(|e| e.as_error::<AppError>())
                        .map(|e| e.code().as_str());
                    completed.log(res.status(), user_id, code);
                }
                Err(err) => {
                    let code = err.as_error::<AppError>().map(|e| e.code().as_str());
                    completed.log(err.as_response_error().status_code(), None, code);
                }
            }

            result
        })
    }
}

struct Completed {
    method: String,
    path: String,
    trace_id: String,
    duration_us: u64,
}

impl Completed {
    fn log(&self, status: StatusCode, user_id: Option<i64>, code: Option<&str>) {
        let Completed {
            method,
            path,
            trace_id,
            duration_us,
        } = self;
        let status_code = status.as_u16();
        let code = code.unwrap_or("-");

        if status.is_server_error() {
            error!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, trace_id = %trace_id, user_id, error.code = code, "request_completed");
        } else if status.is_client_error() {
            warn!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, trace_id = %trace_id, user_id, error.code = code, "request_completed");
        } else {
            info!(http.method = %method, url.path = %path, http.status_code = status_code, duration_us, trace_id = %trace_id, user_id, "request_completed");
        }
    }
}
