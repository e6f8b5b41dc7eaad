use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_json::Error as JsonError;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Upper bound on a JSON request body.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// JSON body extractor with Problem Details errors.
///
/// Malformed JSON is `BAD_REQUEST`; well-formed JSON with missing or
/// mistyped fields (including unknown enum values) is `VALIDATION_ERROR`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(_req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();

        Box::pin(async move {
            let trace_id = trace_ctx::trace_id();

            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(trace_id = %trace_id, error = %e, "Failed to read request body chunk");
                    AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
                })?;
                if body.len() + chunk.len() > MAX_BODY_BYTES {
                    return Err(AppError::bad_request(
                        ErrorCode::BadRequest,
                        "Request body too large",
                    ));
                }
                body.extend_from_slice(&chunk);
            }

            let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
                debug!(
                    trace_id = %trace_id,
                    error = %Redacted(&e.to_string()),
                    body_size = body.len(),
                    "JSON parsing failed"
                );
                json_error_to_app_error(&e)
            })?;

            Ok(ValidatedJson(parsed))
        })
    }
}

fn json_error_to_app_error(error: &JsonError) -> AppError {
    match error.classify() {
        Category::Syntax => AppError::bad_request(
            ErrorCode::BadRequest,
            format!("Invalid JSON at line {}", error.line()),
        ),
        Category::Eof => {
            AppError::bad_request(ErrorCode::BadRequest, "Invalid JSON: unexpected end of input")
        }
        Category::Data => AppError::invalid(ErrorCode::ValidationError, data_error_detail(error)),
        Category::Io => AppError::bad_request(ErrorCode::BadRequest, "Invalid JSON: I/O error"),
    }
}

/// serde's data message names the field/variant ("missing field `name`"), not the value.
fn data_error_detail(error: &JsonError) -> String {
    let msg = error.to_string();
    let msg = msg.split(" at line ").next().unwrap_or_default();
    if msg.starts_with("missing field") || msg.starts_with("unknown variant") {
        msg.to_string()
    } else {
        "Wrong types for one or more fields".to_string()
    }
}
