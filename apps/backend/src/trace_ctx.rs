//! Task-local request id.
//!
//! `RequestTrace` scopes every request future with its id so error bodies and
//! log lines can read it without threading it through call signatures.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Id of the request being served, or `"unknown"` outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run `future` with `trace_id` visible through [`trace_id`].
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
