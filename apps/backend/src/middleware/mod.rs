pub mod caller_identity;
pub mod cors;
pub mod request_trace;
pub mod structured_logger;
pub mod trace_span;

pub use caller_identity::{CallerClaims, CallerIdentity};
pub use cors::cors_middleware;
pub use request_trace::{RequestTrace, TraceId};
pub use structured_logger::StructuredLogger;
pub use trace_span::TraceSpan;
