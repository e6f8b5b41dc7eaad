//! Shared helpers for guessr backend tests.
//!
//! Logging bootstrap, Problem Details assertions and unique test data.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
