use std::env;
use std::str::FromStr;

use guessr::config::db::DbKind;
use guessr::infra::state::{build_state, StateBuilder};
use guessr::state::app_state::AppState;
use guessr::AppError;

/// `GUESSR_TEST_DB_KIND`, defaulting to a private in-memory SQLite per state.
pub fn resolve_test_db_kind() -> Result<DbKind, AppError> {
    match env::var("GUESSR_TEST_DB_KIND") {
        Ok(raw) => DbKind::from_str(&raw),
        Err(_) => Ok(DbKind::SqliteMemory),
    }
}

pub fn test_state_builder() -> Result<StateBuilder, AppError> {
    Ok(build_state().with_db(resolve_test_db_kind()?))
}

pub async fn build_test_state() -> Result<AppState, AppError> {
    test_state_builder()?.build().await
}
