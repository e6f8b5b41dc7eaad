use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Which database backend the process talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbKind {
    /// Postgres built from `POSTGRES_*` / `GUESSR_DB*` variables
    Postgres,
    /// SQLite file at `GUESSR_SQLITE_PATH`
    SqliteFile,
    /// Private in-memory SQLite (tests, demos)
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!(
                "GUESSR_DB_KIND must be postgres, sqlite-file or sqlite-memory, got '{other}'"
            ))),
        }
    }
}

impl DbKind {
    /// `GUESSR_DB_KIND`, defaulting to Postgres.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("GUESSR_DB_KIND") {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(DbKind::Postgres),
        }
    }

    pub fn is_sqlite(&self) -> bool {
        matches!(self, DbKind::SqliteFile | DbKind::SqliteMemory)
    }
}

/// Builds the connection URL for `kind` from the environment.
pub fn db_url(kind: &DbKind) -> Result<String, AppError> {
    match kind {
        DbKind::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = must_var("GUESSR_DB")?;
            let username = must_var("GUESSR_DB_USER")?;
            let password = must_var("GUESSR_DB_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteFile => {
            let path = must_var("GUESSR_SQLITE_PATH")?;
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
