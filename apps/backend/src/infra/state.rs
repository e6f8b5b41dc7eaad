use sea_orm::DatabaseConnection;

use crate::config::db::DbKind;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

enum DbSource {
    None,
    Kind(DbKind),
    Connection(DatabaseConnection),
}

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db: DbSource,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { db: DbSource::None }
    }

    /// Connect to `kind` and run migrations on build.
    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db = DbSource::Kind(kind);
        self
    }

    /// Use an already prepared connection as is.
    pub fn with_connection(mut self, conn: DatabaseConnection) -> Self {
        self.db = DbSource::Connection(conn);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db {
            DbSource::None => Ok(AppState::new_without_db()),
            DbSource::Kind(kind) => Ok(AppState::new(bootstrap_db(&kind).await?)),
            DbSource::Connection(conn) => Ok(AppState::new(conn)),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
