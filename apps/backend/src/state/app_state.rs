use sea_orm::DatabaseConnection;

/// Application state shared by every worker
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Database connection (absent in db-less test apps)
    db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    pub fn new_without_db() -> Self {
        Self { db: None }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
