use std::str::FromStr;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, SqlxSqliteConnector};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{info, trace};

use crate::config::db::{db_url, DbKind};
use crate::error::AppError;

const SQLITE_BUSY_TIMEOUT_MS: u32 = 5000;

/// Per-connection SQLite settings. Cascading deletes rely on `foreign_keys`.
fn sqlite_session_statements() -> Vec<String> {
    vec![
        "PRAGMA foreign_keys = ON;".to_string(),
        format!("PRAGMA busy_timeout = {SQLITE_BUSY_TIMEOUT_MS};"),
    ]
}

fn sqlite_pool_options(kind: &DbKind) -> SqlitePoolOptions {
    let opts = SqlitePoolOptions::new()
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5));

    if matches!(kind, DbKind::SqliteMemory) {
        // The database lives inside its single connection: a second or a
        // recycled connection opens a new, empty `sqlite::memory:`.
        opts.max_connections(1)
            .max_lifetime(None)
            .idle_timeout(None)
    } else {
        opts.max_connections(4)
    }
}

async fn connect_sqlite(kind: &DbKind, url: &str) -> Result<DatabaseConnection, AppError> {
    let connect_opts = SqliteConnectOptions::from_str(url)
        .map_err(|e| AppError::config(format!("invalid SQLite connection options: {e}")))?
        .create_if_missing(true);

    let pool = sqlite_pool_options(kind)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                for stmt in sqlite_session_statements() {
                    sqlx::query(&stmt).execute(&mut *conn).await?;
                }
                trace!("db=sqlite hook=after_connect ok");
                Ok::<_, sqlx::Error>(())
            })
        })
        .connect_with(connect_opts)
        .await
        .map_err(|e| AppError::config(format!("failed to create SQLite connection pool: {e}")))?;

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// Open a connection pool for `kind`. Does NOT run migrations.
pub async fn connect_db(kind: &DbKind) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind)?;
    if kind.is_sqlite() {
        return connect_sqlite(kind, &url).await;
    }

    let mut opts = ConnectOptions::new(url);
    opts.connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .max_connections(16)
        .sqlx_logging(false);
    let conn = Database::connect(opts).await?;
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(kind: &DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(kind).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    info!(db_kind = ?kind, "database ready");
    Ok(conn)
}
