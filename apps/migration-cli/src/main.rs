use clap::{Parser, ValueEnum};
use guessr::config::db::DbKind;
use guessr::connect_db;
use migration::{migrate, MigrationCommand};

#[derive(Clone, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "guessr database migration tool")]
struct Args {
    /// up | down | fresh | reset | refresh | status
    command: String,

    /// In-memory SQLite is not offered: it would vanish when the command exits.
    #[arg(short, long, value_enum, default_value = "postgres")]
    db: Db,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,guessr=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let command = match args.command.parse::<MigrationCommand>() {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}. Use: up | down | fresh | reset | refresh | status");
            std::process::exit(2);
        }
    };

    let db_kind = match args.db {
        Db::Postgres => DbKind::Postgres,
        Db::SqliteFile => DbKind::SqliteFile,
    };

    let conn = match connect_db(&db_kind).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("Could not connect to {db_kind:?}: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&conn, command).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
