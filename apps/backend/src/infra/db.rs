use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind, DbOwner, RuntimeEnv};
use crate::error::AppError;

/// Get database engine name for logging
fn db_engine(db_kind: DbKind) -> &'static str {
    match db_kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

/// Open a connection pool. Does NOT run any migrations.
pub async fn connect_db(
    env: RuntimeEnv,
    db_kind: DbKind,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let url = db_url(env, db_kind, owner)?;

    let mut opt = ConnectOptions::new(url);
    opt.acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    // Each in-memory SQLite connection is its own database, so the pool
    // must hold exactly one.
    if db_kind == DbKind::SqliteMemory {
        opt.min_connections(1).max_connections(1);
    }

    let conn = Database::connect(opt).await?;
    info!(
        env = ?env,
        db_kind = ?db_kind,
        owner = ?owner,
        engine = db_engine(db_kind),
        "db=connected"
    );
    Ok(conn)
}

/// Connect and bring the schema up to date, returning the app pool.
///
/// Migrations run with owner credentials; for in-memory SQLite they run on
/// the very pool that is returned.
pub async fn bootstrap_db(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, AppError> {
    info!(env = ?env, db_kind = ?db_kind, "bootstrap=start");

    let pool = match db_kind {
        DbKind::SqliteMemory => {
            let pool = connect_db(env, db_kind, DbOwner::App).await?;
            migrate(&pool, MigrationCommand::Up).await?;
            pool
        }
        DbKind::Postgres | DbKind::SqliteFile => {
            let admin_pool = connect_db(env, db_kind, DbOwner::Owner).await?;
            migrate(&admin_pool, MigrationCommand::Up).await?;
            drop(admin_pool);
            connect_db(env, db_kind, DbOwner::App).await?
        }
    };

    info!("bootstrap=ready");
    Ok(pool)
}
