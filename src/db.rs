use migration::Migrator;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};
use sea_orm_migration::MigratorTrait;

use crate::error::AppResult;

/// Connect to the catalog database and bring the `content` schema up to date.
pub async fn connect_and_migrate(
    database_url: &str,
    max_connections: u32,
) -> AppResult<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options.max_connections(max_connections);
    // Unqualified table names resolve into the content schema on Postgres;
    // other backends ignore the search path.
    options.set_schema_search_path("content,public");
    if database_url.starts_with("sqlite") && database_url.contains(":memory:") {
        // An in-memory database exists per connection; keep exactly one alive.
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options).await?;

    match db.get_database_backend() {
        DbBackend::Postgres => {
            db.execute(Statement::from_string(
                DbBackend::Postgres,
                "CREATE SCHEMA IF NOT EXISTS content".to_string(),
            ))
            .await?;
        }
        DbBackend::Sqlite => {
            db.execute(Statement::from_string(
                DbBackend::Sqlite,
                "PRAGMA journal_mode=WAL".to_string(),
            ))
            .await?;

            db.execute(Statement::from_string(
                DbBackend::Sqlite,
                "PRAGMA synchronous=NORMAL".to_string(),
            ))
            .await?;

            db.execute(Statement::from_string(
                DbBackend::Sqlite,
                "PRAGMA foreign_keys=ON".to_string(),
            ))
            .await?;
        }
        _ => {}
    }

    Migrator::up(&db, None).await?;
    tracing::debug!("content schema migrations applied");

    Ok(db)
}
