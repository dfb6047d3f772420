use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

/// Initialize database connection pool from environment variables and
/// apply pending migrations
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - MIGRATIONS_PATH: Directory holding the SQL migrations
///   (default: "./infrastructure/persistence/migrations")
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails, or a
/// migration cannot be applied
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(5);

    let pool = create_postgres_pool(&DatabaseConfig::new(db_url, max_connections)).await?;

    let migrations_path = env::var("MIGRATIONS_PATH")
        .unwrap_or_else(|_| "./infrastructure/persistence/migrations".to_string());
    run_migrations(&pool, &migrations_path).await?;

    Ok(pool)
}
