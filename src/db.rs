use crate::config::DatabaseConfig;
use anyhow::Result;
use diesel::{Connection, PgConnection};
use diesel_async::pooled_connection::deadpool::{Object, Pool};
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::AsyncPgConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::info;

pub type DbPool = Pool<AsyncPgConnection>;
pub type DbConnection = Object<AsyncPgConnection>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Connection pool plus startup concerns (connectivity check, migrations).
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Create the pool, verify connectivity and apply pending migrations.
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.url);
        let pool = Pool::builder(manager)
            .max_size(config.max_connections as usize)
            .build()?;

        let db = Self { pool };
        db.initialize(config).await?;

        Ok(db)
    }

    async fn initialize(&self, config: &DatabaseConfig) -> Result<()> {
        let _conn = self.pool.get().await?;
        info!("Successfully connected to the database");

        run_migrations(&config.url)?;

        Ok(())
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Migrations run over a synchronous connection before the server accepts
/// traffic.
fn run_migrations(database_url: &str) -> Result<()> {
    let mut conn = PgConnection::establish(database_url)?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("failed to run migrations: {e}"))?;
    info!("Database migrations applied successfully");

    Ok(())
}
