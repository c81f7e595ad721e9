//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::products::{
        CatalogProductsService, ProductsService, repository::PgProductsRepository,
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migrations(#[source] MigrateError),
}

/// Process-wide store handle and the services wired on top of it.
#[derive(Clone)]
pub struct AppContext {
    db: Db,
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(url: &str, max_connections: u32) -> Result<Self, AppInitError> {
        let pool = database::connect(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        db.migrate().await.map_err(AppInitError::Migrations)?;

        Ok(Self::from_db(db))
    }

    #[must_use]
    pub fn from_db(db: Db) -> Self {
        let repository = PgProductsRepository::new(db.pool().clone());

        Self {
            products: Arc::new(CatalogProductsService::new(Arc::new(repository))),
            db,
        }
    }

    /// Release the database pool.
    pub async fn close(self) {
        self.db.close().await;

        info!("database connections released");
    }
}
