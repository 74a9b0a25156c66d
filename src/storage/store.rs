//! Postgres record store: pool lifecycle plus the shared read paths.

use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};

use crate::domain::{EntityDef, FilterMap};
use crate::error::Result;
use crate::infra::config::AppConfig;
use crate::storage::query::build_list_query;

/// A record store backed by a PostgreSQL connection pool. Cloning is cheap;
/// every operation acquires a connection from the pool and returns it on all
/// exit paths.
#[derive(Clone)]
pub struct RecordStore {
    pool: PgPool,
}

impl RecordStore {
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;
        Ok(Self { pool })
    }

    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(sqlx::Error::from)?;
        Ok(())
    }

    /// Cheap connectivity probe for the healthcheck endpoint.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Executes the composed conjunctive query for one resource type.
    pub async fn list<T>(&self, def: &EntityDef, filters: &FilterMap, cap: u32) -> Result<Vec<T>>
    where
        T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut qb = build_list_query(def, filters, cap)?;
        let records = qb.build_query_as::<T>().fetch_all(&self.pool).await?;
        Ok(records)
    }

    /// True iff a row with this primary key exists in the resource's table.
    pub async fn exists_by_id(&self, def: &EntityDef, id: i32) -> Result<bool> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", def.table);
        let exists = sqlx::query_scalar::<_, bool>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }
}
