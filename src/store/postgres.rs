//! Store over a PostgreSQL pool.

use super::Store;
use crate::error::AppError;
use crate::model::ResourceDef;
use crate::sql::{self, QueryBuf, SqlParam};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::{PgArguments, PgPoolOptions, PgRow, Postgres};
use sqlx::query::Query;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }

    /// Connect a pool with at most `max_connections` connections.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(PgStore { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn bound(q: &QueryBuf) -> Query<'_, Postgres, PgArguments> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = p.bind_to(query);
        }
        query
    }
}

#[async_trait]
impl Store for PgStore {
    async fn select_all(&self, def: &ResourceDef) -> Result<Vec<Value>, AppError> {
        let q = sql::select_all(def);
        let rows = Self::bound(&q).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }

    async fn select_by_id(&self, def: &ResourceDef, id: i64) -> Result<Option<Value>, AppError> {
        let q = sql::select_by_id(def, id);
        let row = Self::bound(&q).fetch_optional(&self.pool).await?;
        Ok(row.map(|r| row_to_json(&r)))
    }

    async fn insert(&self, def: &ResourceDef, values: &[SqlParam]) -> Result<i64, AppError> {
        let q = sql::insert(def, values);
        let row = Self::bound(&q).fetch_one(&self.pool).await?;
        row_to_json(&row)
            .get(ResourceDef::PK)
            .and_then(Value::as_i64)
            .ok_or_else(|| AppError::Internal(format!("insert into {} returned no id", def.table_name)))
    }

    async fn update(&self, def: &ResourceDef, id: i64, values: &[SqlParam]) -> Result<u64, AppError> {
        let q = sql::update(def, id, values);
        let result = Self::bound(&q).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, def: &ResourceDef, id: i64) -> Result<u64, AppError> {
        let q = sql::delete(def, id);
        let result = Self::bound(&q).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        tracing::info!("closing database pool");
        self.pool.close().await;
    }
}

fn row_to_json(row: &PgRow) -> Value {
    use sqlx::Column;
    use sqlx::Row;
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let name = col.name();
        map.insert(name.to_string(), cell_to_value(row, name));
    }
    Value::Object(map)
}

fn cell_to_value(row: &PgRow, name: &str) -> Value {
    use sqlx::Row;
    if let Ok(Some(n)) = row.try_get::<Option<i32>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(name) {
        return Value::String(s);
    }
    Value::Null
}
