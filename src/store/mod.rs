//! Database collaborator: one trait, one method per statement shape.
//! Rows cross this boundary as flat JSON objects keyed by column name.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::error::AppError;
use crate::model::ResourceDef;
use crate::sql::SqlParam;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait Store: Send + Sync {
    /// Every row of the resource, ordered by id.
    async fn select_all(&self, def: &ResourceDef) -> Result<Vec<Value>, AppError>;

    async fn select_by_id(&self, def: &ResourceDef, id: i64) -> Result<Option<Value>, AppError>;

    /// Insert one row; `values` follow `def.columns`. Returns the generated id.
    async fn insert(&self, def: &ResourceDef, values: &[SqlParam]) -> Result<i64, AppError>;

    /// Replace every column of row `id`. Returns the number of rows matched.
    async fn update(&self, def: &ResourceDef, id: i64, values: &[SqlParam]) -> Result<u64, AppError>;

    /// Returns the number of rows deleted.
    async fn delete(&self, def: &ResourceDef, id: i64) -> Result<u64, AppError>;

    async fn ping(&self) -> Result<(), AppError>;

    /// Release pooled connections. Called once at shutdown, never mid-request.
    async fn close(&self);
}
