//! Create resource tables from the static definitions. Idempotent (IF NOT EXISTS).

use crate::error::AppError;
use crate::model::{ColumnKind, Movie, Resource, ResourceDef, User};
use sqlx::PgPool;

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// DDL for one resource: SERIAL id plus NOT NULL columns.
pub fn create_table_sql(def: &ResourceDef) -> String {
    let mut col_defs = vec![format!("{} SERIAL PRIMARY KEY", quote(ResourceDef::PK))];
    for c in def.columns {
        let typ = match c.kind {
            ColumnKind::Text => "TEXT",
            ColumnKind::Integer => "INTEGER",
        };
        col_defs.push(format!("{} {} NOT NULL", quote(c.name), typ));
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quote(def.table_name),
        col_defs.join(", ")
    )
}

/// Ensure the movies and users tables exist.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    for def in [Movie::DEF, User::DEF] {
        let ddl = create_table_sql(&def);
        tracing::debug!(sql = %ddl, "ensure table");
        sqlx::query(&ddl).execute(pool).await?;
    }
    tracing::info!("schema ready");
    Ok(())
}
