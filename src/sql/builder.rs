//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from a resource definition.

use crate::model::{ColumnKind, ResourceDef};
use crate::sql::SqlParam;

/// Quote identifier for PostgreSQL (safe: only from static definitions).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Statement text plus its parameters, in placeholder order.
#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: SqlParam) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

fn placeholder(n: usize, kind: ColumnKind) -> String {
    format!("${}::{}", n, kind.pg_type())
}

/// id followed by every column, in definition order.
fn select_column_list(def: &ResourceDef) -> String {
    std::iter::once(ResourceDef::PK)
        .chain(def.columns.iter().map(|c| c.name))
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row ordered by id.
pub fn select_all(def: &ResourceDef) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(def),
        quoted(def.table_name),
        quoted(ResourceDef::PK)
    );
    q
}

/// SELECT by primary key. id is the sole param.
pub fn select_by_id(def: &ResourceDef, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(SqlParam::I64(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        select_column_list(def),
        quoted(def.table_name),
        quoted(ResourceDef::PK),
        n
    );
    q
}

/// INSERT all writable columns; returns the generated id. `values` is in column order.
pub fn insert(def: &ResourceDef, values: &[SqlParam]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::with_capacity(def.columns.len());
    let mut placeholders = Vec::with_capacity(def.columns.len());
    for (c, v) in def.columns.iter().zip(values) {
        let n = q.push_param(v.clone());
        cols.push(quoted(c.name));
        placeholders.push(placeholder(n, c.kind));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(def.table_name),
        cols.join(", "),
        placeholders.join(", "),
        quoted(ResourceDef::PK)
    );
    q
}

/// UPDATE every writable column by id (full replacement). id is the last param.
pub fn update(def: &ResourceDef, id: i64, values: &[SqlParam]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::with_capacity(def.columns.len());
    for (c, v) in def.columns.iter().zip(values) {
        let n = q.push_param(v.clone());
        sets.push(format!("{} = {}", quoted(c.name), placeholder(n, c.kind)));
    }
    let id_param = q.push_param(SqlParam::I64(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${}",
        quoted(def.table_name),
        sets.join(", "),
        quoted(ResourceDef::PK),
        id_param
    );
    q
}

/// DELETE by id.
pub fn delete(def: &ResourceDef, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(SqlParam::I64(id));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ${}",
        quoted(def.table_name),
        quoted(ResourceDef::PK),
        n
    );
    q
}
