//! In-memory store with the same contract as PgStore. Test double for the HTTP and service tests.

use super::Store;
use crate::error::AppError;
use crate::model::ResourceDef;
use crate::sql::SqlParam;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Map<String, Value>>,
}

/// Tables keyed by name; ids start at 1 per table like SERIAL.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<&'static str, Table>>,
    closed: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn check_open(&self) -> Result<(), AppError> {
        if self.is_closed() {
            return Err(AppError::Db(sqlx::Error::PoolClosed));
        }
        Ok(())
    }

    fn with_table<T>(&self, def: &ResourceDef, f: impl FnOnce(&mut Table) -> T) -> Result<T, AppError> {
        self.check_open()?;
        let mut tables = self
            .tables
            .lock()
            .map_err(|_| AppError::Internal("memory store lock poisoned".into()))?;
        Ok(f(tables.entry(def.table_name).or_default()))
    }
}

fn build_row(def: &ResourceDef, id: i64, values: &[SqlParam]) -> Map<String, Value> {
    let mut row = Map::new();
    row.insert(ResourceDef::PK.to_string(), Value::Number(id.into()));
    for (c, v) in def.columns.iter().zip(values) {
        row.insert(c.name.to_string(), v.to_json());
    }
    row
}

#[async_trait]
impl Store for MemoryStore {
    async fn select_all(&self, def: &ResourceDef) -> Result<Vec<Value>, AppError> {
        self.with_table(def, |t| t.rows.values().cloned().map(Value::Object).collect())
    }

    async fn select_by_id(&self, def: &ResourceDef, id: i64) -> Result<Option<Value>, AppError> {
        self.with_table(def, |t| t.rows.get(&id).cloned().map(Value::Object))
    }

    async fn insert(&self, def: &ResourceDef, values: &[SqlParam]) -> Result<i64, AppError> {
        self.with_table(def, |t| {
            t.next_id += 1;
            let id = t.next_id;
            t.rows.insert(id, build_row(def, id, values));
            id
        })
    }

    async fn update(&self, def: &ResourceDef, id: i64, values: &[SqlParam]) -> Result<u64, AppError> {
        self.with_table(def, |t| match t.rows.get_mut(&id) {
            Some(row) => {
                *row = build_row(def, id, values);
                1
            }
            None => 0,
        })
    }

    async fn delete(&self, def: &ResourceDef, id: i64) -> Result<u64, AppError> {
        self.with_table(def, |t| u64::from(t.rows.remove(&id).is_some()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_open()
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}
