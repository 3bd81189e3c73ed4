//! Convert serde_json::Value to values that sqlx can bind.

use crate::error::AppError;
use crate::model::ResourceDef;
use serde::Serialize;
use serde_json::Value;
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;

/// A value bound to a PostgreSQL placeholder. Columns are text or integer.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlParam {
    I64(i64),
    Text(String),
}

impl SqlParam {
    pub fn from_json(v: &Value) -> Result<Self, AppError> {
        match v {
            Value::String(s) => Ok(SqlParam::Text(s.clone())),
            Value::Number(n) => n
                .as_i64()
                .map(SqlParam::I64)
                .ok_or_else(|| AppError::Internal(format!("unsupported number: {}", n))),
            other => Err(AppError::Internal(format!("unsupported column value: {}", other))),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            SqlParam::I64(n) => Value::Number((*n).into()),
            SqlParam::Text(s) => Value::String(s.clone()),
        }
    }

    pub fn bind_to<'q>(&'q self, query: Query<'q, Postgres, PgArguments>) -> Query<'q, Postgres, PgArguments> {
        match self {
            SqlParam::I64(n) => query.bind(*n),
            SqlParam::Text(s) => query.bind(s.as_str()),
        }
    }
}

impl From<i64> for SqlParam {
    fn from(n: i64) -> Self {
        SqlParam::I64(n)
    }
}

impl From<&str> for SqlParam {
    fn from(s: &str) -> Self {
        SqlParam::Text(s.to_string())
    }
}

/// Serialize a typed payload and pick its values in column order of `def`.
/// Every column must be present in the serialized form.
pub fn payload_params<P: Serialize>(def: &ResourceDef, payload: &P) -> Result<Vec<SqlParam>, AppError> {
    let value = serde_json::to_value(payload).map_err(|e| AppError::Internal(e.to_string()))?;
    let Value::Object(map) = value else {
        return Err(AppError::Internal(format!("{} payload is not an object", def.path_segment)));
    };
    def.columns
        .iter()
        .map(|c| {
            let v = map
                .get(c.name)
                .ok_or_else(|| AppError::Internal(format!("payload has no field {}", c.name)))?;
            SqlParam::from_json(v)
        })
        .collect()
}
