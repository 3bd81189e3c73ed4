//! Static resource definitions: table, columns and typed payload per resource.
//! Identifiers used in SQL come only from these definitions.

mod movie;
mod user;

pub use movie::{Movie, MoviePayload};
pub use user::{User, UserPayload};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Column storage type. Drives DDL and the placeholder cast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Integer,
}

impl ColumnKind {
    pub fn pg_type(self) -> &'static str {
        match self {
            ColumnKind::Text => "text",
            ColumnKind::Integer => "integer",
        }
    }
}

/// A writable column. Every column is NOT NULL and must be present in write bodies.
#[derive(Clone, Copy, Debug)]
pub struct ColumnDef {
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl ColumnDef {
    pub const fn text(name: &'static str) -> Self {
        ColumnDef {
            name,
            kind: ColumnKind::Text,
        }
    }

    pub const fn integer(name: &'static str) -> Self {
        ColumnDef {
            name,
            kind: ColumnKind::Integer,
        }
    }
}

/// Table and API path for one resource. Primary key is always `id`, server-generated.
#[derive(Clone, Copy, Debug)]
pub struct ResourceDef {
    /// Path segment under /api (e.g. "movies").
    pub path_segment: &'static str,
    pub table_name: &'static str,
    /// Writable columns, in bind order. Excludes `id`.
    pub columns: &'static [ColumnDef],
}

impl ResourceDef {
    pub const PK: &'static str = "id";

    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }
}

/// A CRUD resource: static definition plus the typed body accepted on POST/PUT.
pub trait Resource: Send + Sync + 'static {
    const DEF: ResourceDef;
    type Payload: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;
}

/// Stored form of a resource: generated id next to the payload fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<P> {
    pub id: i64,
    #[serde(flatten)]
    pub fields: P,
}
