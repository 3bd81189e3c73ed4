use super::{ColumnDef, Resource, ResourceDef};
use serde::{Deserialize, Serialize};

/// Marker for the `movies` resource.
pub struct Movie;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoviePayload {
    pub title: String,
    pub director: String,
    pub year: String,
    pub color: String,
    pub duration: i32,
}

impl Resource for Movie {
    const DEF: ResourceDef = ResourceDef {
        path_segment: "movies",
        table_name: "movies",
        columns: &[
            ColumnDef::text("title"),
            ColumnDef::text("director"),
            ColumnDef::text("year"),
            ColumnDef::text("color"),
            ColumnDef::integer("duration"),
        ],
    };
    type Payload = MoviePayload;
}
