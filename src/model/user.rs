use super::{ColumnDef, Resource, ResourceDef};
use serde::{Deserialize, Serialize};

/// Marker for the `users` resource. Email is not unique at this layer.
pub struct User;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub city: String,
    pub language: String,
}

impl Resource for User {
    const DEF: ResourceDef = ResourceDef {
        path_segment: "users",
        table_name: "users",
        columns: &[
            ColumnDef::text("firstname"),
            ColumnDef::text("lastname"),
            ColumnDef::text("email"),
            ColumnDef::text("city"),
            ColumnDef::text("language"),
        ],
    };
    type Payload = UserPayload;
}
