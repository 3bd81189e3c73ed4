//! Movies & users REST API: validated CRUD over PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod server;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, DatabaseConfig};
pub use error::{AppError, ConfigError};
pub use migration::ensure_schema;
pub use model::{Movie, MoviePayload, Record, Resource, User, UserPayload};
pub use routes::{api_routes, build_router, common_routes};
pub use server::{init_tracing, serve, serve_with_shutdown};
pub use service::CrudService;
pub use state::AppState;
pub use store::{MemoryStore, PgStore, Store};
