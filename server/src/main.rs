//! Movies & users API server.
//!
//! Reads `.env` then the environment (`APP_PORT`, `DATABASE_URL` or `DB_*`), ensures the
//! tables exist and serves until Ctrl-C.

use movie_api::{config, ensure_schema, init_tracing, serve, AppState, PgStore};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing("movie_api=info,movie_server=info");

    let cfg = config::from_env()?;
    tracing::info!(addr = %cfg.socket_addr(), max_connections = cfg.database.max_connections, "starting");
    let store = PgStore::connect(&cfg.database.url(), cfg.database.max_connections).await?;
    if cfg.database.migrate {
        ensure_schema(store.pool()).await?;
    }

    let listener = TcpListener::bind(cfg.socket_addr()).await?;
    serve(listener, AppState::new(store)).await?;
    Ok(())
}
