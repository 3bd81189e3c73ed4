//! Runtime settings for the server and its database pool.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatabaseTarget {
    /// Full connection string from `DATABASE_URL`.
    Url(String),
    /// Assembled from `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`.
    Parts {
        host: String,
        port: u16,
        user: String,
        password: String,
        name: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub target: DatabaseTarget,
    pub max_connections: u32,
    /// Run `ensure_schema` at startup.
    pub migrate: bool,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        match &self.target {
            DatabaseTarget::Url(url) => url.clone(),
            DatabaseTarget::Parts {
                host,
                port,
                user,
                password,
                name,
            } => {
                if password.is_empty() {
                    format!("postgres://{}@{}:{}/{}", user, host, port, name)
                } else {
                    format!("postgres://{}:{}@{}:{}/{}", user, password, host, port, name)
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Socket address string for the listener, e.g. "0.0.0.0:5000".
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
