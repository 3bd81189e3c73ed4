pub mod loader;
pub mod types;

pub use loader::{from_env, from_lookup};
pub use types::*;
