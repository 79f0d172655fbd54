//! tripnest-server: REST API over the tourist spot collection
//!
//! Routes HTTP verbs onto a single document collection: list, get, create,
//! partial update, delete, and lookup by owner email.

pub mod config;
pub mod http;
pub mod models;
pub mod store;

pub use config::{ConfigError, ServerConfig, StoreConfig};
pub use http::{build_router, run_server, ApiError, AppState, ServerError};
pub use store::{MemorySpotStore, PgSpotStore, SpotStore, StoreError};
