//! Persistence layer - the tourist spot collection
//!
//! Every HTTP operation maps to exactly one call on [`SpotStore`].
//! Backends:
//! - [`PgSpotStore`]: PostgreSQL JSONB collection (production)
//! - [`MemorySpotStore`]: in-process collection (tests, `serve --memory`)

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod schema;

use async_trait::async_trait;

use crate::models::{DeleteAck, Document, InsertAck, OwnerEmail, SpotId, TouristSpot, UpdateAck};

pub use memory::MemorySpotStore;
pub use pool::{create_pool, create_pool_with_options};
pub use postgres::PgSpotStore;
pub use schema::ensure_schema;
pub use sqlx::PgPool;

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Operations on the tourist spot collection.
///
/// Not-found is never an error here: lookups return `None` or empty
/// lists, mutations report counts. The HTTP layer decides what a zero
/// count means.
#[async_trait]
pub trait SpotStore: Send + Sync {
    /// Round-trip to the backend to confirm it is reachable.
    async fn ping(&self) -> StoreResult<()>;

    /// All spots in the backend's natural order.
    async fn find_all(&self) -> StoreResult<Vec<TouristSpot>>;

    async fn find_by_id(&self, id: SpotId) -> StoreResult<Option<TouristSpot>>;

    /// Spots whose `email` field is exactly `email`.
    async fn find_by_email(&self, email: &OwnerEmail) -> StoreResult<Vec<TouristSpot>>;

    /// Persist a new document under a store-generated id.
    async fn insert(&self, doc: Document) -> StoreResult<InsertAck>;

    /// Partial merge of `patch` into the spot with `id`.
    async fn update(&self, id: SpotId, patch: Document) -> StoreResult<UpdateAck>;

    async fn delete(&self, id: SpotId) -> StoreResult<DeleteAck>;
}
