//! In-process spot collection
//!
//! Keeps spots in insertion order behind a tokio `RwLock`. Used by the
//! router tests and by `tripnest serve --memory`.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{SpotStore, StoreResult};
use crate::models::{
    merge_fields, strip_id, DeleteAck, Document, InsertAck, OwnerEmail, SpotId, TouristSpot,
    UpdateAck,
};

/// Spot collection held in memory
#[derive(Default)]
pub struct MemorySpotStore {
    spots: RwLock<Vec<TouristSpot>>,
}

impl MemorySpotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored spots
    pub async fn len(&self) -> usize {
        self.spots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.spots.read().await.is_empty()
    }
}

#[async_trait]
impl SpotStore for MemorySpotStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn find_all(&self) -> StoreResult<Vec<TouristSpot>> {
        Ok(self.spots.read().await.clone())
    }

    async fn find_by_id(&self, id: SpotId) -> StoreResult<Option<TouristSpot>> {
        let spots = self.spots.read().await;
        Ok(spots.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_email(&self, email: &OwnerEmail) -> StoreResult<Vec<TouristSpot>> {
        let spots = self.spots.read().await;
        Ok(spots
            .iter()
            .filter(|s| s.email() == Some(email.as_str()))
            .cloned()
            .collect())
    }

    async fn insert(&self, mut doc: Document) -> StoreResult<InsertAck> {
        strip_id(&mut doc);
        let id = SpotId::new();
        self.spots.write().await.push(TouristSpot::new(id, doc));
        Ok(InsertAck::new(id))
    }

    async fn update(&self, id: SpotId, patch: Document) -> StoreResult<UpdateAck> {
        let mut spots = self.spots.write().await;
        let ack = match spots.iter_mut().find(|s| s.id == id) {
            Some(spot) => {
                let modified = merge_fields(&mut spot.fields, patch);
                UpdateAck::new(1, u64::from(modified))
            }
            None => UpdateAck::new(0, 0),
        };
        Ok(ack)
    }

    async fn delete(&self, id: SpotId) -> StoreResult<DeleteAck> {
        let mut spots = self.spots.write().await;
        let before = spots.len();
        spots.retain(|s| s.id != id);
        Ok(DeleteAck::new((before - spots.len()) as u64))
    }
}
