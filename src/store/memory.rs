//! In-memory object store.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::{RelayError, RelayResult};
use crate::store::ObjectStore;

/// Object store backed by a process-local map.
///
/// Used by the test suite and for local dry runs; it has no durability and
/// no auth. Keys are `(bucket, key)` pairs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: DashMap<(String, String), Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an object, bypassing the trait. Handy in test setup.
    pub fn insert(&self, bucket: &str, key: &str, body: Vec<u8>) {
        self.objects
            .insert((bucket.to_string(), key.to_string()), body);
    }

    /// Read an object back without going through the trait.
    pub fn object(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.objects
            .get(&(bucket.to_string(), key.to_string()))
            .map(|entry| entry.clone())
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get(&self, bucket: &str, key: &str) -> RelayResult<Vec<u8>> {
        self.objects
            .get(&(bucket.to_string(), key.to_string()))
            .map(|entry| entry.clone())
            .ok_or_else(|| RelayError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }

    async fn put(&self, bucket: &str, key: &str, body: Vec<u8>) -> RelayResult<()> {
        self.insert(bucket, key, body);
        Ok(())
    }
}
