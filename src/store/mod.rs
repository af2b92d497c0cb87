//! Object store abstraction.
//!
//! The core never talks to a concrete store directly; it goes through the
//! [`ObjectStore`] trait so tests can substitute an in-memory store without
//! intercepting globals. Implementations are stateless handles, safe to
//! reuse across invocations.

use async_trait::async_trait;

use crate::error::RelayResult;

mod memory;
pub use memory::MemoryStore;

#[cfg(feature = "aws")]
mod aws;
#[cfg(feature = "aws")]
pub use aws::S3Store;

/// Read/write access to an object store.
///
/// `get` fails with [`RelayError::NotFound`](crate::RelayError::NotFound)
/// when the object is absent; `put` failures surface as
/// [`RelayError::WriteFailed`](crate::RelayError::WriteFailed). No listing,
/// versioning, or conditional-write semantics are required.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch the full body of the object at `bucket`/`key`.
    async fn get(&self, bucket: &str, key: &str) -> RelayResult<Vec<u8>>;

    /// Write `body` as the object at `bucket`/`key`.
    async fn put(&self, bucket: &str, key: &str, body: Vec<u8>) -> RelayResult<()>;
}
