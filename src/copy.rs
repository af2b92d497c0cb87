//! Artifact resource copying.
//!
//! Takes a `<artifact>::<file>` reference, pulls the file out of the named
//! input artifact's zip archive, and writes the exact bytes to a destination
//! location in the object store. No read-back verification.

use tracing::debug;

use crate::archive::fetch_member;
use crate::artifact::{input_artifact_location, ArtifactRef};
use crate::error::{RelayError, RelayResult};
use crate::job::Job;
use crate::store::ObjectStore;

/// Copy the file referenced by `artifact_path` to `(dest_bucket, dest_key)`.
pub async fn copy_artifact_resource(
    store: &dyn ObjectStore,
    artifact_path: &str,
    dest_bucket: &str,
    dest_key: &str,
    job: &Job,
) -> RelayResult<()> {
    let reference = ArtifactRef::parse(artifact_path)?;
    let location = input_artifact_location(&reference.artifact_name, job).ok_or_else(|| {
        RelayError::UnresolvedArtifact {
            name: reference.artifact_name.clone(),
        }
    })?;

    let bytes = fetch_member(store, &location, &reference.file_name).await?;
    debug!(
        source = artifact_path,
        bucket = dest_bucket,
        key = dest_key,
        size = bytes.len(),
        "writing artifact resource to destination"
    );
    store.put(dest_bucket, dest_key, bytes).await
}
