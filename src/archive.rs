//! Archive file fetching.
//!
//! Input artifacts are zipped bundles in the object store. This module is
//! the single fetch-and-extract bottleneck shared by placeholder resolution
//! and resource copying: fetch the whole archive object, open it as a zip,
//! and pull out one member's decompressed bytes. No streaming; the archive
//! and the member are both buffered in memory.

use std::io::{Cursor, Read};

use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{RelayError, RelayResult};
use crate::job::StoreLocation;
use crate::store::ObjectStore;

/// Fetch the archive at `location` and return the decompressed bytes of the
/// member named exactly `file_name`.
pub async fn fetch_member(
    store: &dyn ObjectStore,
    location: &StoreLocation,
    file_name: &str,
) -> RelayResult<Vec<u8>> {
    debug!(
        bucket = %location.bucket,
        key = %location.key,
        file = %file_name,
        "fetching artifact archive member"
    );
    let archive_bytes = store.get(&location.bucket, &location.key).await?;
    extract_member(&archive_bytes, file_name)
}

fn extract_member(archive_bytes: &[u8], file_name: &str) -> RelayResult<Vec<u8>> {
    let mut archive =
        ZipArchive::new(Cursor::new(archive_bytes)).map_err(|err| RelayError::BadArchive {
            message: err.to_string(),
        })?;

    let mut member = match archive.by_name(file_name) {
        Ok(member) => member,
        Err(ZipError::FileNotFound) => {
            return Err(RelayError::MemberNotFound {
                file: file_name.to_string(),
            })
        },
        Err(err) => {
            return Err(RelayError::BadArchive {
                message: err.to_string(),
            })
        },
    };

    let mut bytes = Vec::with_capacity(member.size() as usize);
    member
        .read_to_end(&mut bytes)
        .map_err(|err| RelayError::BadArchive {
            message: err.to_string(),
        })?;
    Ok(bytes)
}
