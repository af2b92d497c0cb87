//! Job configuration reader.
//!
//! The pipeline passes this worker its parameters as a JSON string inside
//! the job's action configuration. Decoding it yields the three values that
//! drive an invocation: which artifact file to copy, and where to put it.

use serde::Deserialize;

use crate::error::{RelayError, RelayResult};
use crate::job::Job;

/// Put parameters decoded from the job's user-parameters string.
///
/// Field names match the wire casing exactly.
#[derive(Debug, Clone, Deserialize)]
pub struct PutConfiguration {
    /// Source reference in the `<artifact>::<file>` grammar.
    #[serde(rename = "ObjectPath")]
    pub object_path: String,
    /// Destination bucket.
    #[serde(rename = "BucketName")]
    pub bucket_name: String,
    /// Destination key; may contain one `${...}` placeholder.
    #[serde(rename = "ObjectKey")]
    pub object_key: String,
}

/// Decode the job's user-parameters string into a [`PutConfiguration`].
pub fn put_configuration(job: &Job) -> RelayResult<PutConfiguration> {
    let raw = &job.data.action_configuration.configuration.user_parameters;
    serde_json::from_str(raw).map_err(|err| RelayError::InvalidConfiguration {
        reason: err.to_string(),
    })
}
