//! Artifact lookup and reference parsing.
//!
//! An artifact reference names a file inside a job's zipped input artifact
//! as `<artifact>::<file>`. The artifact name cannot contain `:`; the file
//! name is everything after the first `::` and may itself contain `:`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{RelayError, RelayResult};
use crate::job::{Job, StoreLocation};

static ARTIFACT_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:]+)::(.+)$").expect("artifact reference pattern"));

/// A parsed `<artifact>::<file>` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRef {
    pub artifact_name: String,
    pub file_name: String,
}

impl ArtifactRef {
    /// Parse an `<artifact>::<file>` string.
    pub fn parse(reference: &str) -> RelayResult<Self> {
        let captures =
            ARTIFACT_REF
                .captures(reference)
                .ok_or_else(|| RelayError::InvalidReference {
                    reference: reference.to_string(),
                })?;
        Ok(Self {
            artifact_name: captures[1].to_string(),
            file_name: captures[2].to_string(),
        })
    }
}

/// Look up the store location of the input artifact with the given name.
///
/// Exact, case-sensitive match. Absence is not an error here; callers decide
/// whether a missing artifact is fatal.
pub fn input_artifact_location(name: &str, job: &Job) -> Option<StoreLocation> {
    job.data
        .input_artifacts
        .iter()
        .find(|artifact| artifact.name == name)
        .map(|artifact| StoreLocation::from(&artifact.location.s3_location))
}
