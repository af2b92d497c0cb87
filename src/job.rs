//! Pipeline job data model.
//!
//! One `Job` is the unit of work handed to a single invocation. It carries
//! the input artifacts (name plus object-store location of a zipped bundle)
//! and an action configuration whose user-parameters string holds the
//! JSON-encoded put configuration. The job is owned by the entry point and
//! borrowed by the core for the duration of the invocation; nothing is
//! persisted across invocations.

use serde::Deserialize;

/// One unit of pipeline work.
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    /// Identifier used to report success or failure back to the pipeline.
    #[serde(rename = "jobId")]
    pub job_id: String,
    /// Artifact list and action configuration.
    pub data: JobData,
}

/// The job payload: action configuration and input artifacts.
#[derive(Debug, Clone, Deserialize)]
pub struct JobData {
    #[serde(rename = "actionConfiguration")]
    pub action_configuration: ActionConfiguration,
    #[serde(rename = "inputArtifacts", default)]
    pub input_artifacts: Vec<InputArtifact>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActionConfiguration {
    pub configuration: ActionConfigurationMap,
}

/// The raw action configuration values. `user_parameters` is itself a
/// JSON-encoded string, decoded separately by the configuration reader.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionConfigurationMap {
    #[serde(rename = "UserParameters", default)]
    pub user_parameters: String,
}

/// A named, zipped bundle of files supplied to the job.
#[derive(Debug, Clone, Deserialize)]
pub struct InputArtifact {
    pub name: String,
    pub location: ArtifactLocation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactLocation {
    #[serde(rename = "s3Location")]
    pub s3_location: S3Location,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Location {
    #[serde(rename = "bucketName")]
    pub bucket_name: String,
    #[serde(rename = "objectKey")]
    pub object_key: String,
}

/// An object-store location: bucket plus key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLocation {
    pub bucket: String,
    pub key: String,
}

impl From<&S3Location> for StoreLocation {
    fn from(loc: &S3Location) -> Self {
        Self {
            bucket: loc.bucket_name.clone(),
            key: loc.object_key.clone(),
        }
    }
}
