//! # artifact-relay
//!
//! A single-invocation pipeline worker that resolves artifact references and
//! relocates files between zipped build artifacts stored in an object store.
//!
//! One invocation, triggered by a pipeline job event:
//!
//! 1. decodes the job's put configuration (source reference, destination
//!    bucket and key) from its action configuration;
//! 2. resolves an optional `${Artifact::file[::jsonKey]}` placeholder in the
//!    destination key against the job's zipped input artifacts;
//! 3. copies the referenced file out of its artifact archive to the
//!    destination location, byte for byte;
//! 4. reports success or failure back to the orchestrating pipeline.
//!
//! The object store and the result-reporting channel are injected through
//! the [`ObjectStore`] and [`JobReporter`] traits; with the `aws` feature
//! enabled, S3 and CodePipeline implementations are available.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use artifact_relay::{Job, JobRunner, MemoryStore, RecordingReporter};
//!
//! # async fn example(event: &str) -> artifact_relay::RelayResult<()> {
//! let job: Job = serde_json::from_str(event).unwrap();
//! let runner = JobRunner::new(
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(RecordingReporter::new()),
//! );
//! runner.run(&job, "execution-trace-id").await?;
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod artifact;
pub mod config;
pub mod copy;
pub mod error;
pub mod job;
pub mod report;
pub mod resolve;
pub mod runner;
pub mod store;

pub use archive::fetch_member;
pub use artifact::{input_artifact_location, ArtifactRef};
pub use config::{put_configuration, PutConfiguration};
pub use copy::copy_artifact_resource;
pub use error::{RelayError, RelayResult};
pub use job::{Job, StoreLocation};
pub use report::{JobReporter, RecordingReporter};
pub use resolve::resolve_object_key;
pub use runner::{JobOutcome, JobRunner};
pub use store::{MemoryStore, ObjectStore};

#[cfg(feature = "aws")]
pub use report::CodePipelineReporter;
#[cfg(feature = "aws")]
pub use store::S3Store;
