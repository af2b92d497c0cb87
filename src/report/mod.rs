//! Job result reporting.
//!
//! After an invocation, the outcome goes back to the orchestrating pipeline
//! keyed by job id: bare success, or failure with a human-readable message
//! and an execution-trace identifier. Reporting itself can fail; that
//! failure is not handled here and propagates to the invoking runtime.

use async_trait::async_trait;

use crate::error::RelayResult;

mod memory;
pub use memory::{RecordingReporter, ReportedOutcome};

#[cfg(feature = "aws")]
mod aws;
#[cfg(feature = "aws")]
pub use aws::CodePipelineReporter;

/// Channel for reporting a job's outcome to the pipeline.
#[async_trait]
pub trait JobReporter: Send + Sync {
    /// Signal that the job completed.
    async fn success(&self, job_id: &str) -> RelayResult<()>;

    /// Signal that the job failed, with the originating message and the
    /// identifier of the execution trace that produced it.
    async fn failure(
        &self,
        job_id: &str,
        message: &str,
        external_execution_id: &str,
    ) -> RelayResult<()>;
}
