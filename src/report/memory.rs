//! Recording reporter for tests.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::RelayResult;
use crate::report::JobReporter;

/// The reported outcome of one job, as seen by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportedOutcome {
    Success,
    Failure {
        message: String,
        external_execution_id: String,
    },
}

/// Reporter that records outcomes in memory instead of calling a pipeline.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    outcomes: DashMap<String, Vec<ReportedOutcome>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All outcomes reported for `job_id`, in order.
    pub fn outcomes(&self, job_id: &str) -> Vec<ReportedOutcome> {
        self.outcomes
            .get(job_id)
            .map(|entry| entry.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl JobReporter for RecordingReporter {
    async fn success(&self, job_id: &str) -> RelayResult<()> {
        self.outcomes
            .entry(job_id.to_string())
            .or_default()
            .push(ReportedOutcome::Success);
        Ok(())
    }

    async fn failure(
        &self,
        job_id: &str,
        message: &str,
        external_execution_id: &str,
    ) -> RelayResult<()> {
        self.outcomes
            .entry(job_id.to_string())
            .or_default()
            .push(ReportedOutcome::Failure {
                message: message.to_string(),
                external_execution_id: external_execution_id.to_string(),
            });
        Ok(())
    }
}
