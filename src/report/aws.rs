//! CodePipeline-backed reporter.
//!
//! Only compiled with the `aws` feature.

use async_trait::async_trait;
use aws_sdk_codepipeline::types::{FailureDetails, FailureType};

use crate::error::{RelayError, RelayResult};
use crate::report::JobReporter;

/// Reporter that signals job results to AWS CodePipeline.
pub struct CodePipelineReporter {
    client: aws_sdk_codepipeline::Client,
}

impl CodePipelineReporter {
    /// Build a reporter from the ambient AWS configuration.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self {
            client: aws_sdk_codepipeline::Client::new(&config),
        }
    }

    pub fn new(client: aws_sdk_codepipeline::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JobReporter for CodePipelineReporter {
    async fn success(&self, job_id: &str) -> RelayResult<()> {
        self.client
            .put_job_success_result()
            .job_id(job_id)
            .send()
            .await
            .map_err(|err| RelayError::Report {
                message: err.into_service_error().to_string(),
            })?;
        Ok(())
    }

    async fn failure(
        &self,
        job_id: &str,
        message: &str,
        external_execution_id: &str,
    ) -> RelayResult<()> {
        let details = FailureDetails::builder()
            .r#type(FailureType::JobFailed)
            .message(message)
            .external_execution_id(external_execution_id)
            .build()
            .map_err(|err| RelayError::Report {
                message: err.to_string(),
            })?;

        self.client
            .put_job_failure_result()
            .job_id(job_id)
            .failure_details(details)
            .send()
            .await
            .map_err(|err| RelayError::Report {
                message: err.into_service_error().to_string(),
            })?;
        Ok(())
    }
}
