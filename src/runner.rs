//! Per-job orchestration.
//!
//! One invocation: decode the put configuration, resolve the destination
//! key's placeholder, copy the referenced artifact file to the destination,
//! then report the outcome back to the pipeline. Fail-fast; any core failure
//! skips the remaining steps and is reported once with its original message.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::put_configuration;
use crate::copy::copy_artifact_resource;
use crate::error::{RelayError, RelayResult};
use crate::job::Job;
use crate::report::JobReporter;
use crate::resolve::resolve_object_key;
use crate::store::ObjectStore;

/// How one job ended, as reported to the pipeline.
#[derive(Debug)]
pub enum JobOutcome {
    Succeeded,
    /// The job failed and the failure was reported; the originating error
    /// is preserved for the caller's logs.
    Failed(RelayError),
}

/// Runs jobs against injected store and reporter handles.
///
/// The handles are stateless and safe to reuse across invocations; the
/// runner holds no per-job state.
pub struct JobRunner {
    store: Arc<dyn ObjectStore>,
    reporter: Arc<dyn JobReporter>,
}

impl JobRunner {
    pub fn new(store: Arc<dyn ObjectStore>, reporter: Arc<dyn JobReporter>) -> Self {
        Self { store, reporter }
    }

    /// Run one job and report its outcome.
    ///
    /// A job failure is a normal [`JobOutcome::Failed`] return — it has been
    /// reported to the pipeline. Only a failure of the reporting call itself
    /// surfaces as `Err`, for the invoking runtime to handle.
    pub async fn run(&self, job: &Job, trace_id: &str) -> RelayResult<JobOutcome> {
        match self.execute(job).await {
            Ok(()) => {
                info!(job_id = %job.job_id, "job succeeded");
                self.reporter.success(&job.job_id).await?;
                Ok(JobOutcome::Succeeded)
            },
            Err(err) => {
                warn!(job_id = %job.job_id, error = %err, "job failed");
                self.reporter
                    .failure(&job.job_id, &err.to_string(), trace_id)
                    .await?;
                Ok(JobOutcome::Failed(err))
            },
        }
    }

    async fn execute(&self, job: &Job) -> RelayResult<()> {
        let config = put_configuration(job)?;
        let dest_key = resolve_object_key(self.store.as_ref(), &config.object_key, job).await?;
        debug!(
            source = %config.object_path,
            bucket = %config.bucket_name,
            key = %dest_key,
            "copying artifact resource"
        );
        copy_artifact_resource(
            self.store.as_ref(),
            &config.object_path,
            &config.bucket_name,
            &dest_key,
            job,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RecordingReporter;
    use crate::store::MemoryStore;
    use std::io::{Cursor, Write};

    fn zip_with(files: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default();
        for (name, body) in files {
            writer.start_file(*name, options).unwrap();
            writer.write_all(body).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    fn job(user_parameters: &str) -> Job {
        serde_json::from_value(serde_json::json!({
            "jobId": "j-1",
            "data": {
                "actionConfiguration": {
                    "configuration": { "UserParameters": user_parameters }
                },
                "inputArtifacts": [{
                    "name": "Build",
                    "location": {
                        "s3Location": { "bucketName": "artifacts", "objectKey": "build.zip" }
                    }
                }]
            }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_happy_path_copies_and_reports_success() {
        let store = Arc::new(MemoryStore::new());
        store.insert(
            "artifacts",
            "build.zip",
            zip_with(&[
                ("manifest.json", br#"{"version":"3"}"#),
                ("app.yaml", b"kind: Deployment"),
            ]),
        );
        let reporter = Arc::new(RecordingReporter::new());
        let runner = JobRunner::new(store.clone(), reporter.clone());

        let outcome = runner
            .run(
                &job(r#"{"ObjectPath":"Build::app.yaml","BucketName":"deploy","ObjectKey":"app-${Build::manifest.json::version}.yaml"}"#),
                "trace-1",
            )
            .await
            .unwrap();

        assert!(matches!(outcome, JobOutcome::Succeeded));
        assert_eq!(
            store.object("deploy", "app-3.yaml").unwrap(),
            b"kind: Deployment".to_vec()
        );
        let outcomes = reporter.outcomes("j-1");
        assert_eq!(outcomes.len(), 1);
    }

    #[tokio::test]
    async fn test_core_failure_is_reported_once_with_message() {
        let store = Arc::new(MemoryStore::new());
        let reporter = Arc::new(RecordingReporter::new());
        let runner = JobRunner::new(store, reporter.clone());

        let outcome = runner
            .run(
                &job(r#"{"ObjectPath":"Missing::f","BucketName":"b","ObjectKey":"k"}"#),
                "trace-2",
            )
            .await
            .unwrap();

        let JobOutcome::Failed(err) = outcome else {
            panic!("expected a failed outcome");
        };
        assert!(matches!(err, RelayError::UnresolvedArtifact { .. }));

        let outcomes = reporter.outcomes("j-1");
        assert_eq!(outcomes.len(), 1);
        match &outcomes[0] {
            crate::report::ReportedOutcome::Failure {
                message,
                external_execution_id,
            } => {
                assert!(message.contains("Missing"));
                assert_eq!(external_execution_id, "trace-2");
            },
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_bad_configuration_fails_before_any_store_access() {
        let store = Arc::new(MemoryStore::new());
        let reporter = Arc::new(RecordingReporter::new());
        let runner = JobRunner::new(store, reporter.clone());

        let outcome = runner.run(&job("{broken"), "trace-3").await.unwrap();
        let JobOutcome::Failed(err) = outcome else {
            panic!("expected a failed outcome");
        };
        assert!(matches!(err, RelayError::InvalidConfiguration { .. }));
    }
}
