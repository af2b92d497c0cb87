//! S3-backed object store.
//!
//! Only compiled with the `aws` feature. Uses the standard AWS credential
//! chain; region and profile come from the environment.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;

use crate::error::{RelayError, RelayResult};
use crate::store::ObjectStore;

/// Object store backed by Amazon S3.
pub struct S3Store {
    client: aws_sdk_s3::Client,
}

impl S3Store {
    /// Build a store from the ambient AWS configuration.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self {
            client: aws_sdk_s3::Client::new(&config),
        }
    }

    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn get(&self, bucket: &str, key: &str) -> RelayResult<Vec<u8>> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| {
                let service = err.into_service_error();
                if service.is_no_such_key() {
                    RelayError::NotFound {
                        bucket: bucket.to_string(),
                        key: key.to_string(),
                    }
                } else {
                    RelayError::Store {
                        message: service.to_string(),
                    }
                }
            })?;

        let body = output
            .body
            .collect()
            .await
            .map_err(|err| RelayError::Store {
                message: err.to_string(),
            })?;
        Ok(body.into_bytes().to_vec())
    }

    async fn put(&self, bucket: &str, key: &str, body: Vec<u8>) -> RelayResult<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|err| RelayError::WriteFailed {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: err.into_service_error().to_string(),
            })?;
        Ok(())
    }
}
