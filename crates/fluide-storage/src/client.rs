//! S3 client implementation.

use std::path::Path;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::{Builder, Region};
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use aws_sdk_s3::Client;
use tracing::{debug, info};

use crate::backend::{BucketInfo, ObjectStore};
use crate::config::StorageConfig;
use crate::error::{StorageError, StorageResult};

/// Region in which S3 rejects an explicit location constraint.
const DEFAULT_REGION: &str = "us-east-1";

/// S3-compatible object storage client.
#[derive(Clone)]
pub struct S3Client {
    client: Client,
    region: String,
}

impl S3Client {
    /// Create a new S3 client from configuration.
    pub async fn new(config: StorageConfig) -> StorageResult<Self> {
        if config.region.trim().is_empty() {
            return Err(StorageError::config_error("AWS_DEFAULT_REGION is empty"));
        }

        let region = Region::new(config.region.clone());

        let client = match config.static_credentials() {
            Some((access_key_id, secret_access_key)) => {
                let credentials =
                    Credentials::new(access_key_id, secret_access_key, None, None, "fluide");

                let mut builder = Builder::new()
                    .behavior_version(BehaviorVersion::latest())
                    .region(region)
                    .credentials_provider(credentials)
                    .force_path_style(config.force_path_style);
                if let Some(endpoint_url) = &config.endpoint_url {
                    builder = builder.endpoint_url(endpoint_url);
                }

                Client::from_conf(builder.build())
            }
            None => {
                let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region);
                if let Some(endpoint_url) = &config.endpoint_url {
                    loader = loader.endpoint_url(endpoint_url);
                }
                let shared = loader.load().await;

                let sdk_config = Builder::from(&shared)
                    .force_path_style(config.force_path_style)
                    .build();
                Client::from_conf(sdk_config)
            }
        };

        Ok(Self {
            client,
            region: config.region,
        })
    }

    /// Region new buckets are created in.
    pub fn region(&self) -> &str {
        &self.region
    }
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn list_buckets(&self) -> StorageResult<Vec<BucketInfo>> {
        debug!("Listing buckets");

        let response = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(|e| StorageError::list_failed(sdk_message(&e)))?;

        Ok(response
            .buckets()
            .iter()
            .map(|bucket| BucketInfo {
                name: bucket.name().map(str::to_string),
            })
            .collect())
    }

    async fn create_bucket(&self, bucket: &str) -> StorageResult<Option<String>> {
        debug!("Creating bucket {}", bucket);

        let mut request = self.client.create_bucket().bucket(bucket);
        if self.region != DEFAULT_REGION {
            let configuration = CreateBucketConfiguration::builder()
                .location_constraint(BucketLocationConstraint::from(self.region.as_str()))
                .build();
            request = request.create_bucket_configuration(configuration);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StorageError::create_bucket_failed(sdk_message(&e)))?;

        info!("Created bucket {}", bucket);
        Ok(response.location().map(str::to_string))
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        source: &Path,
        content_type: &str,
    ) -> StorageResult<()> {
        debug!("Uploading {} to {}/{}", source.display(), bucket, key);

        let body = ByteStream::from_path(source)
            .await
            .map_err(|e| StorageError::upload_failed(e.to_string()))?;

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::upload_failed(sdk_message(&e)))?;

        Ok(())
    }
}

/// Human-readable text of an SDK failure.
///
/// Service errors carry the backend's own message; transport and
/// construction failures fall back to the full error chain.
fn sdk_message<E, R>(err: &SdkError<E, R>) -> String
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    err.as_service_error()
        .and_then(|e| e.message())
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(err).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_with_static_credentials() {
        let config = StorageConfig {
            region: "eu-west-3".to_string(),
            endpoint_url: Some("http://localhost:9000".to_string()),
            access_key_id: Some("minio".to_string()),
            secret_access_key: Some("minio-secret".to_string()),
            force_path_style: true,
        };

        let client = S3Client::new(config).await.unwrap();
        assert_eq!(client.region(), "eu-west-3");
    }

    #[tokio::test]
    async fn test_new_rejects_empty_region() {
        let config = StorageConfig {
            region: " ".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            S3Client::new(config).await,
            Err(StorageError::ConfigError(_))
        ));
    }
}
