use crate::errors::{Result, SyncError};
use crate::interfaces::ObjectStore;
use crate::storage::models::{RemoteObject, S3Config};
use crate::utils::log_utils;
use aws_config::retry::RetryConfig;
use aws_credential_types::Credentials;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use std::path::Path;

/// Client for one bucket on an S3-compatible endpoint
pub struct S3StorageClient {
    bucket_name: String,
    client: Client,
    runtime: tokio::runtime::Runtime,
    verbose: u8,
}

/// SDK configuration for a custom endpoint with static credentials.
///
/// Path-style addressing keeps object URLs in the `<endpoint>/<bucket>/<key>`
/// shape that the confirmation output advertises.
pub fn sdk_config(config: &S3Config) -> aws_sdk_s3::Config {
    let credentials = Credentials::new(
        config.credentials.access_key.clone(),
        config.credentials.secret_key.clone(),
        None, // No session token
        None, // No expiry
        "GalleryStaticCredentials",
    );

    aws_sdk_s3::Config::builder()
        .region(Region::new(config.region.clone()))
        .endpoint_url(config.endpoint.clone())
        .credentials_provider(credentials)
        .force_path_style(true)
        .retry_config(RetryConfig::standard().with_max_attempts(3))
        .behavior_version(BehaviorVersion::latest())
        .build()
}

impl S3StorageClient {
    /// Create a new client from the provided config. No request is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn new(config: S3Config, verbose: u8) -> Result<Self> {
        log_utils::debug(
            &format!(
                "Creating S3-compatible client: endpoint {}, region {}, bucket {}, key id {}",
                config.endpoint,
                config.region,
                config.bucket,
                log_utils::mask(&config.credentials.access_key)
            ),
            verbose,
        );

        let client = Client::from_conf(sdk_config(&config));
        Self::from_client(client, config.bucket, verbose)
    }

    /// Wrap an already configured SDK client
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn from_client(client: Client, bucket: String, verbose: u8) -> Result<Self> {
        // Reused for all operations
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| SyncError::Runtime(format!("Failed to create runtime: {e}")))?;

        Ok(Self {
            bucket_name: bucket,
            client,
            runtime,
            verbose,
        })
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }
}

impl ObjectStore for S3StorageClient {
    fn list_objects(&self) -> Result<Vec<RemoteObject>> {
        self.runtime.block_on(async {
            let mut objects = Vec::new();
            let mut continuation: Option<String> = None;

            loop {
                let response = self
                    .client
                    .list_objects_v2()
                    .bucket(&self.bucket_name)
                    .set_continuation_token(continuation.take())
                    .send()
                    .await
                    .map_err(|e| {
                        SyncError::Storage(format!(
                            "Failed to list bucket '{}': {}",
                            self.bucket_name,
                            DisplayErrorContext(&e)
                        ))
                    })?;

                for object in response.contents() {
                    if let Some(key) = object.key() {
                        let size = u64::try_from(object.size().unwrap_or(0)).unwrap_or(0);
                        objects.push(RemoteObject::new(
                            key,
                            size,
                            object.e_tag().unwrap_or_default(),
                        ));
                    }
                }

                match response.next_continuation_token() {
                    Some(token) if response.is_truncated().unwrap_or(false) => {
                        continuation = Some(token.to_string());
                    }
                    _ => break,
                }
            }

            log_utils::debug(
                &format!(
                    "Found {} objects in bucket '{}'",
                    objects.len(),
                    self.bucket_name
                ),
                self.verbose,
            );
            objects.sort_by(|a, b| a.key.cmp(&b.key));
            Ok(objects)
        })
    }

    fn put_public_object(&self, key: &str, local_path: &Path, content_type: &str) -> Result<()> {
        self.runtime.block_on(async {
            // Streams from disk rather than loading the file into memory
            let body = ByteStream::from_path(local_path).await.map_err(|e| {
                SyncError::Storage(format!(
                    "Failed to read '{}' for upload: {}",
                    local_path.display(),
                    e
                ))
            })?;

            self.client
                .put_object()
                .bucket(&self.bucket_name)
                .key(key)
                .acl(ObjectCannedAcl::PublicRead)
                .content_type(content_type)
                .body(body)
                .send()
                .await
                .map_err(|e| {
                    SyncError::Storage(format!(
                        "Failed to upload '{}': {}",
                        key,
                        DisplayErrorContext(&e)
                    ))
                })?;
            Ok(())
        })
    }

    fn delete_object(&self, key: &str) -> Result<()> {
        self.runtime.block_on(async {
            self.client
                .delete_object()
                .bucket(&self.bucket_name)
                .key(key)
                .send()
                .await
                .map_err(|e| {
                    SyncError::Storage(format!(
                        "Failed to delete '{}': {}",
                        key,
                        DisplayErrorContext(&e)
                    ))
                })?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secrets::Credentials as BucketCredentials;

    fn config() -> S3Config {
        S3Config {
            endpoint: "https://s3.example.net".to_string(),
            region: "hel1".to_string(),
            bucket: "photos".to_string(),
            credentials: BucketCredentials::new("AKIA1234", "secret"),
        }
    }

    #[test]
    fn sdk_config_uses_custom_endpoint_and_region() {
        let sdk = sdk_config(&config());
        assert_eq!(sdk.region().map(|r| r.as_ref()), Some("hel1"));
    }

    #[test]
    fn client_construction_sends_nothing() {
        let client = S3StorageClient::new(config(), 0).unwrap();
        assert_eq!(client.bucket_name(), "photos");
    }
}
