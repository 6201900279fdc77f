//! Album gateway: list, create and bulk upload.
//!
//! Backend failures never leave this module as errors. Listing degrades to an
//! empty list, creations and uploads become `success: false` records. Only a
//! request that cannot start at all (bad album name, unreadable folder) is
//! returned as an error.

use std::path::Path;
use std::sync::Arc;

use fluide_models::album::encode;
use fluide_models::{Album, CreateAlbumResult, UploadDescriptor, UploadResult, DELIMITER};
use futures::future::join_all;

use crate::backend::ObjectStore;
use crate::error::StorageResult;
use crate::files::build_upload_descriptors;
use crate::logging::Log;
use crate::metrics;

/// Handles the gateway needs, built once and passed in.
#[derive(Clone)]
pub struct StorageContext {
    pub store: Arc<dyn ObjectStore>,
    pub log: Arc<dyn Log>,
}

impl StorageContext {
    pub fn new(store: Arc<dyn ObjectStore>, log: Arc<dyn Log>) -> Self {
        Self { store, log }
    }
}

/// Album operations over an object store.
#[derive(Clone)]
pub struct AlbumStore {
    ctx: StorageContext,
}

impl AlbumStore {
    pub fn new(ctx: StorageContext) -> Self {
        Self { ctx }
    }

    /// List every album, decoding bucket names.
    ///
    /// A failed listing is logged and reported as no albums.
    pub async fn list_albums(&self) -> Vec<Album> {
        match self.ctx.store.list_buckets().await {
            Ok(buckets) => buckets
                .iter()
                .map(|bucket| Album::from_bucket_id(bucket.name.as_deref()))
                .collect(),
            Err(e) => {
                self.ctx
                    .log
                    .error(&format!("Failed to list albums: {}", e.backend_message()));
                metrics::record_list_failure();
                Vec::new()
            }
        }
    }

    /// Create an empty album for `customer`.
    pub async fn create_album(&self, customer: &str, name: &str) -> CreateAlbumResult {
        let bucket_id = match encode(customer, name) {
            Ok(bucket_id) => bucket_id,
            Err(e) => {
                self.ctx.log.warn(&format!("Rejected album name: {}", e));
                metrics::record_album_created(false);
                return CreateAlbumResult::failed(
                    format!("{}{}{}", customer, DELIMITER, name),
                    e.to_string(),
                );
            }
        };

        let result = match self.ctx.store.create_bucket(&bucket_id).await {
            Ok(location) => {
                self.ctx.log.info(&format!(
                    "Created album {} at {}",
                    bucket_id,
                    location.as_deref().unwrap_or("default location")
                ));
                CreateAlbumResult::created(bucket_id)
            }
            Err(e) => {
                let message = e.backend_message();
                self.ctx
                    .log
                    .error(&format!("Failed to create album {}: {}", bucket_id, message));
                CreateAlbumResult::failed(bucket_id, message)
            }
        };

        metrics::record_album_created(result.success);
        result
    }

    /// Upload every regular file of `dir` into the album.
    ///
    /// All puts are started together and awaited together. A failed put is
    /// recorded in its own result and never stops its siblings; objects that
    /// made it stay in the bucket. The results follow the folder's file order.
    pub async fn upload_folder(
        &self,
        customer: &str,
        name: &str,
        dir: impl AsRef<Path>,
    ) -> StorageResult<Vec<UploadResult>> {
        let dir = dir.as_ref();
        let bucket_id = encode(customer, name)?;

        let descriptors = match build_upload_descriptors(dir).await {
            Ok(descriptors) => descriptors,
            Err(e) => {
                self.ctx
                    .log
                    .error(&format!("Cannot read folder {}: {}", dir.display(), e));
                return Err(e);
            }
        };

        self.ctx.log.info(&format!(
            "Uploading {} files from {} to {}",
            descriptors.len(),
            dir.display(),
            bucket_id
        ));

        let results = join_all(
            descriptors
                .iter()
                .map(|descriptor| self.upload_one(&bucket_id, descriptor)),
        )
        .await;

        let failed = results.iter().filter(|r| !r.success).count();
        if failed > 0 {
            self.ctx.log.warn(&format!(
                "{} of {} uploads to {} failed",
                failed,
                results.len(),
                bucket_id
            ));
        }

        Ok(results)
    }

    async fn upload_one(&self, bucket_id: &str, descriptor: &UploadDescriptor) -> UploadResult {
        let outcome = self
            .ctx
            .store
            .put_object(
                bucket_id,
                &descriptor.key,
                &descriptor.source_path,
                descriptor.content_type(),
            )
            .await;

        let result = match outcome {
            Ok(()) => {
                self.ctx.log.info(&format!(
                    "Successfully uploaded object: {}/{}",
                    bucket_id, descriptor.key
                ));
                UploadResult::uploaded(bucket_id, &descriptor.key)
            }
            Err(e) => {
                let message = e.backend_message();
                self.ctx.log.error(&format!(
                    "Failed to upload {}/{}: {}",
                    bucket_id, descriptor.key, message
                ));
                UploadResult::failed(bucket_id, &descriptor.key, message)
            }
        };

        metrics::record_upload(result.success);
        result
    }
}
