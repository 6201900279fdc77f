//! Object-store backend seam.

use std::path::Path;

use async_trait::async_trait;

use crate::error::StorageResult;

/// A bucket as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketInfo {
    /// Bucket name; some backends omit it.
    pub name: Option<String>,
}

/// The three backend operations the album gateway needs.
///
/// Implementations report failures as [`StorageError::ListFailed`],
/// [`StorageError::CreateBucketFailed`] or [`StorageError::UploadFailed`]
/// carrying the backend's message text.
///
/// [`StorageError::ListFailed`]: crate::StorageError::ListFailed
/// [`StorageError::CreateBucketFailed`]: crate::StorageError::CreateBucketFailed
/// [`StorageError::UploadFailed`]: crate::StorageError::UploadFailed
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List every bucket visible to the credentials.
    async fn list_buckets(&self) -> StorageResult<Vec<BucketInfo>>;

    /// Create a bucket, returning its location when the backend reports one.
    async fn create_bucket(&self, bucket: &str) -> StorageResult<Option<String>>;

    /// Stream a local file into `bucket` under `key`.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        source: &Path,
        content_type: &str,
    ) -> StorageResult<()>;
}
