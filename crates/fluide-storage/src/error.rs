//! Storage error types.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to configure storage client: {0}")]
    ConfigError(String),

    #[error("List buckets failed: {0}")]
    ListFailed(String),

    #[error("Create bucket failed: {0}")]
    CreateBucketFailed(String),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Invalid album name: {0}")]
    InvalidName(#[from] fluide_models::NamingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn list_failed(msg: impl Into<String>) -> Self {
        Self::ListFailed(msg.into())
    }

    pub fn create_bucket_failed(msg: impl Into<String>) -> Self {
        Self::CreateBucketFailed(msg.into())
    }

    pub fn upload_failed(msg: impl Into<String>) -> Self {
        Self::UploadFailed(msg.into())
    }

    /// Message carried by a backend failure, without the variant prefix.
    pub fn backend_message(&self) -> String {
        match self {
            Self::ListFailed(msg) | Self::CreateBucketFailed(msg) | Self::UploadFailed(msg) => {
                msg.clone()
            }
            other => other.to_string(),
        }
    }
}
