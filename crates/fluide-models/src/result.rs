//! Result records returned to callers.
//!
//! Backend failures never surface as errors from the album operations; they
//! are captured here with `success: false` and the backend's message.

use serde::{Deserialize, Serialize};

/// Outcome of creating an empty album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAlbumResult {
    pub success: bool,

    /// Bucket id of the album.
    pub customer: String,

    /// Failure detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CreateAlbumResult {
    pub fn created(bucket_id: impl Into<String>) -> Self {
        Self {
            success: true,
            customer: bucket_id.into(),
            message: None,
        }
    }

    pub fn failed(bucket_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            customer: bucket_id.into(),
            message: Some(message.into()),
        }
    }
}

/// Outcome of uploading one file into an album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub success: bool,

    /// Object key, i.e. the file's base name.
    pub file: String,

    /// Bucket id the file was sent to.
    pub customer: String,

    /// Failure detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl UploadResult {
    pub fn uploaded(bucket_id: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            success: true,
            file: file.into(),
            customer: bucket_id.into(),
            message: None,
        }
    }

    pub fn failed(
        bucket_id: impl Into<String>,
        file: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            file: file.into(),
            customer: bucket_id.into(),
            message: Some(message.into()),
        }
    }
}
