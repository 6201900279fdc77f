//! Shared data models for the Fluide album service.
//!
//! This crate provides Serde-serializable types for:
//! - Albums and the bucket naming codec
//! - Upload descriptors
//! - Operation result records returned to callers

pub mod album;
pub mod result;
pub mod upload;

// Re-export common types
pub use album::{decode, encode, Album, NamingError, NamingResult, DELIMITER, UNKNOWN};
pub use result::{CreateAlbumResult, UploadResult};
pub use upload::{content_type_for, UploadDescriptor};
