//! Album storage on top of an S3-compatible object store.
//!
//! This crate provides:
//! - The object-store backend seam and its AWS SDK implementation
//! - Local folder enumeration for uploads
//! - An injectable logging capability
//! - The album gateway: list, create and bulk upload

pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod files;
pub mod gateway;
pub mod logging;
pub mod metrics;

pub use backend::{BucketInfo, ObjectStore};
pub use client::S3Client;
pub use config::StorageConfig;
pub use error::{StorageError, StorageResult};
pub use files::{build_upload_descriptors, list_files};
pub use gateway::{AlbumStore, StorageContext};
pub use logging::{Log, TracingLog};
