//! Per-file upload descriptors.

use std::path::{Path, PathBuf};

/// One local file to be put into an album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadDescriptor {
    /// Object key (the file's base name).
    pub key: String,
    /// Absolute or caller-relative path of the file to read.
    pub source_path: PathBuf,
}

impl UploadDescriptor {
    /// Describe `file_name` inside `dir`.
    pub fn new(dir: impl AsRef<Path>, file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let source_path = dir.as_ref().join(&file_name);
        let key = Path::new(&file_name)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or(file_name);

        Self { key, source_path }
    }

    /// MIME type to send with the object.
    pub fn content_type(&self) -> &'static str {
        content_type_for(&self.key)
    }
}

/// Guess a MIME type from a file name's extension.
pub fn content_type_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        Some("tif") | Some("tiff") => "image/tiff",
        Some("mp4") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("json") => "application/json",
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
