//! Local folder enumeration for uploads.

use std::path::Path;

use fluide_models::UploadDescriptor;
use tracing::debug;

use crate::error::StorageResult;

/// List the regular files directly inside `dir`, sorted by name.
///
/// Sub-directories are skipped and nothing is read recursively. Symlinks are
/// kept only when they resolve to a regular file.
pub async fn list_files(dir: impl AsRef<Path>) -> StorageResult<Vec<String>> {
    let dir = dir.as_ref();
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut names = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let file_type = entry.file_type().await?;

        let is_file = if file_type.is_symlink() {
            tokio::fs::metadata(entry.path())
                .await
                .map(|m| m.is_file())
                .unwrap_or(false)
        } else {
            file_type.is_file()
        };

        if !is_file {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            // Object keys are UTF-8
            Err(raw) => debug!("Skipping non UTF-8 file name {:?}", raw),
        }
    }

    names.sort();
    debug!("Found {} files in {}", names.len(), dir.display());
    Ok(names)
}

/// Build one upload descriptor per file in `dir`.
///
/// Source paths are joined onto `dir`, so the result does not depend on the
/// process working directory.
pub async fn build_upload_descriptors(
    dir: impl AsRef<Path>,
) -> StorageResult<Vec<UploadDescriptor>> {
    let dir = dir.as_ref();
    let names = list_files(dir).await?;

    Ok(names
        .into_iter()
        .map(|name| UploadDescriptor::new(dir, name))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StorageError;

    #[tokio::test]
    async fn test_list_files_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.txt", "b.jpg", "c"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::create_dir(dir.path().join("more.d")).unwrap();
        std::fs::write(dir.path().join("nested").join("deep.txt"), b"x").unwrap();

        let names = list_files(dir.path()).await.unwrap();
        assert_eq!(names, vec!["a.txt", "b.jpg", "c"]);
    }

    #[tokio::test]
    async fn test_list_files_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_files(dir.path()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_files_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        match list_files(&missing).await {
            Err(StorageError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected IO error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_list_files_follows_file_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("real.txt"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real.txt"), dir.path().join("link.txt"))
            .unwrap();
        std::os::unix::fs::symlink(dir.path().join("sub"), dir.path().join("link-dir")).unwrap();

        let names = list_files(dir.path()).await.unwrap();
        assert_eq!(names, vec!["link.txt", "real.txt"]);
    }

    #[tokio::test]
    async fn test_descriptors_use_joined_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), b"a").unwrap();
        std::fs::write(dir.path().join("b.png"), b"b").unwrap();

        let descriptors = build_upload_descriptors(dir.path()).await.unwrap();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].key, "a.txt");
        assert_eq!(descriptors[0].source_path, dir.path().join("a.txt"));
        assert_eq!(descriptors[1].key, "b.png");
        assert_eq!(descriptors[1].content_type(), "image/png");
    }
}
