//! Directory explorer module
//!
//! Reads directories and files beneath a root directory and renders the HTML
//! listing pages. Virtual paths from the URL are joined to the root verbatim.

pub mod listing;
pub mod nav;
pub mod page;
pub mod path;

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

pub use page::{render_dir_page, render_root_page};

/// Errors raised while serving a listing or a download
///
/// Every variant displays the raw underlying message, which is sent to the
/// client as the body of the 500 response.
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("{0}")]
    ReadDir(#[source] io::Error),

    #[error("{0}")]
    Open(#[source] io::Error),

    #[error("{0}")]
    Stream(#[source] io::Error),

    #[error("failed to render page: {0}")]
    Render(#[from] std::fmt::Error),
}

/// A single child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_directory: bool,
    /// Virtual path of the entry: parent virtual path joined with `name`
    pub full_path: String,
}

/// Resolves virtual paths against a root directory
#[derive(Debug, Clone)]
pub struct Explorer {
    root: PathBuf,
}

impl Explorer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path for a virtual path. No traversal checks are applied.
    ///
    /// The empty virtual path names no file, so it maps to the empty path and
    /// any filesystem call on it fails. Only the root listing reads the root.
    pub fn resolve(&self, virtual_path: &str) -> PathBuf {
        if virtual_path.is_empty() {
            PathBuf::new()
        } else {
            self.root.join(virtual_path)
        }
    }

    /// Read the immediate children of the root, sorted by name
    pub async fn read_root(&self) -> Result<Vec<DirEntry>, ExplorerError> {
        Self::read_dir_at(&self.root, "").await
    }

    /// Read the immediate children of a virtual directory, sorted by name
    pub async fn read_entries(&self, virtual_dir: &str) -> Result<Vec<DirEntry>, ExplorerError> {
        Self::read_dir_at(&self.resolve(virtual_dir), virtual_dir).await
    }

    async fn read_dir_at(dir: &Path, virtual_dir: &str) -> Result<Vec<DirEntry>, ExplorerError> {
        let mut reader = fs::read_dir(dir).await.map_err(ExplorerError::ReadDir)?;

        let mut entries = Vec::new();
        while let Some(entry) = reader.next_entry().await.map_err(ExplorerError::ReadDir)? {
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_directory = entry
                .file_type()
                .await
                .map_err(ExplorerError::ReadDir)?
                .is_dir();
            let full_path = path::join(virtual_dir, &name);
            entries.push(DirEntry {
                name,
                is_directory,
                full_path,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Open a file for download, returning it with its length
    pub async fn open_file(&self, virtual_path: &str) -> Result<(fs::File, u64), ExplorerError> {
        let file_path = self.resolve(virtual_path);
        let file = fs::File::open(&file_path).await.map_err(ExplorerError::Open)?;
        let metadata = file.metadata().await.map_err(ExplorerError::Open)?;

        if metadata.is_dir() {
            return Err(ExplorerError::Open(io::Error::other(format!(
                "{}: is a directory",
                file_path.display()
            ))));
        }

        Ok((file, metadata.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), b"bee").unwrap();
        std::fs::write(dir.path().join("a.txt"), b"ay").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub").join("inner.pdf"), b"%PDF").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_read_root_sorted_with_full_paths() {
        let dir = fixture();
        let explorer = Explorer::new(dir.path());

        let entries = explorer.read_root().await.unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "b.txt", "sub"]);
        assert_eq!(entries[0].full_path, "a.txt");
        assert!(!entries[0].is_directory);
        assert!(entries[2].is_directory);
        assert_eq!(entries[2].full_path, "sub");
    }

    #[tokio::test]
    async fn test_read_entries_of_subdirectory() {
        let dir = fixture();
        let explorer = Explorer::new(dir.path());

        let entries = explorer.read_entries("sub").await.unwrap();
        assert_eq!(
            entries,
            vec![DirEntry {
                name: "inner.pdf".to_string(),
                is_directory: false,
                full_path: "sub/inner.pdf".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_read_missing_directory_fails() {
        let dir = fixture();
        let explorer = Explorer::new(dir.path());

        let err = explorer.read_entries("nope").await.unwrap_err();
        assert!(matches!(err, ExplorerError::ReadDir(_)));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_empty_virtual_path_is_not_the_root() {
        let dir = fixture();
        let explorer = Explorer::new(dir.path());

        assert_eq!(explorer.resolve(""), PathBuf::new());
        let err = explorer.read_entries("").await.unwrap_err();
        assert!(matches!(err, ExplorerError::ReadDir(_)));
        assert!(!err.to_string().is_empty());

        let err = explorer.open_file("").await.unwrap_err();
        assert!(matches!(err, ExplorerError::Open(_)));
    }

    #[tokio::test]
    async fn test_open_file() {
        let dir = fixture();
        let explorer = Explorer::new(dir.path());

        let (_file, len) = explorer.open_file("b.txt").await.unwrap();
        assert_eq!(len, 3);

        let missing = explorer.open_file("missing.txt").await.unwrap_err();
        assert!(matches!(missing, ExplorerError::Open(_)));

        let directory = explorer.open_file("sub").await.unwrap_err();
        assert!(directory.to_string().contains("is a directory"));
    }
}
