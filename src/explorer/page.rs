//! Listing page assembly
//!
//! Wraps the navigation bar and the listing into a complete HTML document.

use std::fmt::Write;

use super::listing::render_listing;
use super::nav::render_navigation;
use super::{DirEntry, Explorer, ExplorerError};

const STYLE: &str = "<style>body { font-family: Arial, sans-serif; }</style>";

/// Render the listing page for the root directory
pub async fn render_root_page(
    explorer: &Explorer,
    request_path: &str,
) -> Result<String, ExplorerError> {
    let entries = explorer.read_root().await?;
    render_page(&entries, "", request_path, "Files List", "Files")
}

/// Render the listing page for a virtual sub-directory
pub async fn render_dir_page(
    explorer: &Explorer,
    dir: &str,
    request_path: &str,
) -> Result<String, ExplorerError> {
    let entries = explorer.read_entries(dir).await?;
    render_page(&entries, dir, request_path, dir, dir)
}

fn render_page(
    entries: &[DirEntry],
    dir: &str,
    request_path: &str,
    title: &str,
    heading: &str,
) -> Result<String, ExplorerError> {
    let mut html = String::with_capacity(512 + entries.len() * 160);
    write!(
        html,
        "<html><head><title>wExplorer - {title}</title>{STYLE}</head><body>"
    )?;
    render_navigation(dir, request_path, &mut html)?;
    write!(html, "<h1>{heading}</h1><ul>")?;
    render_listing(entries, &mut html)?;
    html.push_str("</ul></body></html>");

    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_page() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), b"hello").unwrap();
        let explorer = Explorer::new(dir.path());

        let html = render_root_page(&explorer, "/").await.unwrap();
        assert!(html.starts_with("<html><head><title>wExplorer - Files List</title>"));
        assert!(html.contains("font-family: Arial, sans-serif;"));
        assert!(html.contains("<h1>Files</h1><ul><li>"));
        assert!(html.contains("href='/download/a.txt'"));
        assert!(html.ends_with("</ul></body></html>"));
        assert!(!html.contains("[DIR] Parent"));
    }

    #[tokio::test]
    async fn test_dir_page_uses_path_as_title() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("docs/old")).unwrap();
        let explorer = Explorer::new(dir.path());

        let html = render_dir_page(&explorer, "docs", "/dir/docs").await.unwrap();
        assert!(html.contains("<title>wExplorer - docs</title>"));
        assert!(html.contains("<h1>docs</h1>"));
        assert!(html.contains("<a href='/dir/.'>[DIR] Parent</a>"));
        assert!(html.contains("href='/dir/docs/old'>old</a>"));
    }

    #[tokio::test]
    async fn test_missing_directory_propagates_error() {
        let dir = tempfile::tempdir().unwrap();
        let explorer = Explorer::new(dir.path());

        let err = render_dir_page(&explorer, "ghost", "/dir/ghost").await.unwrap_err();
        assert!(matches!(err, ExplorerError::ReadDir(_)));
    }

    #[tokio::test]
    async fn test_empty_dir_path_does_not_list_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), b"hello").unwrap();
        let explorer = Explorer::new(dir.path());

        let err = render_dir_page(&explorer, "", "/dir/").await.unwrap_err();
        assert!(matches!(err, ExplorerError::ReadDir(_)));
    }
}
