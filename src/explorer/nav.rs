//! Navigation renderer
//!
//! Emits the root / parent / previous links shown above every listing.

use std::fmt::{self, Write};

use super::path::lexical_parent;

/// Write the navigation bar for `current_dir` reached through `request_path`
///
/// The parent link is omitted for the root directory. The previous link is
/// omitted for an empty request path and whenever its parent is exactly `/`.
pub fn render_navigation<W: Write>(
    current_dir: &str,
    request_path: &str,
    out: &mut W,
) -> fmt::Result {
    out.write_str("<div>")?;
    out.write_str("<a href='/'>[DIR] Root</a> | ")?;

    if !current_dir.is_empty() {
        let parent = lexical_parent(current_dir);
        write!(out, "<a href='/dir/{parent}'>[DIR] Parent</a> | ")?;
    }

    if !request_path.is_empty() {
        let previous = lexical_parent(request_path);
        if previous != "/" {
            write!(out, "<a href='{previous}'>[PREV] Previous</a> | ")?;
        }
    }

    out.write_str("</div>")
}
