//! Listing renderer
//!
//! Turns directory entries into `<li>` items, each with an icon and a link to
//! either a sub-listing or the download endpoint.

use std::fmt::{self, Write};

use super::DirEntry;
use crate::http::mime;

/// Write one `<li>` per entry to `out`
pub fn render_listing<W: Write>(entries: &[DirEntry], out: &mut W) -> fmt::Result {
    for entry in entries {
        render_entry(entry, out)?;
    }
    Ok(())
}

fn render_entry<W: Write>(entry: &DirEntry, out: &mut W) -> fmt::Result {
    let icon = mime::icon_tag(&entry.full_path, entry.is_directory);
    let endpoint = if entry.is_directory { "dir" } else { "download" };
    write!(
        out,
        "<li>{icon} <a href='/{endpoint}/{}'>{}</a></li>",
        entry.full_path, entry.name
    )
}
