//! MIME type and icon resolution module
//!
//! Maps file extensions to MIME types and MIME types to the icon images shown
//! next to each listing entry.

use crate::explorer::path::extension;

/// Fallback MIME type for unknown extensions
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Icon used for entries whose MIME type has no dedicated icon
pub const FILE_ICON: &str = "file.png";

/// Icon used for directories
pub const DIR_ICON: &str = "dir.png";

/// URL prefix icons are served from (through the download endpoint)
const ICON_BASE: &str = "/download/assets";

/// Get MIME type from a file extension, with or without its leading dot
///
/// Matching is exact and case sensitive.
pub fn mime_type(ext: &str) -> &'static str {
    match ext.strip_prefix('.').unwrap_or(ext) {
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "pdf" => "application/pdf",
        "doc" | "docx" => "application/msword",
        "xls" | "xlsx" => "application/vnd.ms-excel",
        "ppt" | "pptx" => "application/vnd.ms-powerpoint",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "mp4" => "video/mp4",
        "mp3" => "audio/mpeg",
        "zip" => "application/zip",
        "7z" => "application/x-7z-compressed",
        "rar" => "application/x-rar-compressed",
        "tar" => "application/x-tar",
        "gz" => "application/gzip",
        "bz2" => "application/x-bzip2",
        _ => OCTET_STREAM,
    }
}

/// Icon file for a MIME type, falling back to the generic file icon
pub fn icon_for_mime(mime: &str) -> &'static str {
    match mime {
        "text/plain" => "txt.png",
        "text/html" => "html.png",
        "application/pdf" => "pdf.png",
        "application/msword" => "doc.png",
        "application/vnd.ms-excel" => "xls.png",
        "application/vnd.ms-powerpoint" => "ppt.png",
        "image/jpeg" => "jpg.png",
        "image/png" => "png.png",
        "image/gif" => "gif.png",
        "video/mp4" => "mp4.png",
        "audio/mpeg" => "mp3.png",
        "application/zip" => "zip.png",
        "application/x-7z-compressed" => "7z.png",
        "application/x-rar-compressed" => "rar.png",
        "application/x-tar" => "tar.png",
        "application/gzip" => "gz.png",
        "application/x-bzip2" => "bz2.png",
        _ => FILE_ICON,
    }
}

/// Build the `<img>` tag shown in front of a listing entry
///
/// Directories always get the directory icon, whatever their name.
pub fn icon_tag(path: &str, is_dir: bool) -> String {
    if is_dir {
        return img_tag(DIR_ICON, "Directory");
    }

    let mime = mime_type(extension(path));
    match icon_for_mime(mime) {
        FILE_ICON => img_tag(FILE_ICON, "File"),
        icon => img_tag(icon, mime),
    }
}

fn img_tag(icon: &str, alt: &str) -> String {
    format!("<img src='{ICON_BASE}/{icon}' alt='{alt}' width='16' height='16'>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        let cases = [
            ("txt", "text/plain"),
            ("html", "text/html"),
            ("htm", "text/html"),
            ("pdf", "application/pdf"),
            ("doc", "application/msword"),
            ("docx", "application/msword"),
            ("xls", "application/vnd.ms-excel"),
            ("xlsx", "application/vnd.ms-excel"),
            ("ppt", "application/vnd.ms-powerpoint"),
            ("pptx", "application/vnd.ms-powerpoint"),
            ("jpg", "image/jpeg"),
            ("jpeg", "image/jpeg"),
            ("png", "image/png"),
            ("gif", "image/gif"),
            ("mp4", "video/mp4"),
            ("mp3", "audio/mpeg"),
            ("zip", "application/zip"),
            ("7z", "application/x-7z-compressed"),
            ("rar", "application/x-rar-compressed"),
            ("tar", "application/x-tar"),
            ("gz", "application/gzip"),
            ("bz2", "application/x-bzip2"),
        ];
        for (ext, expected) in cases {
            assert_eq!(mime_type(ext), expected, "extension {ext}");
        }
    }

    #[test]
    fn test_leading_dot_is_stripped() {
        assert_eq!(mime_type(".pdf"), "application/pdf");
        assert_eq!(mime_type(".gz"), "application/gzip");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(mime_type("xyz"), OCTET_STREAM);
        assert_eq!(mime_type(""), OCTET_STREAM);
        assert_eq!(mime_type("."), OCTET_STREAM);
        // No case folding
        assert_eq!(mime_type("TXT"), OCTET_STREAM);
    }

    #[test]
    fn test_icon_for_mime() {
        assert_eq!(icon_for_mime("text/plain"), "txt.png");
        assert_eq!(icon_for_mime("application/msword"), "doc.png");
        assert_eq!(icon_for_mime("application/x-bzip2"), "bz2.png");
        assert_eq!(icon_for_mime(OCTET_STREAM), FILE_ICON);
        assert_eq!(icon_for_mime("text/css"), FILE_ICON);
    }

    #[test]
    fn test_directories_always_get_dir_icon() {
        assert!(icon_tag("photos.jpg", true).contains("/dir.png'"));
        assert!(icon_tag("archive.zip", true).contains("alt='Directory'"));
        assert!(icon_tag("photos.jpg", false).contains("/jpg.png' alt='image/jpeg'"));
        assert!(icon_tag("notes", false).contains("/file.png' alt='File'"));
    }

    #[test]
    fn test_icon_tag() {
        assert_eq!(
            icon_tag("sub", true),
            "<img src='/download/assets/dir.png' alt='Directory' width='16' height='16'>"
        );
        assert_eq!(
            icon_tag("docs/a.txt", false),
            "<img src='/download/assets/txt.png' alt='text/plain' width='16' height='16'>"
        );
        assert_eq!(
            icon_tag("data.bin", false),
            "<img src='/download/assets/file.png' alt='File' width='16' height='16'>"
        );
    }
}
