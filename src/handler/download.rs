//! File download handler
//!
//! Streams a file's bytes as the response body. The file is read in chunks as
//! the client consumes the body, never buffered whole.

use crate::explorer::{path, Explorer};
use crate::handler::router::RequestContext;
use crate::http::{self, mime, response, ResponseBody};
use crate::logger;
use hyper::Response;

/// Serve the file at `virtual_path`
pub async fn serve_download(
    ctx: &RequestContext<'_>,
    explorer: &Explorer,
    virtual_path: &str,
    chunk_size: usize,
) -> Response<ResponseBody> {
    let (file, len) = match explorer.open_file(virtual_path).await {
        Ok(opened) => opened,
        Err(e) => {
            logger::log_error(&format!("Failed to open '{virtual_path}': {e}"));
            return http::build_500_response(&e);
        }
    };

    let content_type = mime::mime_type(path::extension(virtual_path));
    let body = if ctx.is_head {
        response::empty()
    } else {
        response::file_stream(file, chunk_size, virtual_path.to_string())
    };

    http::build_download_response(body, content_type, len)
}
