//! HTTP response building module
//!
//! Provides builders for the responses the explorer sends. Every builder falls
//! back to a bare response instead of panicking.

use futures_util::TryStreamExt;
use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::{BodyExt, Empty, Full, StreamBody};
use hyper::body::{Bytes, Frame};
use hyper::Response;
use std::io;
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;

use crate::explorer::ExplorerError;
use crate::logger;

/// Body type shared by buffered pages and streamed downloads
pub type ResponseBody = UnsyncBoxBody<Bytes, io::Error>;

/// Buffered body from any byte source
pub fn full(data: impl Into<Bytes>) -> ResponseBody {
    Full::new(data.into())
        .map_err(|never| match never {})
        .boxed_unsync()
}

/// Body without content
pub fn empty() -> ResponseBody {
    Empty::<Bytes>::new()
        .map_err(|never| match never {})
        .boxed_unsync()
}

/// Body that streams `reader` (normally an open file) in chunks of
/// `chunk_size` bytes
///
/// The reader is owned by the stream and dropped with the body, whether the
/// transfer completed or not. A read error is logged under `label` and ends
/// the body with that error.
pub fn file_stream<R>(reader: R, chunk_size: usize, label: String) -> ResponseBody
where
    R: AsyncRead + Send + 'static,
{
    let stream = ReaderStream::with_capacity(reader, chunk_size)
        .map_ok(Frame::data)
        .map_err(move |e| {
            let err = ExplorerError::Stream(e);
            logger::log_error(&format!("Download of '{label}' aborted: {err}"));
            io::Error::other(err)
        });
    StreamBody::new(stream).boxed_unsync()
}

/// Build generic HTML response
pub fn build_html_response(content: String, is_head: bool) -> Response<ResponseBody> {
    let content_length = content.len();
    let body = if is_head { empty() } else { full(content) };

    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(body)
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(empty())
        })
}

/// Build 200 response streaming a file download
pub fn build_download_response(
    body: ResponseBody,
    content_type: &str,
    content_length: u64,
) -> Response<ResponseBody> {
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(body)
        .unwrap_or_else(|e| {
            log_build_error("download", &e);
            Response::new(empty())
        })
}

/// Build 301 redirect response
pub fn build_301_response(target: &str) -> Response<ResponseBody> {
    Response::builder()
        .status(301)
        .header("Location", target)
        .header("Content-Type", "text/plain")
        .body(full("Moved Permanently"))
        .unwrap_or_else(|e| {
            log_build_error("301", &e);
            Response::new(full("Moved Permanently"))
        })
}

/// Build 500 Internal Server Error response carrying the raw error text
pub fn build_500_response(err: &ExplorerError) -> Response<ResponseBody> {
    let message = format!("{err}\n");

    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("X-Content-Type-Options", "nosniff")
        .body(full(message))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(empty())
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<ResponseBody> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(full("405 Method Not Allowed"))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(full("405 Method Not Allowed"))
        })
}

/// Build OPTIONS response
pub fn build_options_response() -> Response<ResponseBody> {
    Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(empty())
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(empty())
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}
