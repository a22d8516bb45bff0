//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route matching,
//! dispatch and access logging.

use crate::config::AppState;
use crate::handler::{browse, download};
use crate::http::{self, ResponseBody};
use crate::logger::{self, AccessLogEntry};
use hyper::{header, Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

const DIR_PREFIX: &str = "/dir/";
const DOWNLOAD_PREFIX: &str = "/download/";

/// Prefix paths without their trailing slash, redirected to the prefix
const DIR_BARE: &str = "/dir";
const DOWNLOAD_BARE: &str = "/download";

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    /// Percent-decoded request path
    pub path: &'a str,
    pub is_head: bool,
}

/// Which handler a request path selects
#[derive(Debug, PartialEq, Eq)]
pub enum Route<'a> {
    Root,
    Dir(&'a str),
    Download(&'a str),
    /// Permanent redirect to the given location
    Redirect(&'static str),
}

/// Match a decoded request path; anything unrecognized lists the root
pub fn match_route(path: &str) -> Route<'_> {
    if path == DIR_BARE {
        Route::Redirect(DIR_PREFIX)
    } else if path == DOWNLOAD_BARE {
        Route::Redirect(DOWNLOAD_PREFIX)
    } else if let Some(dir) = path.strip_prefix(DIR_PREFIX) {
        Route::Dir(dir)
    } else if let Some(file) = path.strip_prefix(DOWNLOAD_PREFIX) {
        Route::Download(file)
    } else {
        Route::Root
    }
}

/// Main entry point for HTTP request handling
///
/// The request body is never read, so any body type is accepted.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<ResponseBody>, Infallible> {
    let started = Instant::now();
    let method = req.method();
    let raw_path = req.uri().path();
    let path = decode_path(raw_path);
    let is_head = *method == Method::HEAD;

    let response = match check_http_method(method) {
        Some(resp) => resp,
        None => {
            let ctx = RequestContext {
                path: &path,
                is_head,
            };
            route_request(&ctx, &state).await
        }
    };

    if state.access_log_enabled() {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.to_string(),
            raw_path.to_string(),
        );
        entry.http_version = version_label(req.version()).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = sent_body_bytes(&response, is_head);
        entry.user_agent = req
            .headers()
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        entry.elapsed = started.elapsed();
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Body size for the access log: nothing is sent for HEAD, otherwise the
/// declared Content-Length (unknown when absent)
fn sent_body_bytes(response: &Response<ResponseBody>, is_head: bool) -> Option<u64> {
    if is_head {
        return Some(0);
    }
    response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

/// Percent-decode a URL path, keeping the raw text if it is not valid UTF-8
fn decode_path(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_string(), |p| p.into_owned())
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<ResponseBody>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Route request to the listing or download handler
async fn route_request(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<ResponseBody> {
    match match_route(ctx.path) {
        Route::Root => browse::serve_root(ctx, &state.explorer).await,
        Route::Dir(dir) => browse::serve_dir(ctx, &state.explorer, dir).await,
        Route::Download(file) => {
            let chunk_size = state.config.performance.download_chunk_size;
            download::serve_download(ctx, &state.explorer, file, chunk_size).await
        }
        Route::Redirect(target) => http::build_301_response(target),
    }
}
