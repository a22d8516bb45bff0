//! Directory listing handlers
//!
//! Serve the root listing and sub-directory listings as HTML pages.

use crate::explorer::{render_dir_page, render_root_page, Explorer, ExplorerError};
use crate::handler::router::RequestContext;
use crate::http::{self, ResponseBody};
use crate::logger;
use hyper::Response;

/// Serve the listing of the root directory
pub async fn serve_root(ctx: &RequestContext<'_>, explorer: &Explorer) -> Response<ResponseBody> {
    let page = render_root_page(explorer, ctx.path).await;
    respond(ctx, ".", page)
}

/// Serve the listing of `dir`, a virtual path taken from the URL
pub async fn serve_dir(
    ctx: &RequestContext<'_>,
    explorer: &Explorer,
    dir: &str,
) -> Response<ResponseBody> {
    let page = render_dir_page(explorer, dir, ctx.path).await;
    respond(ctx, dir, page)
}

fn respond(
    ctx: &RequestContext<'_>,
    dir: &str,
    page: Result<String, ExplorerError>,
) -> Response<ResponseBody> {
    match page {
        Ok(html) => http::build_html_response(html, ctx.is_head),
        Err(e) => {
            logger::log_error(&format!("Failed to list directory '{dir}': {e}"));
            http::build_500_response(&e)
        }
    }
}
