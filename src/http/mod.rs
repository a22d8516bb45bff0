//! HTTP protocol layer module
//!
//! Response builders and content-type resolution, kept apart from the
//! explorer logic that decides what to send.

pub mod mime;
pub mod response;

pub use response::{
    build_301_response, build_405_response, build_500_response, build_download_response, build_html_response,
    build_options_response, ResponseBody,
};
