//! Request handler module
//!
//! Routes each request to the root listing, a sub-directory listing or a file
//! download.

pub mod browse;
pub mod download;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
