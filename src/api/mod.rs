//! Gateway HTTP access
//!
//! The `Gateway` trait is the seam between network I/O and the logic that
//! consumes gateway responses, so the latter can be tested with canned bodies.

mod client;
mod envelope;

pub(crate) use client::{DEFAULT_TIMEOUT, GatewayClient};
pub(crate) use envelope::ApiResponse;

use crate::error::FetchError;

pub(crate) trait Gateway {
    /// Normalized base address, without a trailing slash
    fn server_address(&self) -> &str;

    /// GET `path` relative to the server address and return the raw body
    fn get_text(&self, path: &str) -> Result<String, FetchError>;
}
