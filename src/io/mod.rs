mod http;

pub use http::{HttpRangeFetcher, REQUEST_TIMEOUT, range_header};

use async_trait::async_trait;

use crate::error::Result;

/// A remote resource that can serve one byte range on request.
#[async_trait]
pub trait RangeSource: Send + Sync {
    /// Fetch the bytes starting at `offset`.
    ///
    /// `length` is a request, not a guarantee: sources may return a shorter or
    /// longer body and callers must not assume an exact size.
    async fn fetch_range(&self, offset: u64, length: u64) -> Result<Vec<u8>>;

    /// Human-readable location of the resource, used in status output.
    fn location(&self) -> &str;
}
