use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::RANGE;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::RangeSource;
use crate::error::Result;

/// Timeout applied to the whole ranged GET.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP Range fetcher for a single remote asset
pub struct HttpRangeFetcher {
    client: Client,
    url: String,
    transferred_bytes: AtomicU64,
}

impl HttpRangeFetcher {
    /// Create a fetcher for `url`.
    ///
    /// No request is made here; the server is first contacted by
    /// [`fetch_range`](RangeSource::fetch_range).
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            url: url.into(),
            transferred_bytes: AtomicU64::new(0),
        })
    }

    /// Get total bytes transferred from network
    pub fn transferred_bytes(&self) -> u64 {
        self.transferred_bytes.load(Ordering::Relaxed)
    }
}

/// Value of the `Range` header for a fetch of `length` bytes at `offset`.
///
/// The end bound is `offset + length` and HTTP ranges are inclusive, so the
/// server is asked for `length + 1` bytes. The packed asset layout was measured
/// against exactly this request.
pub fn range_header(offset: u64, length: u64) -> String {
    format!("bytes={}-{}", offset, offset + length)
}

#[async_trait]
impl RangeSource for HttpRangeFetcher {
    async fn fetch_range(&self, offset: u64, length: u64) -> Result<Vec<u8>> {
        let range = range_header(offset, length);
        tracing::info!("requesting {}...", range);

        // Single attempt: any 2xx is accepted, so servers that ignore the
        // Range header and answer 200 with the full body still work.
        let resp = self
            .client
            .get(&self.url)
            .header(RANGE, &range)
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!(status = %resp.status(), "range response");

        let bytes = resp.bytes().await?;
        self.transferred_bytes
            .fetch_add(bytes.len() as u64, Ordering::Relaxed);

        if bytes.len() as u64 != length + 1 {
            tracing::debug!(
                requested = length + 1,
                received = bytes.len(),
                "server returned a different length than requested"
            );
        }

        Ok(bytes.to_vec())
    }

    fn location(&self) -> &str {
        &self.url
    }
}
