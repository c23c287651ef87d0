use crate::error::Result;
use crate::io::RangeSource;

use super::frame::{inflate, reassemble};
use super::layout::AssetLayout;
use super::scanner::scan_for_key;

/// Runs the fetch → reassemble → inflate → scan pipeline against one source.
pub struct KeyExtractor<R: RangeSource> {
    source: R,
    layout: AssetLayout,
}

impl<R: RangeSource> KeyExtractor<R> {
    pub fn new(source: R, layout: AssetLayout) -> Self {
        Self { source, layout }
    }

    /// The underlying source, e.g. to read transfer statistics after a run.
    pub fn source(&self) -> &R {
        &self.source
    }

    /// Extract the key.
    ///
    /// Each call performs a fresh fetch; nothing is cached between runs.
    /// The first failing stage aborts the pipeline.
    pub async fn extract(&self) -> Result<String> {
        tracing::info!("getting curseforge API key from {}...", self.source.location());

        let slice = self
            .source
            .fetch_range(self.layout.offset, self.layout.length)
            .await?;
        tracing::info!("downloaded {} bytes (compressed)", slice.len());

        let framed = reassemble(&slice, self.layout.skipped_size);
        drop(slice);

        let text = inflate(&framed)?;
        tracing::info!("decompressed to {} bytes", text.len());

        let key = scan_for_key(&text, self.layout.marker)?;
        tracing::info!("success: found key of {} characters", key.chars().count());
        tracing::debug!(%key, "extracted key");

        Ok(key)
    }
}
