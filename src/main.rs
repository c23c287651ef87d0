//! Main entry point for the cfkey CLI application.
//!
//! Prints `API Key: <key>` on success and exits 0; on any failure prints a
//! diagnostic to stderr and exits 1.

use clap::Parser;
use std::process::ExitCode;

use cfkey::{
    AssetLayout, CURSEFORGE_APPIMAGE_URL, Cli, ExtractError, HttpRangeFetcher, KeyExtractor,
    logging, report,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _cli = Cli::parse();

    if let Err(e) = logging::init_logging() {
        eprintln!("{:#}", e);
    }

    let result = run().await;
    report(result, &mut std::io::stdout().lock(), &mut std::io::stderr().lock())
}

/// Run the pipeline once against the pinned asset.
async fn run() -> Result<String, ExtractError> {
    let fetcher = HttpRangeFetcher::new(CURSEFORGE_APPIMAGE_URL)?;
    let extractor = KeyExtractor::new(fetcher, AssetLayout::CURSEFORGE_APPIMAGE);

    let key = extractor.extract().await?;
    tracing::debug!(
        "total bytes transferred: {}",
        extractor.source().transferred_bytes()
    );

    Ok(key)
}
