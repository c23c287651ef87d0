//! # cfkey
//!
//! Extracts the CurseForge core API key from the CurseForge Linux AppImage
//! without downloading the whole file.
//!
//! The key sits inside a compressed region at a known offset of the asset. A
//! single HTTP Range request fetches that region, a synthetic size header makes
//! the slice decodable on its own, and the inflated text is scanned for the
//! `"cfCoreApiKey":"` marker.
//!
//! ## Example
//!
//! ```no_run
//! use cfkey::{AssetLayout, CURSEFORGE_APPIMAGE_URL, HttpRangeFetcher, KeyExtractor};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let fetcher = HttpRangeFetcher::new(CURSEFORGE_APPIMAGE_URL)?;
//!     let extractor = KeyExtractor::new(fetcher, AssetLayout::CURSEFORGE_APPIMAGE);
//!
//!     let key = extractor.extract().await?;
//!     println!("{}", key);
//!
//!     Ok(())
//! }
//! ```

pub mod asset;
pub mod cli;
pub mod error;
pub mod io;
pub mod logging;
pub mod report;

pub use asset::{AssetLayout, CURSEFORGE_APPIMAGE_URL, KeyExtractor};
pub use cli::Cli;
pub use error::ExtractError;
pub use io::{HttpRangeFetcher, RangeSource};
pub use report::report;
