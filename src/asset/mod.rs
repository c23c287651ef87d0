//! Key extraction from a packed asset.
//!
//! ## Pipeline
//!
//! 1. Fetch one byte range of the remote asset ([`RangeSource`](crate::io::RangeSource))
//! 2. Prepend a synthetic size header so the slice decodes on its own ([`reassemble`])
//! 3. Inflate the framed buffer as raw DEFLATE ([`inflate`])
//! 4. Scan the text for the marker and cut the value at the next quote ([`scan_for_key`])
//!
//! Stages run strictly in order and the first error aborts the run.
//!
//! ## Limitations
//!
//! - The byte offset and header value are pinned to one asset release ([`AssetLayout`])
//! - No check that the extracted value looks like a valid key
//! - Only the first marker occurrence is considered

mod extractor;
mod frame;
mod layout;
mod scanner;

pub use extractor::KeyExtractor;
pub use frame::{HEADER_SIZE, inflate, reassemble};
pub use layout::{AssetLayout, CURSEFORGE_APPIMAGE_URL};
pub use scanner::scan_for_key;
