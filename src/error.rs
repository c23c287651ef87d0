use thiserror::Error;

/// Failure of one stage of the extraction pipeline.
///
/// Every stage aborts on its first error; nothing is retried or recovered.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Transport failure or a non-success HTTP status.
    #[error("network request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The reassembled buffer is not a usable deflate stream.
    #[error("decompression error: {0}")]
    Decompress(#[source] std::io::Error),

    /// The decompressed text does not contain the marker.
    #[error("couldn't find string {marker}")]
    MarkerNotFound { marker: String },

    /// The marker was found but no closing quote follows it.
    #[error("no closing quote on value")]
    DelimiterNotFound,

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl From<std::string::FromUtf8Error> for ExtractError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ExtractError::Unexpected(format!("key is not valid UTF-8: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
