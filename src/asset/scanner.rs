use crate::error::{ExtractError, Result};

/// Closing delimiter of the key value.
const QUOTE: u8 = b'"';

/// Extract the value that follows the first `marker` in `text`.
///
/// The value runs from the end of the marker up to, not including, the next
/// double quote. Later occurrences of the marker are ignored.
///
/// # Errors
///
/// - [`ExtractError::MarkerNotFound`] if `marker` does not occur in `text`
/// - [`ExtractError::DelimiterNotFound`] if no quote follows the marker
/// - [`ExtractError::Unexpected`] if the bounded bytes are not valid UTF-8
pub fn scan_for_key(text: &[u8], marker: &str) -> Result<String> {
    let needle = marker.as_bytes();
    let start = find(text, needle).ok_or_else(|| ExtractError::MarkerNotFound {
        marker: marker.to_string(),
    })? + needle.len();

    let end = text[start..]
        .iter()
        .position(|&b| b == QUOTE)
        .map(|pos| start + pos)
        .ok_or(ExtractError::DelimiterNotFound)?;

    Ok(String::from_utf8(text[start..end].to_vec())?)
}

/// Offset of the first occurrence of `needle` in `haystack`.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "\"cfCoreApiKey\":\"";

    #[test]
    fn extracts_value_between_marker_and_quote() {
        let text = br#"...junk...{"cfCoreApiKey":"abc123XYZ","other":1}..."#;
        assert_eq!(scan_for_key(text, MARKER).unwrap(), "abc123XYZ");
    }

    #[test]
    fn only_first_marker_counts() {
        let text = br#"{"cfCoreApiKey":"first"} {"cfCoreApiKey":"second"}"#;
        assert_eq!(scan_for_key(text, MARKER).unwrap(), "first");
    }

    #[test]
    fn empty_value_is_allowed() {
        let text = br#"{"cfCoreApiKey":""}"#;
        assert_eq!(scan_for_key(text, MARKER).unwrap(), "");
    }

    #[test]
    fn missing_marker() {
        let err = scan_for_key(b"{\"otherKey\":\"x\"}", MARKER).unwrap_err();
        assert!(matches!(err, ExtractError::MarkerNotFound { .. }));
        assert!(err.to_string().starts_with("couldn't find string"));
    }

    #[test]
    fn marker_at_end_of_buffer() {
        let err = scan_for_key(br#"xx"cfCoreApiKey":""#, MARKER).unwrap_err();
        assert!(matches!(err, ExtractError::DelimiterNotFound));
    }

    #[test]
    fn missing_closing_quote() {
        let err = scan_for_key(br#"{"cfCoreApiKey":"abc123"#, MARKER).unwrap_err();
        assert!(matches!(err, ExtractError::DelimiterNotFound));
        assert_eq!(err.to_string(), "no closing quote on value");
    }

    #[test]
    fn invalid_utf8_value_is_unexpected() {
        let mut text = br#"{"cfCoreApiKey":""#.to_vec();
        text.extend_from_slice(&[0xC3, 0x28]);
        text.push(b'"');
        let err = scan_for_key(&text, MARKER).unwrap_err();
        assert!(matches!(err, ExtractError::Unexpected(_)));
    }

    #[test]
    fn utf8_value_is_decoded() {
        let text = "\"cfCoreApiKey\":\"clé\"".as_bytes();
        assert_eq!(scan_for_key(text, MARKER).unwrap(), "clé");
    }
}
