//! Synthetic framing and inflation of a partial deflate stream.
//!
//! The fetched slice is a sub-range of a larger packed stream. To decode it on
//! its own, the slice is given the container header the packer writes: a
//! 4-byte big-endian size field followed by raw DEFLATE data.

use byteorder::{BigEndian, ByteOrder, ReadBytesExt};
use flate2::read::DeflateDecoder;
use std::io::{Cursor, Read};

use crate::error::{ExtractError, Result};

/// Size of the synthetic header in bytes.
pub const HEADER_SIZE: usize = 4;

/// Upper bound on the output pre-allocation taken from the header.
///
/// The header is a hint only, so a bogus value must not trigger a huge allocation.
const MAX_CAPACITY_HINT: usize = 16 * 1024 * 1024;

/// Prepend the big-endian `skipped_size` header to `slice`.
pub fn reassemble(slice: &[u8], skipped_size: u32) -> Vec<u8> {
    let mut header = [0u8; HEADER_SIZE];
    BigEndian::write_u32(&mut header, skipped_size);

    let mut framed = Vec::with_capacity(HEADER_SIZE + slice.len());
    framed.extend_from_slice(&header);
    framed.extend_from_slice(slice);
    framed
}

/// Inflate a buffer produced by [`reassemble`].
///
/// The header is read first and used to size the output buffer; it is not
/// checked against the actual output length. The remaining bytes must form a
/// complete raw DEFLATE stream, up to and including its final block.
///
/// # Errors
///
/// Returns [`ExtractError::Decompress`] if the buffer is shorter than the
/// header, the deflate data is corrupt, or input runs out before the final
/// block.
pub fn inflate(framed: &[u8]) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(framed);
    let expected = cursor
        .read_u32::<BigEndian>()
        .map_err(ExtractError::Decompress)?;

    let mut out = Vec::with_capacity((expected as usize).min(MAX_CAPACITY_HINT));
    let mut decoder = DeflateDecoder::new(cursor);
    decoder
        .read_to_end(&mut out)
        .map_err(ExtractError::Decompress)?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::DeflateEncoder;
    use std::io::Write;

    fn deflate(data: &[u8]) -> Vec<u8> {
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn header_is_big_endian_size() {
        let framed = reassemble(&[0xAA, 0xBB], 131072);
        assert_eq!(framed, vec![0x00, 0x02, 0x00, 0x00, 0xAA, 0xBB]);
    }

    #[test]
    fn reassemble_empty_slice_is_header_only() {
        assert_eq!(reassemble(&[], 1), vec![0, 0, 0, 1]);
    }

    #[test]
    fn inflates_raw_deflate_after_header() {
        let text = b"some packed javascript {\"cfCoreApiKey\":\"k\"}".repeat(20);
        let framed = reassemble(&deflate(&text), 131072);
        assert_eq!(inflate(&framed).unwrap(), text);
    }

    #[test]
    fn header_value_does_not_have_to_match_output() {
        let framed = reassemble(&deflate(b"hello"), u32::MAX);
        assert_eq!(inflate(&framed).unwrap(), b"hello");
    }

    #[test]
    fn corrupt_stream_is_decompress_error() {
        // BTYPE=11 is a reserved block type.
        let framed = reassemble(&[0xFF, 0xFF, 0xFF, 0xFF], 131072);
        assert!(matches!(inflate(&framed), Err(ExtractError::Decompress(_))));
    }

    #[test]
    fn truncated_stream_is_decompress_error() {
        // xorshift noise so the encoder cannot collapse the input
        let mut state = 0x2545_F491_u32;
        let noise: Vec<u8> = (0..200_000)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                state as u8
            })
            .collect();

        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::fast());
        encoder.write_all(&noise).unwrap();
        let compressed = encoder.finish().unwrap();
        let cut = &compressed[..compressed.len() / 2];

        let framed = reassemble(cut, 131072);
        assert!(matches!(inflate(&framed), Err(ExtractError::Decompress(_))));
    }

    #[test]
    fn short_buffer_is_decompress_error() {
        assert!(matches!(inflate(&[0x00, 0x02]), Err(ExtractError::Decompress(_))));
    }
}
