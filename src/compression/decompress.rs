use std::fs;

use log::{debug, info};

use super::compress::write_replacing;
use crate::bitstream::bitreader::BitReader;
use crate::compression::container::Container;
use crate::error::SqueezeError;
use crate::huffman_coding::tree::DecodeTree;
use crate::lz77::{matcher, token};

/// Expand container bytes back into the original input.
pub fn decompress_bytes(data: &[u8]) -> Result<Vec<u8>, SqueezeError> {
    // Parse and validate the whole container before producing any output.
    let container = Container::parse(data)?;
    debug!(
        "container holds {} code entries, {} payload bytes, {} valid bits",
        container.code_entries.len(),
        container.payload.len(),
        container.valid_bits
    );

    // Rebuild the code tree from the serialized table.
    let dtree = DecodeTree::from_codes(
        container
            .code_entries
            .iter()
            .map(|(symbol, code)| (*symbol, code.as_str())),
    )?;

    // Unpack the payload and walk it back into the token stream.
    let mut br = BitReader::new(&container.payload, container.valid_bits as usize);
    let token_bytes = dtree.decode(&mut br)?;
    debug!("decoded {} token stream bytes", token_bytes.len());

    // Replay the tokens against the growing output.
    let tokens = token::decode_tokens(&token_bytes)?;
    matcher::replay(&tokens)
}

/// Decompress the container at `input` into `output`.
pub fn decompress(input: &str, output: &str) -> Result<(), SqueezeError> {
    let data = fs::read(input).map_err(|_| SqueezeError::InputNotFound(input.to_string()))?;
    info!("Decompressing {} ({} bytes).", input, data.len());

    let restored = decompress_bytes(&data)?;
    write_replacing(output, &restored)?;
    info!("Restored {} bytes to {}.", restored.len(), output);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compression::compress::compress_bytes;

    fn round_trip(input: &[u8]) {
        let container = compress_bytes(input).expect("compression failed");
        let restored = decompress_bytes(&container).expect("decompression failed");
        assert_eq!(restored, input, "round trip changed the data");
    }

    #[test]
    fn round_trip_plain_text() {
        round_trip(b"The quick brown fox jumps over the lazy dog.");
    }

    #[test]
    fn round_trip_single_byte() {
        round_trip(b"A");
    }

    #[test]
    fn round_trip_single_repeated_byte() {
        round_trip(&vec![b'A'; 1000]);
    }

    #[test]
    fn round_trip_aaaa() {
        round_trip(b"AAAA");
    }

    #[test]
    fn round_trip_embedded_nul_and_delimiters() {
        // Bytes that broke the old delimited-text token format: NUL
        // literals, commas, semicolons, digits.
        round_trip(b"1,2;3\x00\x004;;,,\x0012345\x00");
    }

    #[test]
    fn round_trip_all_byte_values() {
        let input: Vec<u8> = (0u8..=255).collect();
        round_trip(&input);
    }

    #[test]
    fn round_trip_binary_blob() {
        // A deterministic pseudo-random blob, no repetition to speak of.
        let mut state = 0x2545_f491_4f6c_dd1du64;
        let input: Vec<u8> = (0..4096)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                (state >> 32) as u8
            })
            .collect();
        round_trip(&input);
    }

    #[test]
    fn round_trip_long_repetitive_text() {
        let input: Vec<u8> = b"squeeze me again and again! "
            .iter()
            .copied()
            .cycle()
            .take(10_000)
            .collect();
        round_trip(&input);
    }

    #[test]
    fn truncated_container_is_malformed() {
        let container = compress_bytes(b"truncate me, truncate me").unwrap();
        for keep in [0, 1, 3, 7, 11, container.len() - 1] {
            assert!(
                matches!(
                    decompress_bytes(&container[..keep]),
                    Err(SqueezeError::MalformedContainer(_))
                ),
                "prefix of {} bytes was not rejected",
                keep
            );
        }
    }

    #[test]
    fn corrupted_payload_is_detected_or_rejected() {
        // Flipping payload bits must never panic or read out of bounds;
        // whether it decodes to garbage tokens or fails cleanly depends on
        // where the flip lands, and both surface as MalformedContainer when
        // they fail.
        let container = compress_bytes(b"some ordinary input text").unwrap();
        let mut corrupt = container.clone();
        let last = corrupt.len() - 1;
        corrupt[last] ^= 0xff;
        let _ = decompress_bytes(&corrupt);
    }

    #[test]
    fn empty_container_is_malformed() {
        assert!(matches!(
            decompress_bytes(b""),
            Err(SqueezeError::MalformedContainer(_))
        ));
    }

    #[test]
    fn foreign_file_is_malformed() {
        assert!(matches!(
            decompress_bytes(b"this is not a squeeze container at all"),
            Err(SqueezeError::MalformedContainer(_))
        ));
    }
}
