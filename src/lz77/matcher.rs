use log::debug;

use super::token::Token;
use crate::error::SqueezeError;

/// How far back a match may reach.
pub const WINDOW_SIZE: usize = 4096;
/// Longest run a single token may copy.
pub const MAX_MATCH: usize = 18;

/// Tokenize `input` with a longest-match search over the sliding window.
///
/// Candidates are scanned nearest-first and only strictly longer matches
/// replace the current best, so ties keep the smallest offset. The match
/// source may run past the match start (offset smaller than length): replay
/// copies from the growing output one byte at a time, so such tokens
/// reconstruct runs correctly.
pub fn tokenize(input: &[u8]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < input.len() {
        let search_start = i.saturating_sub(WINDOW_SIZE);
        let mut best_offset = 0;
        let mut best_length = 0;

        for j in (search_start..i).rev() {
            let mut length = 0;
            while length < MAX_MATCH
                && i + length < input.len()
                && input[j + length] == input[i + length]
            {
                length += 1;
            }
            if length > best_length {
                best_length = length;
                best_offset = i - j;
            }
            // No later (farther) candidate can beat a full-length match
            if best_length == MAX_MATCH {
                break;
            }
        }

        // The literal byte after the match, absent at exact end of input
        let literal = input.get(i + best_length).copied();
        tokens.push(Token {
            offset: best_offset as u16,
            length: best_length as u8,
            literal,
        });
        i += best_length + 1;
    }

    debug!(
        "tokenized {} input bytes into {} tokens",
        input.len(),
        tokens.len()
    );
    tokens
}

/// Replay a token sequence against a growing output buffer, reconstructing
/// the original bytes. A back-reference reaching before the start of the
/// output means the tokens did not come from the matcher.
pub fn replay(tokens: &[Token]) -> Result<Vec<u8>, SqueezeError> {
    let mut out: Vec<u8> = Vec::new();

    for token in tokens {
        if token.length > 0 {
            let offset = token.offset as usize;
            if offset == 0 || offset > out.len() {
                return Err(SqueezeError::MalformedContainer(format!(
                    "token back-reference of {} bytes exceeds {} bytes of output",
                    offset,
                    out.len()
                )));
            }
            let start = out.len() - offset;
            // Byte at a time: the copy may overlap the bytes it appends
            for k in 0..token.length as usize {
                let byte = out[start + k];
                out.push(byte);
            }
        }
        if let Some(literal) = token.literal {
            out.push(literal);
        }
    }
    Ok(out)
}
