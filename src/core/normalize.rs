//! Byte-level CRLF to LF conversion.
//!
//! Content is never decoded: the only structure recognized is the two-byte
//! sequence `\r\n`. Matches are non-overlapping and scanned left to right, so
//! `"\r\r\n"` becomes `"\r\n"` after a single pass. Lone `\r` and lone `\n`
//! bytes are kept as they are.

use std::borrow::Cow;

const CRLF: &[u8] = b"\r\n";

/// Number of `\r\n` pairs in `input`.
pub fn count_crlf(input: &[u8]) -> usize {
    input.windows(CRLF.len()).filter(|w| *w == CRLF).count()
}

/// Replace every `\r\n` in `input` with `\n`.
///
/// Borrows `input` when it contains no CRLF.
pub fn crlf_to_lf(input: &[u8]) -> Cow<'_, [u8]> {
    if !input.windows(CRLF.len()).any(|w| w == CRLF) {
        return Cow::Borrowed(input);
    }

    let mut out = Vec::with_capacity(input.len());
    let mut i = 0usize;
    while i < input.len() {
        let b = input[i];
        if b == b'\r' && input.get(i + 1) == Some(&b'\n') {
            out.push(b'\n');
            i += 2;
            continue;
        }
        out.push(b);
        i += 1;
    }
    Cow::Owned(out)
}
