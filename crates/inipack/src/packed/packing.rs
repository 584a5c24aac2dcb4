//! Second pass: write the packed entries.

use crate::{
    error::ParseError,
    scanner::{Line, Lines, Span},
};

use super::{TAG_PAIR, TAG_SECTION, TERMINATOR};

/// Packs `src` into `out` and returns the number of bytes written.
///
/// `out` must be at least as long as the `packed_len` reported by
/// [`measure`](super::sizing::measure) for the same input; a shorter buffer
/// panics on the first out-of-bounds write. Errors are only possible when
/// `src` was never measured, since measuring rejects the same lines.
#[doc(hidden)]
pub const fn pack_into(src: &[u8], out: &mut [u8]) -> Result<usize, ParseError> {
    let mut lines = Lines::new(src);
    let mut at = 0;

    while let Some(line) = lines.next_line() {
        match line {
            Err(err) => return Err(err),
            Ok(Line::Skip) => {}
            Ok(Line::Section { name }) => {
                out[at] = TAG_SECTION;
                at = put_terminated(src, name, out, at + 1);
            }
            Ok(Line::Pair { key, value }) => {
                out[at] = TAG_PAIR;
                at = put_terminated(src, key, out, at + 1);
                at = put_terminated(src, value, out, at);
            }
        }
    }

    out[at] = TERMINATOR;
    Ok(at + 1)
}

/// Packs `src` into an array of exactly `N` bytes at compile time.
///
/// `N` must be the measured `packed_len`; anything else fails evaluation.
#[doc(hidden)]
pub const fn pack_array<const N: usize>(src: &[u8]) -> [u8; N] {
    let mut out = [TERMINATOR; N];
    match pack_into(src, &mut out) {
        Ok(written) if written == N => out,
        Ok(_) => panic!("packed length differs from the measured length"),
        Err(err) => panic!("{}", err.kind().message()),
    }
}

const fn put_terminated(src: &[u8], span: Span, out: &mut [u8], mut at: usize) -> usize {
    let mut i = span.start;
    while i < span.end {
        out[at] = src[i];
        at += 1;
        i += 1;
    }
    out[at] = TERMINATOR;
    at + 1
}
