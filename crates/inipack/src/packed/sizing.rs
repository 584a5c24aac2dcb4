//! First pass: validate every line and measure the packed buffer.

use crate::{
    error::{ErrorKind, ParseError},
    scanner::{Line, Lines},
};

use super::{END_LEN, pair_len, section_len};

/// What the sizing pass learned about an input.
#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measure {
    /// Exact length of the packed buffer, trailing terminator included.
    pub packed_len: usize,
    /// Number of key-value pairs.
    pub pairs: usize,
    /// Number of section headers, reopened sections counted again.
    pub sections: usize,
}

/// Validates `src` and computes the size of its packed form.
///
/// Fails on the first malformed line, or as soon as the running size exceeds
/// `limit`.
#[doc(hidden)]
pub const fn measure(src: &[u8], limit: usize) -> Result<Measure, ParseError> {
    let mut lines = Lines::new(src);
    let mut measure = Measure {
        packed_len: END_LEN,
        pairs: 0,
        sections: 0,
    };

    while let Some(line) = lines.next_line() {
        match line {
            Err(err) => return Err(err),
            Ok(Line::Skip) => continue,
            Ok(Line::Section { name }) => {
                measure.packed_len += section_len(name);
                measure.sections += 1;
            }
            Ok(Line::Pair { key, value }) => {
                measure.packed_len += pair_len(key, value);
                measure.pairs += 1;
            }
        }
        if measure.packed_len > limit {
            return Err(capacity_exceeded(measure.packed_len, limit, lines.line()));
        }
    }

    // Only reachable with a limit too small for the end terminator alone.
    if measure.packed_len > limit {
        let line = if lines.line() == 0 { 1 } else { lines.line() };
        return Err(capacity_exceeded(measure.packed_len, limit, line));
    }
    Ok(measure)
}

const fn capacity_exceeded(required: usize, limit: usize, line: usize) -> ParseError {
    ParseError::new(ErrorKind::CapacityExceeded { required, limit }, line, 1)
}
