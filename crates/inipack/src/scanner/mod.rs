//! Scanner: the one place that decides what a line means.
//!
//! Both the sizing pass and the packing pass walk the input through
//! [`Lines`], so a line is classified identically each time it is seen. If
//! the two passes ever disagreed, the packed buffer would be over- or
//! under-filled; keeping a single classifier makes that impossible.
//!
//! Everything here is a `const fn` so the same code validates configuration
//! embedded with [`ini!`](crate::ini) during compilation and text parsed at
//! startup.
//!
//! Rules
//! - Input ends at the end of the slice or at the first NUL byte.
//! - Lines end at `\n` or end of input. `\r` is ordinary whitespace.
//! - Whitespace is any non-graphic byte: `0x00..=0x20` and `0x7F`. Bytes
//!   `0x80` and above are graphic, so UTF-8 passes through untouched.
//! - The first graphic byte decides the line kind: `;` or `#` comment, `[`
//!   section header, anything else a `key=value` pair.
//!
//! Spans are byte offsets into the original input, never copies.

use crate::error::{ErrorKind, ParseError};

#[cfg(test)]
mod tests;

/// A half-open byte range into the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn len(self) -> usize {
        self.end - self.start
    }
}

/// One classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line {
    /// Blank or comment.
    Skip,
    /// `[name]`; the span excludes the brackets.
    Section { name: Span },
    /// `key=value`, both trimmed.
    Pair { key: Span, value: Span },
}

/// A syntax error at an absolute input offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fault {
    pub kind: ErrorKind,
    pub offset: usize,
}

#[inline]
pub(crate) const fn is_graph(b: u8) -> bool {
    b > b' ' && b != 0x7F
}

/// Length of the logical input: up to the first NUL, or all of it.
pub(crate) const fn input_len(src: &[u8]) -> usize {
    let mut i = 0;
    while i < src.len() && src[i] != 0 {
        i += 1;
    }
    i
}

const fn line_end(src: &[u8], start: usize, end: usize) -> usize {
    let mut i = start;
    while i < end && src[i] != b'\n' {
        i += 1;
    }
    i
}

/// Classifies the line `src[start..eol]`. `eol` must not exceed the input
/// length and the range must not contain `\n`.
pub(crate) const fn classify(src: &[u8], start: usize, eol: usize) -> Result<Line, Fault> {
    let mut p = start;
    while p < eol && !is_graph(src[p]) {
        p += 1;
    }
    if p == eol || src[p] == b';' || src[p] == b'#' {
        return Ok(Line::Skip);
    }

    if src[p] == b'[' {
        let mut close = p + 1;
        while close < eol && src[close] != b']' {
            close += 1;
        }
        if close == eol {
            return Err(Fault {
                kind: ErrorKind::BadSectionHeader,
                offset: p,
            });
        }
        return Ok(Line::Section {
            name: Span {
                start: p + 1,
                end: close,
            },
        });
    }

    // Key: graphic bytes, then optionally whitespace, up to `=`.
    let key_start = p;
    let mut key_end = p;
    let mut key_closed = false;
    while p < eol && src[p] != b'=' {
        if !key_closed {
            if is_graph(src[p]) {
                key_end = p + 1;
            } else {
                key_closed = true;
            }
        } else if is_graph(src[p]) {
            return Err(Fault {
                kind: ErrorKind::InvalidKey,
                offset: p,
            });
        }
        p += 1;
    }
    if p == eol {
        return Err(Fault {
            kind: ErrorKind::InvalidKey,
            offset: p,
        });
    }

    let eq = p;
    let mut value_start = eq + 1;
    while value_start < eol && !is_graph(src[value_start]) {
        value_start += 1;
    }
    if value_start == eol {
        return Err(Fault {
            kind: ErrorKind::MissingValue,
            offset: eq,
        });
    }
    // src[value_start] is graphic, so this stops before crossing it.
    let mut value_end = eol;
    while !is_graph(src[value_end - 1]) {
        value_end -= 1;
    }

    Ok(Line::Pair {
        key: Span {
            start: key_start,
            end: key_end,
        },
        value: Span {
            start: value_start,
            end: value_end,
        },
    })
}

/// Walks the input line by line.
///
/// Not an [`Iterator`]: trait methods cannot be called from `const fn`.
#[derive(Debug, Clone)]
pub(crate) struct Lines<'src> {
    src: &'src [u8],
    end: usize,
    pos: usize,
    line: usize,
}

impl<'src> Lines<'src> {
    pub const fn new(src: &'src [u8]) -> Self {
        Self {
            src,
            end: input_len(src),
            pos: 0,
            line: 0,
        }
    }

    /// 1-based number of the line most recently returned by `next_line`.
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Classifies the next line, or returns `None` once the input is used up.
    pub const fn next_line(&mut self) -> Option<Result<Line, ParseError>> {
        if self.pos >= self.end {
            return None;
        }
        let start = self.pos;
        let eol = line_end(self.src, start, self.end);
        self.pos = eol + 1;
        self.line += 1;

        match classify(self.src, start, eol) {
            Ok(line) => Some(Ok(line)),
            Err(fault) => Some(Err(ParseError::new(
                fault.kind,
                self.line,
                fault.offset - start + 1,
            ))),
        }
    }
}
