//! The packed buffer format.
//!
//! A configuration is stored as one contiguous byte array. Entries follow
//! the source order of their lines:
//!
//! ```text
//! section marker   0x01 name 0x00
//! key-value pair   0x02 key 0x00 value 0x00
//! end              0x00
//! ```
//!
//! A pair belongs to the nearest section marker before it, or to no section
//! if none precedes it. The leading tag makes every entry self-describing, so
//! readers never need to replay the scanner. Keys and values cannot contain
//! NUL (it ends the input), and the tag is only ever read at an entry
//! boundary, so control bytes inside a value are harmless.
//!
//! The size of the array is computed by [`sizing::measure`] before anything
//! is written, and [`packing::pack_into`] fills exactly that many bytes.

pub(crate) mod packing;
pub(crate) mod sizing;

use crate::scanner::Span;

pub(crate) const TAG_SECTION: u8 = 0x01;
pub(crate) const TAG_PAIR: u8 = 0x02;
pub(crate) const TERMINATOR: u8 = 0x00;

/// The trailing terminator.
pub(crate) const END_LEN: usize = 1;

pub(crate) const fn section_len(name: Span) -> usize {
    1 + name.len() + 1
}

pub(crate) const fn pair_len(key: Span, value: Span) -> usize {
    1 + key.len() + 1 + value.len() + 1
}
