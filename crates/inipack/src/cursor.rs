use core::{cmp::Ordering, fmt, iter::FusedIterator};

use bstr::{BStr, ByteSlice};

use crate::packed::{TAG_PAIR, TAG_SECTION, TERMINATOR};

/// One key-value pair, borrowed from a packed configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Record<'a> {
    /// The enclosing section, or `None` for pairs before the first header.
    pub section: Option<&'a BStr>,
    /// The trimmed key.
    pub key: &'a BStr,
    /// The trimmed value; never empty.
    pub value: &'a BStr,
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(section) = self.section {
            write!(f, "[{section}] ")?;
        }
        write!(f, "{}={}", self.key, self.value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Record<'_> {
    fn serialize<Z: serde::Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        use serde::ser::SerializeStruct;

        /// Strings when the bytes are UTF-8, byte arrays otherwise.
        struct Text<'a>(&'a BStr);

        impl serde::Serialize for Text<'_> {
            fn serialize<Z: serde::Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
                match self.0.to_str() {
                    Ok(text) => serializer.serialize_str(text),
                    Err(_) => serializer.serialize_bytes(self.0),
                }
            }
        }

        let mut record = serializer.serialize_struct("Record", 3)?;
        record.serialize_field("section", &self.section.map(Text))?;
        record.serialize_field("key", &Text(self.key))?;
        record.serialize_field("value", &Text(self.value))?;
        record.end()
    }
}

/// Reads a NUL-terminated run starting at `at`; returns it and the offset
/// just past the terminator.
fn read_terminated(packed: &[u8], at: usize) -> Option<(&BStr, usize)> {
    let rest = packed.get(at..)?;
    let len = rest.find_byte(TERMINATOR)?;
    Some((rest[..len].as_bstr(), at + len + 1))
}

/// A position in a packed configuration.
///
/// A cursor always rests on a key-value pair, having already absorbed any
/// section markers in front of it, or on the end of the buffer. Cursors are
/// cheap to copy and never modify the configuration.
///
/// Cursors from the same configuration are ordered by buffer position; at an
/// equal position the end state sorts last. Comparing cursors from different
/// configurations is meaningless.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    packed: &'a [u8],
    pos: usize,
    section: Option<&'a BStr>,
    current: Option<Record<'a>>,
    next: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(packed: &'a [u8], pos: usize) -> Self {
        let mut cursor = Self {
            packed,
            pos,
            section: None,
            current: None,
            next: pos,
        };
        cursor.settle();
        cursor
    }

    /// Absorbs section markers at `pos`, then decodes the pair there.
    fn settle(&mut self) {
        while self.packed.get(self.pos) == Some(&TAG_SECTION) {
            match read_terminated(self.packed, self.pos + 1) {
                Some((name, next)) => {
                    self.section = Some(name);
                    self.pos = next;
                }
                None => break,
            }
        }

        self.current = None;
        if self.packed.get(self.pos) != Some(&TAG_PAIR) {
            return;
        }
        let Some((key, value_at)) = read_terminated(self.packed, self.pos + 1) else {
            return;
        };
        let Some((value, next)) = read_terminated(self.packed, value_at) else {
            return;
        };
        self.current = Some(Record {
            section: self.section,
            key,
            value,
        });
        self.next = next;
    }

    /// The record under the cursor, or `None` at the end.
    #[must_use]
    pub fn record(&self) -> Option<Record<'a>> {
        self.current
    }

    /// Whether the cursor has run off the last record.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Byte offset of the cursor in the packed buffer.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves to the next record. Does nothing at the end.
    pub fn advance(&mut self) {
        if self.current.is_some() {
            self.pos = self.next;
            self.settle();
        }
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.pos)
            .field("record", &self.current)
            .finish()
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.is_end() == other.is_end()
    }
}

impl Eq for Cursor<'_> {}

impl PartialOrd for Cursor<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cursor<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pos
            .cmp(&other.pos)
            .then(self.is_end().cmp(&other.is_end()))
    }
}

/// Records in `[begin, end)`, in source order.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    cursor: Cursor<'a>,
    end: Cursor<'a>,
}

impl<'a> Records<'a> {
    pub(crate) fn new(begin: Cursor<'a>, end: Cursor<'a>) -> Self {
        Self { cursor: begin, end }
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.end {
            return None;
        }
        let record = self.cursor.record()?;
        self.cursor.advance();
        Some(record)
    }
}

impl FusedIterator for Records<'_> {}
