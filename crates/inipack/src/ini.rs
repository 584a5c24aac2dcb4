use alloc::{boxed::Box, vec};
use core::{fmt, ops::Index};

use bstr::{BStr, ByteSlice};
use log::{debug, trace};

use crate::{
    cursor::{Cursor, Record, Records},
    error::ParseError,
    numbers::{Lenient, parse_lenient},
    options::ParserOptions,
    packed::{packing::pack_into, sizing::measure},
    section::Section,
};

/// A parsed, read-only INI configuration.
///
/// All section names, keys and values live in one packed byte buffer `S`;
/// records and lookup results borrow from it. `Ini<Box<[u8]>>` is built at
/// run time with [`Ini::parse`]; `Ini<&'static [u8]>` is built at compile
/// time with [`ini!`](crate::ini).
///
/// Lookups never fail: a missing key reads as the empty value, which no
/// parsed value can be.
///
/// ```rust
/// use inipack::Ini;
///
/// let ini = Ini::parse("; comment\n[a]\nx=1\n[b]\ny=2\n")?;
/// assert_eq!(ini.len(), 2);
/// assert_eq!(ini.get_in("a", "x"), "1");
/// assert_eq!(ini.get_in("b", "x"), "");
/// assert_eq!(ini.get_as::<u16>("y"), 2);
/// # Ok::<(), inipack::ParseError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ini<S = Box<[u8]>> {
    packed: S,
    len: usize,
}

impl Ini {
    /// Parses configuration text.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed line; see [`ErrorKind`](crate::ErrorKind).
    pub fn parse(src: &str) -> Result<Self, ParseError> {
        Self::parse_bytes(src.as_bytes())
    }

    /// Parses configuration bytes. Input ends at the first NUL, if any.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed line; see [`ErrorKind`](crate::ErrorKind).
    pub fn parse_bytes(src: &[u8]) -> Result<Self, ParseError> {
        Self::parse_with(src, ParserOptions::default())
    }

    /// Parses configuration bytes with explicit options.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed line, or when the packed form would
    /// exceed [`ParserOptions::max_packed_len`].
    ///
    /// # Panics
    ///
    /// Only if the packing pass disagrees with the sizing pass about the
    /// packed length, which is a bug in this crate.
    pub fn parse_with(src: &[u8], options: ParserOptions) -> Result<Self, ParseError> {
        let measured = measure(src, options.limit()).inspect_err(|err| {
            debug!("rejected configuration: {err}");
        })?;
        trace!(
            "measured {} pairs in {} sections, {} packed bytes",
            measured.pairs, measured.sections, measured.packed_len
        );

        let mut packed = vec![0u8; measured.packed_len].into_boxed_slice();
        let written = pack_into(src, &mut packed)?;
        assert_eq!(
            written, measured.packed_len,
            "packing wrote {written} bytes but sizing measured {}",
            measured.packed_len
        );

        debug!(
            "parsed configuration: {} pairs, {} bytes packed from {} bytes of input",
            measured.pairs,
            measured.packed_len,
            src.len()
        );
        Ok(Self {
            packed,
            len: measured.pairs,
        })
    }
}

impl Ini<&'static [u8]> {
    /// Wraps a buffer packed at compile time. Used by [`ini!`](crate::ini).
    #[doc(hidden)]
    #[must_use]
    pub const fn from_packed_static(packed: &'static [u8], len: usize) -> Self {
        Self { packed, len }
    }
}

impl<S: AsRef<[u8]>> Ini<S> {
    /// Number of key-value pairs. Section headers are not counted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the configuration has no key-value pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The packed buffer, including its trailing terminator.
    #[must_use]
    pub fn packed(&self) -> &[u8] {
        self.packed.as_ref()
    }

    /// A cursor on the first record.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self.packed(), 0)
    }

    /// The cursor one past the last record.
    #[must_use]
    pub fn end_cursor(&self) -> Cursor<'_> {
        Cursor::new(self.packed(), self.packed().len().saturating_sub(1))
    }

    /// All records in source order.
    #[must_use]
    pub fn iter(&self) -> Records<'_> {
        Records::new(self.cursor(), self.end_cursor())
    }

    /// Cursor on the first record of `section`, or the end cursor if no
    /// record belongs to it.
    #[must_use]
    pub fn section_begin(&self, section: &str) -> Cursor<'_> {
        let name = section.as_bytes();
        let mut cursor = self.cursor();
        while let Some(record) = cursor.record() {
            if record.section.is_some_and(|s| s == name) {
                break;
            }
            cursor.advance();
        }
        cursor
    }

    /// Cursor on the first record after the first run of `section`.
    #[must_use]
    pub fn section_end(&self, section: &str) -> Cursor<'_> {
        Self::run_end(self.section_begin(section), section)
    }

    fn run_end<'a>(mut cursor: Cursor<'a>, section: &str) -> Cursor<'a> {
        let name = section.as_bytes();
        while let Some(record) = cursor.record() {
            if !record.section.is_some_and(|s| s == name) {
                break;
            }
            cursor.advance();
        }
        cursor
    }

    /// The records of the first run of `section`.
    ///
    /// A section that is opened again later in the input is not merged: the
    /// view covers the records from its first header up to the next header.
    /// Empty when no record belongs to `section`.
    #[must_use]
    pub fn section(&self, section: &str) -> Section<'_> {
        let begin = self.section_begin(section);
        Section::new(begin, Self::run_end(begin, section))
    }

    /// Value of the first record with key `key`, in any section, or the empty
    /// value.
    #[must_use]
    pub fn get(&self, key: &str) -> &BStr {
        find(self.iter(), key)
    }

    /// Value of `key` within the view of `section`, or the empty value.
    #[must_use]
    pub fn get_in(&self, section: &str, key: &str) -> &BStr {
        self.section(section).get(key)
    }

    /// [`get`](Self::get) converted with [`parse_lenient`]; zero when absent.
    #[must_use]
    pub fn get_as<T: Lenient>(&self, key: &str) -> T {
        parse_lenient(self.get(key))
    }

    /// [`get_in`](Self::get_in) converted with [`parse_lenient`]; zero when
    /// absent.
    #[must_use]
    pub fn get_in_as<T: Lenient>(&self, section: &str, key: &str) -> T {
        parse_lenient(self.get_in(section, key))
    }

    /// Whether some record has key `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        !self.get(key).is_empty()
    }

    /// Whether the view of `section` has a record with key `key`.
    #[must_use]
    pub fn contains_in(&self, section: &str, key: &str) -> bool {
        !self.get_in(section, key).is_empty()
    }
}

pub(crate) fn find<'a>(mut records: Records<'a>, key: &str) -> &'a BStr {
    records
        .find(|record| record.key == key.as_bytes())
        .map_or(b"".as_bstr(), |record| record.value)
}

impl<'a, S: AsRef<[u8]>> IntoIterator for &'a Ini<S> {
    type Item = Record<'a>;
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<[u8]>> Index<&str> for Ini<S> {
    type Output = BStr;

    fn index(&self, key: &str) -> &BStr {
        self.get(key)
    }
}

impl<S: AsRef<[u8]>> Index<(&str, &str)> for Ini<S> {
    type Output = BStr;

    fn index(&self, (section, key): (&str, &str)) -> &BStr {
        self.get_in(section, key)
    }
}

impl<S: AsRef<[u8]>> fmt::Debug for Ini<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl<S: AsRef<[u8]>> serde::Serialize for Ini<S> {
    fn serialize<Z: serde::Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        serializer.collect_seq(self.iter())
    }
}
