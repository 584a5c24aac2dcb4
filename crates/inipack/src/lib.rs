//! INI configuration, validated and packed into a single read-only buffer.
//!
//! The input format is the classic one: optional `[section]` headers,
//! `key=value` lines, `;` or `#` comments, blank lines ignored. Parsing runs
//! two passes over the text: the first validates every line and measures the
//! packed size, the second writes section names, keys and values into a
//! buffer of exactly that size. Lookups then borrow straight from the
//! buffer.
//!
//! Both passes are `const fn`, so configuration can be checked and packed
//! while compiling, with no parsing and no allocation left for run time:
//!
//! ```rust
//! use inipack::{Ini, ini};
//!
//! static CONFIG: Ini<&[u8]> = ini!(
//!     "[uart]
//!      baud = 115200
//!      ; parity = even
//!      [led]
//!      pin = 13"
//! );
//!
//! assert_eq!(CONFIG.get_in_as::<u32>("uart", "baud"), 115_200);
//! assert!(!CONFIG.contains("parity"));
//! ```
//!
//! A malformed configuration fails the build:
//!
//! ```compile_fail
//! static BROKEN: inipack::Ini<&[u8]> = inipack::ini!("[unterminated\nkey=value");
//! ```
//!
//! When the text only exists at run time, [`Ini::parse`] does the same work
//! with one allocation.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod error;
mod ini;
mod numbers;
mod options;
mod packed;
mod scanner;
mod section;

#[cfg(test)]
mod tests;

pub use bstr::BStr;
pub use cursor::{Cursor, Record, Records};
pub use error::{ErrorKind, ParseError};
pub use ini::Ini;
pub use numbers::{Lenient, parse_lenient};
pub use options::ParserOptions;
pub use section::Section;

#[doc(hidden)]
pub mod __private {
    pub use crate::packed::{
        packing::pack_array,
        sizing::{Measure, measure},
    };
}

/// Validates and packs an INI string literal at compile time.
///
/// Expands to a constant expression of type `Ini<&'static [u8]>`, usable to
/// initialize a `static` or `const`. The argument can be any `&'static str`
/// constant expression, `include_str!` included. Malformed input is a
/// compile error naming the problem, e.g. `invalid key`.
///
/// ```rust
/// use inipack::ini;
///
/// let config = ini!("threshold = -2.5");
/// assert_eq!(config.get_as::<f32>("threshold"), -2.5);
/// assert_eq!(config.packed(), inipack::Ini::parse("threshold = -2.5")?.packed());
/// # Ok::<(), inipack::ParseError>(())
/// ```
#[macro_export]
macro_rules! ini {
    ($src:expr $(,)?) => {{
        const __INIPACK_SRC: &[u8] = {
            let src: &str = $src;
            src.as_bytes()
        };
        const __INIPACK_MEASURE: $crate::__private::Measure =
            match $crate::__private::measure(__INIPACK_SRC, usize::MAX) {
                Ok(measure) => measure,
                Err(err) => panic!("{}", err.kind().message()),
            };
        static __INIPACK_PACKED: [u8; __INIPACK_MEASURE.packed_len] =
            $crate::__private::pack_array::<{ __INIPACK_MEASURE.packed_len }>(__INIPACK_SRC);
        $crate::Ini::<&'static [u8]>::from_packed_static(&__INIPACK_PACKED, __INIPACK_MEASURE.pairs)
    }};
}
