//! Lenient decimal conversion for configuration values.
//!
//! Values are converted the way small embedded configuration readers
//! traditionally do it: an optional `-`, decimal digits, and for floating
//! point an optional `.` followed by more digits. Whatever follows is
//! ignored, and input with no leading digits converts to zero. Nothing here
//! fails.
//!
//! ```rust
//! use inipack::parse_lenient;
//!
//! assert_eq!(parse_lenient::<i32>(b"42abc"), 42);
//! assert_eq!(parse_lenient::<f64>(b"-3.5"), -3.5);
//! assert_eq!(parse_lenient::<u8>(b""), 0);
//! ```

/// Types a configuration value can be converted to with
/// [`parse_lenient`].
///
/// Implemented for every primitive integer and floating point type. Integer
/// conversion wraps on overflow, and a leading `-` on an unsigned type wraps
/// as well.
pub trait Lenient: Sized + sealed::Sealed {
    #[doc(hidden)]
    fn from_lenient(bytes: &[u8]) -> Self;
}

mod sealed {
    pub trait Sealed {}
}

/// Converts `bytes` to `T`, never failing.
#[must_use]
pub fn parse_lenient<T: Lenient>(bytes: &[u8]) -> T {
    T::from_lenient(bytes)
}

fn split_sign(bytes: &[u8]) -> (bool, &[u8]) {
    match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, bytes),
    }
}

fn leading_digits(bytes: &[u8]) -> (&[u8], &[u8]) {
    let n = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    bytes.split_at(n)
}

macro_rules! impl_lenient_int {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Lenient for $t {
            #[allow(clippy::cast_lossless, clippy::cast_possible_wrap, clippy::unnecessary_cast)]
            fn from_lenient(bytes: &[u8]) -> Self {
                let (negative, rest) = split_sign(bytes);
                let (digits, _) = leading_digits(rest);
                let magnitude = digits.iter().fold(0 as $t, |acc, d| {
                    acc.wrapping_mul(10).wrapping_add((d - b'0') as $t)
                });
                if negative { magnitude.wrapping_neg() } else { magnitude }
            }
        }
    )*};
}

macro_rules! impl_lenient_float {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Lenient for $t {
            fn from_lenient(bytes: &[u8]) -> Self {
                let (negative, rest) = split_sign(bytes);
                let (whole, rest) = leading_digits(rest);
                let mut value = whole
                    .iter()
                    .fold(0.0, |acc: $t, d| acc * 10.0 + <$t>::from(d - b'0'));
                if let Some((b'.', rest)) = rest.split_first() {
                    let (fraction, _) = leading_digits(rest);
                    let mut scale: $t = 0.1;
                    for d in fraction {
                        value += <$t>::from(d - b'0') * scale;
                        scale /= 10.0;
                    }
                }
                if negative { -value } else { value }
            }
        }
    )*};
}

impl_lenient_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_lenient_float!(f32, f64);
