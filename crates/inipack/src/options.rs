/// Configuration options for run-time parsing.
///
/// # Examples
///
/// ```rust
/// use inipack::{ErrorKind, Ini, ParserOptions};
///
/// let options = ParserOptions {
///     max_packed_len: Some(16),
/// };
/// let err = Ini::parse_with(b"name=a rather long value\n", options).unwrap_err();
/// assert!(matches!(err.kind(), ErrorKind::CapacityExceeded { .. }));
/// ```
///
/// # Default
///
/// No limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Upper bound on the size of the packed buffer, in bytes.
    ///
    /// Devices that reserve a fixed budget for configuration can reject
    /// oversized input up front instead of discovering it after allocating.
    /// The check runs during the sizing pass and reports the line that
    /// crossed the limit.
    ///
    /// # Default
    ///
    /// `None`
    pub max_packed_len: Option<usize>,
}

impl ParserOptions {
    pub(crate) const fn limit(&self) -> usize {
        match self.max_packed_len {
            Some(limit) => limit,
            None => usize::MAX,
        }
    }
}
