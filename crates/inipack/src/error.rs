use thiserror::Error;

/// A configuration that could not be built.
///
/// Every error is detected by the sizing pass, before anything is packed, so
/// a failed parse never leaves a partially built configuration behind.
/// `line` and `column` are 1-based; the column counts bytes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct ParseError {
    pub(crate) kind: ErrorKind,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl ParseError {
    pub(crate) const fn new(kind: ErrorKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }

    /// What went wrong.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Line of the offending input.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Byte column of the offending input within its line.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }
}

/// The reason a configuration was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// `[` opened without a closing `]` on the same line.
    #[error("unterminated section header")]
    BadSectionHeader,
    /// Whitespace inside a key followed by more key bytes, or a line with
    /// no `=`.
    #[error("invalid key")]
    InvalidKey,
    /// `=` followed by nothing but whitespace.
    #[error("missing value")]
    MissingValue,
    /// The packed configuration would outgrow `ParserOptions::max_packed_len`.
    #[error("packed configuration needs at least {required} bytes, limit is {limit}")]
    CapacityExceeded {
        /// Bytes needed up to and including the offending line.
        required: usize,
        /// The configured limit.
        limit: usize,
    },
}

impl ErrorKind {
    /// A static description, usable where formatting is not (const panics).
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            ErrorKind::BadSectionHeader => "unterminated section header",
            ErrorKind::InvalidKey => "invalid key",
            ErrorKind::MissingValue => "missing value",
            ErrorKind::CapacityExceeded { .. } => "packed configuration exceeds its size limit",
        }
    }
}
