use alloc::string::String;

use thiserror::Error;

/// A hard failure raised while scanning.
///
/// A recognizer that simply does not find its pattern reports `Ok(None)`;
/// `ScanError` is reserved for input that cannot be scanned at all or for a
/// violated capacity contract. After an error the position of the underlying
/// source is unspecified and the scanner should not be reused without
/// re-synchronizing.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScanError {
    /// End of input was reached inside a wrapped literal.
    #[error("unexpected end of input, expected closing '{delimiter}'")]
    Unterminated {
        /// The closing delimiter that was never found.
        delimiter: char,
    },
    /// A push-back would hold more characters than the buffer capacity.
    #[error("pushback buffer overflow: {requested} pending characters exceed capacity {capacity}")]
    PushbackOverflow {
        /// Configured capacity of the pushback buffer.
        capacity: usize,
        /// Number of pending characters the push-back would have required.
        requested: usize,
    },
    /// A digit run does not fit the requested integer type.
    #[error("integer literal {digits} is out of range")]
    IntegerOverflow {
        /// The digits as they appeared in the input, sign included.
        digits: String,
    },
    /// The byte source contained a malformed or truncated UTF-8 sequence.
    #[error("invalid UTF-8 sequence at byte offset {offset}")]
    InvalidUtf8 {
        /// Byte offset of the first byte of the offending sequence.
        offset: usize,
    },
    /// The underlying reader failed.
    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
