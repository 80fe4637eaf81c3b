//! Token recognizers built on [`Pushback`].
//!
//! Every recognizer returns `Result<Option<T>, ScanError>`:
//! - `Ok(Some(value))` when the token was found and consumed,
//! - `Ok(None)` when it is not there; the stream is left where it was,
//! - `Err(_)` when the input is malformed (an unterminated literal, an
//!   integer out of range) or the pushback buffer is too small.
//!
//! The one exception to "left where it was" is
//! [`read_wrapped`](Recognize::read_wrapped), which consumes the first
//! character even when it is not the opening delimiter unless
//! [`Wrapping::restore_on_mismatch`] is set.
//!
//! The recognizers only ever call `read` and `unread`, so they work the same
//! over a [`Scanner`](crate::Scanner) and over any other `Pushback`
//! implementation.

mod lines;
mod literal;
mod numbers;
mod wrapped;

use alloc::string::String;

pub use wrapped::Wrapping;

use crate::{Pushback, ScanError};

const DOUBLE_QUOTE: char = '"';
const SINGLE_QUOTE: char = '\'';
const BACKSLASH: char = '\\';

/// Consumes characters while `predicate` holds and pushes the first
/// rejected one back.
pub(crate) fn collect_while<P, F>(src: &mut P, mut predicate: F) -> Result<String, ScanError>
where
    P: Pushback + ?Sized,
    F: FnMut(char) -> bool,
{
    let mut out = String::new();
    loop {
        match src.read()? {
            Some(ch) if predicate(ch) => out.push(ch),
            other => {
                src.unread(other)?;
                return Ok(out);
            }
        }
    }
}

/// Token recognizers available on every [`Pushback`] stream.
///
/// ```rust
/// use lookahead::{Recognize, Scanner, StrSource};
///
/// let mut scanner = Scanner::new(StrSource::new("\"a \\\"b\\\"\" true 42"));
/// assert_eq!(scanner.read_double_quoted()?.as_deref(), Some("a \\\"b\\\""));
/// scanner.skip_whitespace()?;
/// assert_eq!(scanner.read_boolean()?, Some(true));
/// scanner.skip_whitespace()?;
/// assert_eq!(scanner.read_unsigned_int()?, Some(42));
/// # Ok::<(), lookahead::ScanError>(())
/// ```
pub trait Recognize: Pushback {
    /// Reads a literal enclosed by the delimiters of `wrapping`.
    ///
    /// Returns the content between the delimiters with escape characters
    /// kept as they appear in the input.
    ///
    /// # Errors
    ///
    /// [`ScanError::Unterminated`] if the input ends before the closing
    /// delimiter.
    fn read_wrapped(&mut self, wrapping: Wrapping) -> Result<Option<String>, ScanError> {
        wrapped::read_wrapped(self, wrapping)
    }

    /// Reads a literal opened and closed by `delimiter`, where a doubled
    /// delimiter stands for itself.
    ///
    /// # Errors
    ///
    /// See [`read_wrapped`](Recognize::read_wrapped).
    fn read_wrapped_by(&mut self, delimiter: char) -> Result<Option<String>, ScanError> {
        wrapped::read_wrapped(self, Wrapping::new(delimiter))
    }

    /// Reads a `"`-quoted string in which `\"` does not close the string.
    ///
    /// # Errors
    ///
    /// See [`read_wrapped`](Recognize::read_wrapped).
    fn read_double_quoted(&mut self) -> Result<Option<String>, ScanError> {
        wrapped::read_wrapped(self, Wrapping::new(DOUBLE_QUOTE).with_escape(Some(BACKSLASH)))
    }

    /// Reads a `'`-quoted string in which `\'` does not close the string.
    ///
    /// # Errors
    ///
    /// See [`read_wrapped`](Recognize::read_wrapped).
    fn read_single_quoted(&mut self) -> Result<Option<String>, ScanError> {
        wrapped::read_wrapped(self, Wrapping::new(SINGLE_QUOTE).with_escape(Some(BACKSLASH)))
    }

    /// Reads a run of ASCII decimal digits.
    ///
    /// Unlike [`skip_whitespace`](Recognize::skip_whitespace), which follows
    /// Unicode, other decimal digits such as `'\u{663}'` end the run.
    ///
    /// # Errors
    ///
    /// Only errors from the underlying stream.
    fn read_digits(&mut self) -> Result<Option<String>, ScanError> {
        numbers::read_digits(self)
    }

    /// Reads an unsigned decimal integer. Leading zeros are allowed.
    ///
    /// # Errors
    ///
    /// [`ScanError::IntegerOverflow`] if the digits do not fit in a `u64`.
    fn read_unsigned_int(&mut self) -> Result<Option<u64>, ScanError> {
        numbers::read_unsigned_int(self)
    }

    /// Reads a decimal integer with an optional `+` or `-` sign.
    ///
    /// A sign that is not followed by a digit is left in the stream.
    ///
    /// # Errors
    ///
    /// [`ScanError::IntegerOverflow`] if the value does not fit in an `i64`.
    fn read_signed_int(&mut self) -> Result<Option<i64>, ScanError> {
        numbers::read_signed_int(self)
    }

    /// Reads the literal `true` or `false`.
    ///
    /// # Errors
    ///
    /// Only errors from the underlying stream or buffer.
    fn read_boolean(&mut self) -> Result<Option<bool>, ScanError> {
        literal::read_boolean(self)
    }

    /// Reads the literal `true`.
    ///
    /// # Errors
    ///
    /// Only errors from the underlying stream or buffer.
    fn read_true(&mut self) -> Result<Option<bool>, ScanError> {
        literal::read_true(self)
    }

    /// Reads the literal `false`.
    ///
    /// # Errors
    ///
    /// Only errors from the underlying stream or buffer.
    fn read_false(&mut self) -> Result<Option<bool>, ScanError> {
        literal::read_false(self)
    }

    /// Consumes `expected` if the stream continues with it, and reports
    /// whether it did. Nothing is consumed on a mismatch.
    ///
    /// # Errors
    ///
    /// Only errors from the underlying stream or buffer.
    fn read_literal(&mut self, expected: &str) -> Result<bool, ScanError> {
        literal::read_literal(self, expected)
    }

    /// Reads up to the next `\n`, `\r`, or end of input.
    ///
    /// The terminator is consumed but not returned. Returns `None` only at
    /// end of input; an empty line is `Some("")`. Nothing is read past the
    /// terminator, so `\r\n` ends one line and then an empty one.
    ///
    /// # Errors
    ///
    /// Only errors from the underlying stream or buffer.
    fn read_line(&mut self) -> Result<Option<String>, ScanError> {
        lines::read_line(self)
    }

    /// Reads a run of non-whitespace characters.
    ///
    /// # Errors
    ///
    /// Only errors from the underlying stream or buffer.
    fn read_token(&mut self) -> Result<Option<String>, ScanError> {
        lines::read_token(self)
    }

    /// Skips whitespace, leaving the next non-whitespace character unread.
    ///
    /// # Errors
    ///
    /// Only errors from the underlying stream or buffer.
    fn skip_whitespace(&mut self) -> Result<(), ScanError> {
        lines::skip_whitespace(self)
    }

    /// Skips lines that are empty or contain only whitespace.
    ///
    /// The first non-blank line is pushed back together with a line feed, so
    /// the next [`read_line`](Recognize::read_line) returns it unchanged.
    ///
    /// # Errors
    ///
    /// [`ScanError::PushbackOverflow`] if that line is longer than the
    /// buffer capacity minus one.
    fn skip_blank_lines(&mut self) -> Result<(), ScanError> {
        lines::skip_blank_lines(self)
    }
}

impl<P: Pushback + ?Sized> Recognize for P {}
