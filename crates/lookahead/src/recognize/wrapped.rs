//! Delimited literals with self-escaping or prefix-escaping delimiters.
//!
//! Two escaping disciplines are supported, selected by how the escape
//! character relates to the closing delimiter:
//!
//! - **Self-escaping** (`escape == right`): a doubled delimiter is literal
//!   content, `%a%%b%` reads as `a%%b`. Both characters of the pair are kept.
//! - **Prefix-escaping** (`escape != right`): a delimiter directly after the
//!   escape character is literal content, `"a\"b"` reads as `a\"b`. The
//!   escape character is kept as well; no unescaping happens here.

use alloc::string::String;

use crate::{Pushback, ScanError};

/// Delimiters and escape character of a wrapped literal.
///
/// ```rust
/// use lookahead::{Recognize, Scanner, StrSource, Wrapping};
///
/// let mut scanner = Scanner::new(StrSource::new("[a]b] rest"));
/// let brackets = Wrapping::pair('[', ']').with_escape(Some('a'));
/// assert_eq!(scanner.read_wrapped(brackets)?.as_deref(), Some("a]b"));
/// # Ok::<(), lookahead::ScanError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrapping {
    left: char,
    right: char,
    escape: Option<char>,
    restore_on_mismatch: bool,
}

impl Wrapping {
    /// The same character opens and closes the literal and escapes itself
    /// by doubling.
    ///
    /// The opening delimiter does not escape the character after it, so
    /// `%%a%` reads as the empty literal and leaves `a%` in the stream.
    /// Readers that treat the opener as a preceding escape return `%a`
    /// here instead.
    #[must_use]
    pub const fn new(delimiter: char) -> Self {
        Self {
            left: delimiter,
            right: delimiter,
            escape: Some(delimiter),
            restore_on_mismatch: false,
        }
    }

    /// Distinct opening and closing delimiters without an escape character.
    ///
    /// If `left == right` this is the same as [`Wrapping::new`].
    #[must_use]
    pub const fn pair(left: char, right: char) -> Self {
        Self {
            left,
            right,
            escape: if left == right { Some(left) } else { None },
            restore_on_mismatch: false,
        }
    }

    /// Replaces the escape character. `None` disables escaping.
    #[must_use]
    pub const fn with_escape(mut self, escape: Option<char>) -> Self {
        self.escape = escape;
        self
    }

    /// Whether a character that does not match the opening delimiter is
    /// pushed back.
    ///
    /// By default the mismatching character is consumed, as in the classic
    /// pushback reader this scanner reproduces. Set to `true` for a
    /// recognizer with zero net consumption on a miss.
    #[must_use]
    pub const fn restore_on_mismatch(mut self, restore: bool) -> Self {
        self.restore_on_mismatch = restore;
        self
    }

    /// Opening delimiter.
    #[must_use]
    pub const fn left(&self) -> char {
        self.left
    }

    /// Closing delimiter.
    #[must_use]
    pub const fn right(&self) -> char {
        self.right
    }

    /// Escape character, if any.
    #[must_use]
    pub const fn escape(&self) -> Option<char> {
        self.escape
    }

    fn is_self_escaping(&self) -> bool {
        self.escape == Some(self.right)
    }
}

pub(crate) fn read_wrapped<P: Pushback + ?Sized>(
    src: &mut P,
    wrapping: Wrapping,
) -> Result<Option<String>, ScanError> {
    let opening = src.read()?;
    if opening != Some(wrapping.left) {
        if wrapping.restore_on_mismatch {
            src.unread(opening)?;
        }
        return Ok(None);
    }

    let mut text = String::new();
    // The opening delimiter never escapes the first content character.
    let mut prev: Option<char> = None;
    loop {
        let Some(next) = src.read()? else {
            tracing::debug!(delimiter = %wrapping.right, "unterminated wrapped literal");
            return Err(ScanError::Unterminated {
                delimiter: wrapping.right,
            });
        };

        let escaped = prev.is_some() && prev == wrapping.escape;
        if next == wrapping.right && !escaped {
            // A doubled delimiter is content: leave the second one in the
            // stream, it is appended on the next turn because `prev` then
            // equals the escape.
            if !wrapping.is_self_escaping() || src.peek()? != Some(next) {
                break;
            }
        }

        text.push(next);
        prev = Some(next);
    }

    Ok(Some(text))
}
