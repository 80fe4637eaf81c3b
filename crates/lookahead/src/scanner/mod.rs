//! Scanner: a character source with a bounded pushback buffer.
//!
//! What it does
//! - Wraps one [`CharSource`] for its whole lifetime and serves
//!   [`Pushback::read`] from the pushback buffer first (most recently pushed
//!   character first), then from the source.
//! - Accepts characters back through [`Pushback::unread`] and friends, up to
//!   the capacity chosen at construction. The buffer never grows.
//! - Tracks the net number of characters consumed so callers can check that
//!   a failed recognition left the stream where it was.
//!
//! Invariants
//! - `pending() <= capacity()` at all times; an overflowing push-back is an
//!   error and leaves the buffer untouched.
//! - Characters pushed back as a sequence are replayed in sequence order.
//! - `unread(None)` is a no-op and does not change `offset()`.
//!
//! Resources
//! - The scanner owns its source. Dropping the scanner drops the source, and
//!   [`Scanner::into_inner`] hands it back once scanning is done. To keep
//!   ownership instead, pass `&mut source`; `&mut S` is a source too.
//!
//! ```rust
//! use lookahead::{Pushback, Recognize, Scanner, StrSource};
//!
//! let mut scanner = Scanner::new(StrSource::new("-17 apples"));
//! assert_eq!(scanner.read_signed_int()?, Some(-17));
//! scanner.skip_whitespace()?;
//! assert_eq!(scanner.peek()?, Some('a'));
//! assert_eq!(scanner.read_line()?.as_deref(), Some("apples"));
//! # Ok::<(), lookahead::ScanError>(())
//! ```

use crate::{
    CharSource, Pushback, ScanError, ScannerOptions, buffer::PushbackBuffer,
};

/// A look-ahead reader over a [`CharSource`].
#[derive(Debug, Clone)]
pub struct Scanner<S> {
    source: S,
    pending: PushbackBuffer,
    offset: usize,
}

impl<S: CharSource> Scanner<S> {
    /// Creates a scanner with the default options.
    pub fn new(source: S) -> Self {
        Self::with_options(source, ScannerOptions::default())
    }

    /// Creates a scanner whose pushback buffer holds at most `capacity`
    /// characters.
    pub fn with_capacity(source: S, capacity: usize) -> Self {
        Self::with_options(
            source,
            ScannerOptions {
                buffer_capacity: capacity,
            },
        )
    }

    /// Creates a scanner from explicit options.
    pub fn with_options(source: S, options: ScannerOptions) -> Self {
        tracing::trace!(capacity = options.buffer_capacity, "scanner created");
        Self {
            source,
            pending: PushbackBuffer::with_capacity(options.buffer_capacity),
            offset: 0,
        }
    }

    /// Maximum number of characters the pushback buffer can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.pending.capacity()
    }

    /// Number of characters currently waiting in the pushback buffer.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Net number of characters consumed: reads minus push-backs.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns a reference to the underlying source.
    ///
    /// Characters waiting in the pushback buffer are not visible through it.
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Returns a mutable reference to the underlying source.
    ///
    /// Reading from it directly skips the pushback buffer and the offset.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consumes the scanner and returns the underlying source.
    ///
    /// Pending pushed-back characters are discarded.
    pub fn into_inner(self) -> S {
        self.source
    }

    #[inline]
    fn retreat(&mut self, n: usize) {
        // Callers may push back characters that never came from this stream;
        // the offset saturates instead of wrapping.
        self.offset = self.offset.saturating_sub(n);
    }
}

impl<S: CharSource> Pushback for Scanner<S> {
    fn read(&mut self) -> Result<Option<char>, ScanError> {
        let next = match self.pending.pop() {
            Some(ch) => Some(ch),
            None => self.source.next_char()?,
        };
        if next.is_some() {
            self.offset += 1;
        }
        Ok(next)
    }

    fn unread(&mut self, ch: Option<char>) -> Result<(), ScanError> {
        let Some(ch) = ch else {
            return Ok(());
        };
        self.pending.push(ch)?;
        self.retreat(1);
        Ok(())
    }

    fn unread_chars(&mut self, chars: &[char]) -> Result<(), ScanError> {
        self.pending.push_all(chars.iter().copied())?;
        self.retreat(chars.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests;
