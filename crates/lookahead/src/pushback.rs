use alloc::vec::Vec;

use crate::ScanError;

/// A character stream that can take back characters it has handed out.
///
/// This is the only interface the recognizers in [`Recognize`] use, so any
/// implementor gets all of them. [`Scanner`] is the bounded implementation
/// provided by this crate.
///
/// End of input is `None`. Pushing back `None` is accepted and does nothing:
/// there is no character to replay, and the next read reaches the end of
/// input again on its own. This keeps `let c = s.read()?; s.unread(c)?;`
/// correct without special-casing the end of the stream.
///
/// [`Recognize`]: crate::Recognize
/// [`Scanner`]: crate::Scanner
pub trait Pushback {
    /// Returns the next character, replaying pushed-back characters first.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying source.
    fn read(&mut self) -> Result<Option<char>, ScanError>;

    /// Pushes `ch` back so that the next [`read`](Pushback::read) returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::PushbackOverflow`] when the buffer is full.
    fn unread(&mut self, ch: Option<char>) -> Result<(), ScanError>;

    /// Pushes back a sequence so that subsequent reads return `chars[0]`,
    /// `chars[1]`, and so on.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::PushbackOverflow`] when the sequence does not fit;
    /// in that case nothing is pushed back.
    fn unread_chars(&mut self, chars: &[char]) -> Result<(), ScanError>;

    /// Pushes back `text` so that it is read again in order.
    ///
    /// # Errors
    ///
    /// Same as [`unread_chars`](Pushback::unread_chars).
    fn unread_str(&mut self, text: &str) -> Result<(), ScanError> {
        let chars: Vec<char> = text.chars().collect();
        self.unread_chars(&chars)
    }

    /// Returns the next character without consuming it.
    ///
    /// Calling `peek` repeatedly with no read in between returns the same
    /// character each time.
    ///
    /// # Errors
    ///
    /// Propagates read errors, or an overflow if the buffer is already full.
    fn peek(&mut self) -> Result<Option<char>, ScanError> {
        let ch = self.read()?;
        self.unread(ch)?;
        Ok(ch)
    }
}

impl<P: Pushback + ?Sized> Pushback for &mut P {
    #[inline]
    fn read(&mut self) -> Result<Option<char>, ScanError> {
        (**self).read()
    }

    #[inline]
    fn unread(&mut self, ch: Option<char>) -> Result<(), ScanError> {
        (**self).unread(ch)
    }

    #[inline]
    fn unread_chars(&mut self, chars: &[char]) -> Result<(), ScanError> {
        (**self).unread_chars(chars)
    }

    #[inline]
    fn unread_str(&mut self, text: &str) -> Result<(), ScanError> {
        (**self).unread_str(text)
    }
}
