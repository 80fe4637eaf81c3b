//! Character sources a [`Scanner`](crate::Scanner) can read from.
//!
//! A source hands out one character per call and reports end of input with
//! `Ok(None)`. It never needs to support rewinding: every replay is served by
//! the scanner's pushback buffer.
//!
//! - [`StrSource`] reads from a borrowed `&str`.
//! - [`IterSource`] adapts any `Iterator<Item = char>`.
//! - [`ReadSource`] (feature `std`) decodes UTF-8 from a `std::io::BufRead`.

use core::str::Chars;

use crate::ScanError;

/// A blocking, sequential supplier of characters.
pub trait CharSource {
    /// Returns the next character, or `Ok(None)` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Implementations return an error when the input cannot be decoded or
    /// the underlying reader fails.
    fn next_char(&mut self) -> Result<Option<char>, ScanError>;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    #[inline]
    fn next_char(&mut self) -> Result<Option<char>, ScanError> {
        (**self).next_char()
    }
}

/// Reads characters from a string slice.
#[derive(Debug, Clone)]
pub struct StrSource<'src> {
    chars: Chars<'src>,
}

impl<'src> StrSource<'src> {
    /// Creates a source that yields the characters of `text`.
    #[must_use]
    pub fn new(text: &'src str) -> Self {
        Self {
            chars: text.chars(),
        }
    }

    /// The part of the input that has not been handed out yet.
    #[must_use]
    pub fn remaining(&self) -> &'src str {
        self.chars.as_str()
    }
}

impl CharSource for StrSource<'_> {
    #[inline]
    fn next_char(&mut self) -> Result<Option<char>, ScanError> {
        Ok(self.chars.next())
    }
}

/// Reads characters from any `char` iterator.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: I,
}

impl<I: Iterator<Item = char>> IterSource<I> {
    /// Wraps `iter`.
    pub fn new(iter: I) -> Self {
        Self { iter }
    }

    /// Returns the wrapped iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I: Iterator<Item = char>> CharSource for IterSource<I> {
    #[inline]
    fn next_char(&mut self) -> Result<Option<char>, ScanError> {
        Ok(self.iter.next())
    }
}

#[cfg(feature = "std")]
pub use self::io::ReadSource;

#[cfg(feature = "std")]
mod io {
    use std::io::{BufRead, BufReader, ErrorKind, Read};

    use super::CharSource;
    use crate::ScanError;

    /// Decodes UTF-8 characters from a buffered byte reader.
    ///
    /// Bytes are pulled one scalar value at a time, so the reader is never
    /// advanced past the last character handed out.
    ///
    /// ```rust
    /// use lookahead::{Recognize, ReadSource, Scanner};
    ///
    /// let bytes: &[u8] = "héllo wörld".as_bytes();
    /// let mut scanner = Scanner::new(ReadSource::new(bytes));
    /// assert_eq!(scanner.read_token()?.as_deref(), Some("héllo"));
    /// # Ok::<(), lookahead::ScanError>(())
    /// ```
    #[derive(Debug)]
    pub struct ReadSource<R> {
        reader: R,
        offset: usize,
    }

    impl<R: Read> ReadSource<BufReader<R>> {
        /// Wraps an unbuffered reader in a [`BufReader`].
        pub fn from_reader(reader: R) -> Self {
            Self::new(BufReader::new(reader))
        }
    }

    impl<R: BufRead> ReadSource<R> {
        /// Reads from an already buffered reader.
        pub fn new(reader: R) -> Self {
            Self { reader, offset: 0 }
        }

        /// Number of bytes consumed from the reader so far.
        #[must_use]
        pub fn byte_offset(&self) -> usize {
            self.offset
        }

        /// Returns a reference to the wrapped reader.
        pub fn get_ref(&self) -> &R {
            &self.reader
        }

        /// Returns the wrapped reader.
        pub fn into_inner(self) -> R {
            self.reader
        }

        fn next_byte(&mut self) -> Result<Option<u8>, ScanError> {
            loop {
                match self.reader.fill_buf() {
                    Ok([]) => return Ok(None),
                    Ok(buf) => {
                        let byte = buf[0];
                        self.reader.consume(1);
                        self.offset += 1;
                        return Ok(Some(byte));
                    }
                    Err(e) if e.kind() == ErrorKind::Interrupted => {}
                    Err(e) => return Err(e.into()),
                }
            }
        }

        fn invalid(start: usize) -> ScanError {
            tracing::debug!(offset = start, "invalid UTF-8 in byte source");
            ScanError::InvalidUtf8 { offset: start }
        }
    }

    /// Length of the UTF-8 sequence introduced by `lead`, if it is a valid
    /// leading byte.
    fn sequence_len(lead: u8) -> Option<usize> {
        match lead {
            0x00..=0x7F => Some(1),
            0xC2..=0xDF => Some(2),
            0xE0..=0xEF => Some(3),
            0xF0..=0xF4 => Some(4),
            _ => None,
        }
    }

    impl<R: BufRead> CharSource for ReadSource<R> {
        fn next_char(&mut self) -> Result<Option<char>, ScanError> {
            let start = self.offset;
            let Some(lead) = self.next_byte()? else {
                return Ok(None);
            };
            let len = sequence_len(lead).ok_or_else(|| Self::invalid(start))?;

            let mut seq = [lead, 0, 0, 0];
            for slot in &mut seq[1..len] {
                *slot = self.next_byte()?.ok_or_else(|| Self::invalid(start))?;
            }

            match bstr::decode_utf8(&seq[..len]) {
                (Some(ch), n) if n == len => Ok(Some(ch)),
                _ => Err(Self::invalid(start)),
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;

    #[test]
    fn str_source_reports_remaining() {
        let mut src = StrSource::new("xyz");
        assert_eq!(src.next_char().unwrap(), Some('x'));
        assert_eq!(src.remaining(), "yz");
    }

    #[test]
    fn iter_source_ends_with_none() {
        let mut src = IterSource::new("ab".chars());
        let mut seen = String::new();
        while let Some(ch) = src.next_char().unwrap() {
            seen.push(ch);
        }
        assert_eq!(seen, "ab");
        assert_eq!(src.next_char().unwrap(), None);
    }

    #[test]
    fn borrowed_source_keeps_position() {
        fn first<S: CharSource>(mut src: S) -> Option<char> {
            src.next_char().unwrap()
        }

        let mut src = StrSource::new("12");
        assert_eq!(first(&mut src), Some('1'));
        assert_eq!(src.next_char().unwrap(), Some('2'));
    }
}
