/// Default number of characters the pushback buffer can hold.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Configuration options for a [`Scanner`](crate::Scanner).
///
/// # Examples
///
/// ```rust
/// use lookahead::{Scanner, ScannerOptions, StrSource};
///
/// let options = ScannerOptions { buffer_capacity: 256 };
/// let scanner = Scanner::with_options(StrSource::new("key = value"), options);
/// assert_eq!(scanner.capacity(), 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScannerOptions {
    /// Maximum number of characters that may be pending in the pushback
    /// buffer at the same time.
    ///
    /// The buffer never grows past this value. A push-back that would exceed
    /// it fails with [`ScanError::PushbackOverflow`]. Recognizers that push
    /// back whole lines, such as
    /// [`skip_blank_lines`](crate::Recognize::skip_blank_lines), need a
    /// capacity of at least the longest line plus one.
    ///
    /// [`ScanError::PushbackOverflow`]: crate::ScanError::PushbackOverflow
    ///
    /// # Default
    ///
    /// `8192`
    pub buffer_capacity: usize,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}
