//! A character reader with bounded pushback, and the token recognizers that
//! hand-written parsers of small text formats keep rewriting: quoted strings,
//! integers, booleans, lines, whitespace.
//!
//! [`Scanner`] wraps a [`CharSource`] and lets callers push characters back
//! (up to a capacity fixed at construction). Everything else is in
//! [`Recognize`], implemented for every [`Pushback`] stream.
//!
//! ```rust
//! use lookahead::{Recognize, Scanner, StrSource};
//!
//! let mut scanner = Scanner::new(StrSource::new("\n\n  \nname = 'lookahead'\n"));
//! scanner.skip_blank_lines()?;
//! assert_eq!(scanner.read_token()?.as_deref(), Some("name"));
//! scanner.skip_whitespace()?;
//! assert!(scanner.read_literal("=")?);
//! scanner.skip_whitespace()?;
//! assert_eq!(scanner.read_single_quoted()?.as_deref(), Some("lookahead"));
//! # Ok::<(), lookahead::ScanError>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod buffer;
mod error;
mod options;
mod pushback;
mod recognize;
mod scanner;
mod source;


pub use error::ScanError;
pub use options::{DEFAULT_BUFFER_CAPACITY, ScannerOptions};
pub use pushback::Pushback;
pub use recognize::{Recognize, Wrapping};
pub use scanner::Scanner;
#[cfg(feature = "std")]
pub use source::ReadSource;
pub use source::{CharSource, IterSource, StrSource};
