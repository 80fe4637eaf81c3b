#![allow(missing_docs)]

use std::io::{self, Cursor, Read};

use lookahead::{CharSource, Pushback, ReadSource, Recognize, ScanError, Scanner, ScannerOptions};

/// Hands out one byte per `read` call, so multi-byte characters always
/// straddle buffer refills.
struct Trickle<'a> {
    bytes: &'a [u8],
    interrupt_next: bool,
}

impl<'a> Trickle<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            interrupt_next: true,
        }
    }
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.interrupt_next {
            self.interrupt_next = false;
            return Err(io::ErrorKind::Interrupted.into());
        }
        self.interrupt_next = true;
        match self.bytes.split_first() {
            Some((&first, rest)) if !buf.is_empty() => {
                buf[0] = first;
                self.bytes = rest;
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

struct Broken;

impl Read for Broken {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("disk on fire"))
    }
}

#[test]
fn scans_config_from_cursor() {
    let text = "\n# comment\n\nport = 8080\nname = \"srv \\\"main\\\"\"\ndebug = false\n";
    let mut s = Scanner::new(ReadSource::new(Cursor::new(text)));

    s.skip_blank_lines().unwrap();
    assert_eq!(s.read_line().unwrap().as_deref(), Some("# comment"));

    s.skip_blank_lines().unwrap();
    assert_eq!(s.read_token().unwrap().as_deref(), Some("port"));
    s.skip_whitespace().unwrap();
    assert!(s.read_literal("=").unwrap());
    s.skip_whitespace().unwrap();
    assert_eq!(s.read_unsigned_int().unwrap(), Some(8080));
    s.skip_whitespace().unwrap();

    assert_eq!(s.read_token().unwrap().as_deref(), Some("name"));
    s.skip_whitespace().unwrap();
    assert!(s.read_literal("=").unwrap());
    s.skip_whitespace().unwrap();
    assert_eq!(
        s.read_double_quoted().unwrap().as_deref(),
        Some("srv \\\"main\\\"")
    );
    s.skip_whitespace().unwrap();

    assert_eq!(s.read_token().unwrap().as_deref(), Some("debug"));
    s.skip_whitespace().unwrap();
    assert!(s.read_literal("=").unwrap());
    s.skip_whitespace().unwrap();
    assert_eq!(s.read_boolean().unwrap(), Some(false));
    s.skip_whitespace().unwrap();
    assert_eq!(s.read().unwrap(), None);
}

#[test]
fn multibyte_characters_across_refills() {
    let text = "h\u{e9}llo \u{1f980} \u{3000}end";
    let mut source = ReadSource::from_reader(Trickle::new(text.as_bytes()));

    let mut decoded = String::new();
    while let Some(ch) = source.next_char().unwrap() {
        decoded.push(ch);
    }
    assert_eq!(decoded, text);
    assert_eq!(source.byte_offset(), text.len());
}

#[test]
fn char_offset_and_byte_offset_differ() {
    let mut s = Scanner::new(ReadSource::new("\u{e9}\u{e9}x".as_bytes()));
    assert_eq!(s.read_token().unwrap().as_deref(), Some("\u{e9}\u{e9}x"));
    assert_eq!(s.offset(), 3);
    assert_eq!(s.get_ref().byte_offset(), 5);
}

#[test]
fn pushback_does_not_rewind_the_reader() {
    let mut s = Scanner::new(ReadSource::new(Cursor::new("12ab")));
    assert_eq!(s.read_unsigned_int().unwrap(), Some(12));
    // `a` was read to end the digit run and sits in the pushback buffer.
    assert_eq!(s.pending(), 1);
    assert_eq!(s.get_ref().byte_offset(), 3);
    assert_eq!(s.read_token().unwrap().as_deref(), Some("ab"));

    let cursor = s.into_inner().into_inner();
    assert_eq!(cursor.position(), 4);
}

#[test]
fn invalid_utf8_reports_byte_offset() {
    let bytes: &[u8] = b"ok \xff rest";
    let mut s = Scanner::new(ReadSource::new(bytes));
    assert_eq!(s.read_token().unwrap().as_deref(), Some("ok"));
    let err = s.skip_whitespace().unwrap_err();
    assert!(matches!(err, ScanError::InvalidUtf8 { offset: 3 }), "{err:?}");
    assert_eq!(err.to_string(), "invalid UTF-8 sequence at byte offset 3");
}

#[test]
fn reader_errors_surface_as_io() {
    let mut s = Scanner::new(ReadSource::from_reader(Broken));
    let err = s.read_line().unwrap_err();
    match err {
        ScanError::Io(inner) => assert_eq!(inner.to_string(), "disk on fire"),
        other => panic!("expected i/o error, got {other:?}"),
    }
}

#[test]
fn small_capacity_over_reader() {
    let mut s = Scanner::with_options(
        ReadSource::new(Cursor::new("fals")),
        ScannerOptions { buffer_capacity: 2 },
    );
    // Restoring four characters does not fit a two-character buffer.
    let err = s.read_false().unwrap_err();
    assert!(matches!(
        err,
        ScanError::PushbackOverflow {
            capacity: 2,
            requested: 4
        }
    ));
}
