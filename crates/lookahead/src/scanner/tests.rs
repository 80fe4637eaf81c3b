use alloc::string::String;

use super::*;
use crate::{IterSource, StrSource};

fn scanner(text: &str) -> Scanner<StrSource<'_>> {
    Scanner::new(StrSource::new(text))
}

fn rest<S: CharSource>(s: &mut Scanner<S>) -> String {
    let mut out = String::new();
    while let Some(ch) = s.read().unwrap() {
        out.push(ch);
    }
    out
}

#[test]
fn unread_of_just_read_char_is_read_next() {
    let mut s = scanner("abc");
    let a = s.read().unwrap();
    assert_eq!(a, Some('a'));
    s.unread(a).unwrap();
    assert_eq!(s.read().unwrap(), Some('a'));
    assert_eq!(rest(&mut s), "bc");
}

#[test]
fn replays_last_pushed_first() {
    let mut s = scanner("z");
    s.unread(Some('b')).unwrap();
    s.unread(Some('a')).unwrap();
    assert_eq!(rest(&mut s), "abz");
}

#[test]
fn unread_str_keeps_sequence_order() {
    let mut s = scanner("!");
    s.unread(Some('c')).unwrap();
    s.unread_str("ab").unwrap();
    assert_eq!(s.pending(), 3);
    assert_eq!(rest(&mut s), "abc!");
}

#[test]
fn eof_is_sticky_and_unread_of_eof_is_noop() {
    let mut s = scanner("x");
    assert_eq!(s.read().unwrap(), Some('x'));
    let eof = s.read().unwrap();
    assert_eq!(eof, None);
    let offset = s.offset();

    s.unread(eof).unwrap();
    assert_eq!(s.pending(), 0);
    assert_eq!(s.offset(), offset);
    assert_eq!(s.read().unwrap(), None);
    assert_eq!(s.read().unwrap(), None);
}

#[test]
fn peek_is_idempotent() {
    let mut s = scanner("qr");
    assert_eq!(s.peek().unwrap(), Some('q'));
    assert_eq!(s.peek().unwrap(), Some('q'));
    assert_eq!(s.offset(), 0);
    assert_eq!(s.read().unwrap(), Some('q'));
    assert_eq!(s.peek().unwrap(), Some('r'));
    assert_eq!(s.offset(), 1);
}

#[test]
fn peek_at_eof_reports_none() {
    let mut s = scanner("");
    assert_eq!(s.peek().unwrap(), None);
    assert_eq!(s.pending(), 0);
}

#[test]
fn overflow_on_single_unread() {
    let mut s = Scanner::with_capacity(StrSource::new("abc"), 2);
    s.unread(Some('x')).unwrap();
    s.unread(Some('y')).unwrap();
    let err = s.unread(Some('z')).unwrap_err();
    assert!(matches!(
        err,
        ScanError::PushbackOverflow {
            capacity: 2,
            requested: 3
        }
    ));
    assert_eq!(rest(&mut s), "yxabc");
}

#[test]
fn overflowing_sequence_leaves_buffer_untouched() {
    let mut s = Scanner::with_capacity(StrSource::new("tail"), 4);
    s.unread(Some('-')).unwrap();
    assert!(s.unread_str("four").is_err());
    assert_eq!(s.pending(), 1);
    assert_eq!(rest(&mut s), "-tail");
}

#[test]
fn offset_counts_net_consumption() {
    let mut s = scanner("hello");
    for _ in 0..3 {
        s.read().unwrap();
    }
    assert_eq!(s.offset(), 3);
    s.unread_str("el").unwrap();
    assert_eq!(s.offset(), 1);
    rest(&mut s);
    assert_eq!(s.offset(), 5);
}

#[test]
fn options_set_capacity() {
    let s = Scanner::with_options(
        StrSource::new(""),
        ScannerOptions {
            buffer_capacity: 17,
        },
    );
    assert_eq!(s.capacity(), 17);
    assert_eq!(scanner("").capacity(), crate::DEFAULT_BUFFER_CAPACITY);
}

#[test]
fn into_inner_returns_unconsumed_source() {
    let mut s = scanner("abc");
    assert_eq!(s.peek().unwrap(), Some('a'));
    // The peeked character lives in the pushback buffer, not the source.
    assert_eq!(s.get_ref().remaining(), "bc");
    let src = s.into_inner();
    assert_eq!(src.remaining(), "bc");
}

#[test]
fn borrowed_source_outlives_scanner() {
    let mut src = IterSource::new("xy".chars());
    {
        let mut s = Scanner::new(&mut src);
        assert_eq!(s.read().unwrap(), Some('x'));
    }
    assert_eq!(src.next_char().unwrap(), Some('y'));
}
