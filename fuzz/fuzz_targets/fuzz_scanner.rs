#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lookahead::{Pushback, Recognize, ScanError, Scanner, ScannerOptions, StrSource, Wrapping};

#[derive(Debug, Clone, Copy, Arbitrary)]
enum Op {
    Wrapped { left: char, right: char, escape: Option<char>, restore: bool },
    DoubleQuoted,
    SingleQuoted,
    Digits,
    UnsignedInt,
    SignedInt,
    Boolean,
    Literal { len: u8 },
    Line,
    Token,
    SkipWhitespace,
    Peek,
    Read,
    Unread(char),
}

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    text: &'a str,
    capacity: u8,
    ops: Vec<Op>,
}

/// Runs `op` and reports whether it pushed back a character that was never
/// read from the input.
fn run(op: Op, s: &mut Scanner<StrSource<'_>>, text: &str) -> Result<bool, ScanError> {
    match op {
        Op::Wrapped { left, right, escape, restore } => {
            let wrapping = Wrapping::pair(left, right)
                .with_escape(escape)
                .restore_on_mismatch(restore);
            s.read_wrapped(wrapping)?;
        }
        Op::DoubleQuoted => {
            s.read_double_quoted()?;
        }
        Op::SingleQuoted => {
            s.read_single_quoted()?;
        }
        Op::Digits => {
            s.read_digits()?;
        }
        Op::UnsignedInt => {
            s.read_unsigned_int()?;
        }
        Op::SignedInt => {
            s.read_signed_int()?;
        }
        Op::Boolean => {
            s.read_boolean()?;
        }
        Op::Literal { len } => {
            // A prefix of the unread input, so the literal sometimes matches.
            let before = s.offset();
            let expected: String = text.chars().skip(before).take(usize::from(len % 8)).collect();
            if !s.read_literal(&expected)? {
                assert_eq!(s.offset(), before, "failed literal consumed input");
            }
        }
        Op::Line => {
            s.read_line()?;
        }
        Op::Token => {
            s.read_token()?;
        }
        Op::SkipWhitespace => s.skip_whitespace()?,
        Op::Peek => {
            let before = s.offset();
            s.peek()?;
            assert_eq!(s.offset(), before, "peek moved the stream");
        }
        Op::Read => {
            s.read()?;
        }
        Op::Unread(ch) => {
            s.unread(Some(ch))?;
            return Ok(true);
        }
    }
    Ok(false)
}

fuzz_target!(|input: Input<'_>| {
    let options = ScannerOptions {
        buffer_capacity: usize::from(input.capacity),
    };
    let mut s = Scanner::with_options(StrSource::new(input.text), options);

    let mut synthesized = false;
    for op in input.ops {
        match run(op, &mut s, input.text) {
            Ok(injected) => synthesized |= injected,
            Err(_) => return,
        }
        assert!(s.pending() <= s.capacity());
    }

    // Without foreign push-backs the rest of the stream is exactly the input
    // after `offset()` characters.
    if !synthesized {
        let offset = s.offset();
        let mut rest = String::new();
        while let Ok(Some(ch)) = s.read() {
            rest.push(ch);
        }
        let expected: String = input.text.chars().skip(offset).collect();
        assert_eq!(rest, expected);
    }
});
