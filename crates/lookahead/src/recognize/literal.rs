use alloc::vec::Vec;

use crate::{Pushback, ScanError};

/// Consumes `literal` if the stream continues with exactly those characters.
///
/// On a mismatch, or when the input ends early, every character read so far
/// is pushed back and the stream is left as it was.
pub(crate) fn read_literal<P: Pushback + ?Sized>(
    src: &mut P,
    literal: &str,
) -> Result<bool, ScanError> {
    let mut seen = Vec::with_capacity(literal.len());
    for expected in literal.chars() {
        let Some(ch) = src.read()? else {
            break;
        };
        seen.push(ch);
        if ch != expected {
            break;
        }
    }

    if seen.iter().copied().eq(literal.chars()) {
        return Ok(true);
    }
    src.unread_chars(&seen)?;
    Ok(false)
}

pub(crate) fn read_true<P: Pushback + ?Sized>(src: &mut P) -> Result<Option<bool>, ScanError> {
    Ok(read_literal(src, "true")?.then_some(true))
}

pub(crate) fn read_false<P: Pushback + ?Sized>(src: &mut P) -> Result<Option<bool>, ScanError> {
    Ok(read_literal(src, "false")?.then_some(false))
}

pub(crate) fn read_boolean<P: Pushback + ?Sized>(src: &mut P) -> Result<Option<bool>, ScanError> {
    match src.peek()? {
        Some('t') => read_true(src),
        Some('f') => read_false(src),
        _ => Ok(None),
    }
}
