use alloc::{format, string::String};

use super::collect_while;
use crate::{Pushback, ScanError};

pub(crate) fn read_digits<P: Pushback + ?Sized>(src: &mut P) -> Result<Option<String>, ScanError> {
    let digits = collect_while(src, |ch| ch.is_ascii_digit())?;
    Ok((!digits.is_empty()).then_some(digits))
}

pub(crate) fn read_unsigned_int<P: Pushback + ?Sized>(src: &mut P) -> Result<Option<u64>, ScanError> {
    let Some(digits) = read_digits(src)? else {
        return Ok(None);
    };
    parse_magnitude(&digits).map(Some).ok_or_else(|| overflow(digits))
}

pub(crate) fn read_signed_int<P: Pushback + ?Sized>(src: &mut P) -> Result<Option<i64>, ScanError> {
    match src.peek()? {
        Some(sign @ ('+' | '-')) => {
            src.read()?;
            let Some(digits) = read_digits(src)? else {
                // A lone sign is not a number; give it back.
                src.unread(Some(sign))?;
                return Ok(None);
            };
            signed(sign == '-', digits).map(Some)
        }
        Some(ch) if ch.is_ascii_digit() => match read_digits(src)? {
            Some(digits) => signed(false, digits).map(Some),
            None => Ok(None),
        },
        _ => Ok(None),
    }
}

fn signed(negative: bool, digits: String) -> Result<i64, ScanError> {
    let value = parse_magnitude(&digits).and_then(|magnitude| {
        if negative {
            0i64.checked_sub_unsigned(magnitude)
        } else {
            i64::try_from(magnitude).ok()
        }
    });
    value.ok_or_else(|| {
        let sign = if negative { "-" } else { "" };
        overflow(format!("{sign}{digits}"))
    })
}

/// `digits` is a non-empty run of ASCII digits, so parsing fails only on
/// overflow.
fn parse_magnitude(digits: &str) -> Option<u64> {
    digits.parse().ok()
}

fn overflow(digits: String) -> ScanError {
    tracing::debug!(%digits, "integer literal out of range");
    ScanError::IntegerOverflow { digits }
}
