use alloc::string::String;

use super::collect_while;
use crate::{Pushback, ScanError};

pub(crate) fn read_line<P: Pushback + ?Sized>(src: &mut P) -> Result<Option<String>, ScanError> {
    let mut line = String::new();
    loop {
        match src.read()? {
            None if line.is_empty() => return Ok(None),
            None | Some('\n' | '\r') => break,
            Some(ch) => line.push(ch),
        }
    }
    Ok(Some(line))
}

pub(crate) fn read_token<P: Pushback + ?Sized>(src: &mut P) -> Result<Option<String>, ScanError> {
    let token = collect_while(src, |ch| !ch.is_whitespace())?;
    Ok((!token.is_empty()).then_some(token))
}

pub(crate) fn skip_whitespace<P: Pushback + ?Sized>(src: &mut P) -> Result<(), ScanError> {
    loop {
        match src.read()? {
            Some(ch) if ch.is_whitespace() => {}
            other => return src.unread(other),
        }
    }
}

pub(crate) fn skip_blank_lines<P: Pushback + ?Sized>(src: &mut P) -> Result<(), ScanError> {
    loop {
        match read_line(src)? {
            None => return Ok(()),
            Some(line) if line.trim().is_empty() => {}
            Some(mut line) => {
                line.push('\n');
                return src.unread_str(&line);
            }
        }
    }
}
