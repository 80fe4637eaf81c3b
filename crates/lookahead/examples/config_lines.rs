//! Parses a small `key = value` configuration format with the recognizers.
//!
//! Values may be double- or single-quoted strings, signed integers, or
//! booleans. Blank lines and lines starting with `#` are skipped. Anything
//! else after the `=` is taken as a bare word up to the end of the line.
//!
//! The document is read from stdin when it is not a terminal, otherwise a
//! built-in sample is used:
//!
//! ```bash
//! printf 'port = 8080\nname = "edge"\n' | cargo run -p lookahead --example config_lines
//! ```
#![allow(missing_docs)]

use std::io::{self, IsTerminal};

use lookahead::{CharSource, Pushback, ReadSource, Recognize, ScanError, Scanner, StrSource};

const SAMPLE: &str = r#"
# service settings
name    = "edge \"primary\""
port    = 8080
retries = -1

verbose = true
motd    = 'it''s up'
region  = eu-west
"#;

#[derive(Debug)]
enum Value {
    Str(String),
    Int(i64),
    Bool(bool),
    Word(String),
}

#[derive(Debug)]
struct Entry {
    line: usize,
    key: String,
    value: Value,
}

fn parse<S: CharSource>(source: S) -> Result<Vec<Entry>, ScanError> {
    let mut s = Scanner::new(source);
    let mut entries = Vec::new();
    let mut line = 1usize;

    loop {
        // Skip blank and comment lines, counting line feeds as we go.
        loop {
            while let Some(ch) = s.peek()? {
                if !ch.is_whitespace() {
                    break;
                }
                if s.read()? == Some('\n') {
                    line += 1;
                }
            }
            if s.peek()? != Some('#') {
                break;
            }
            s.read_line()?;
            line += 1;
        }

        let Some(key) = s.read_token()? else {
            return Ok(entries);
        };
        skip_inline_space(&mut s)?;
        if !s.read_literal("=")? {
            let rest = s.read_line()?.unwrap_or_default();
            eprintln!("line {line}: expected '=' after {key:?}, skipping {rest:?}");
            line += 1;
            continue;
        }
        skip_inline_space(&mut s)?;

        let value = match s.peek()? {
            Some('"') => s.read_double_quoted()?.map(Value::Str),
            // Single-quoted strings escape quotes by doubling them.
            Some('\'') => s.read_wrapped_by('\'')?.map(Value::Str),
            Some('t' | 'f') => s.read_boolean()?.map(Value::Bool),
            Some(c) if c.is_ascii_digit() || c == '+' || c == '-' => {
                s.read_signed_int()?.map(Value::Int)
            }
            _ => None,
        };
        let rest = s.read_line()?.unwrap_or_default();
        let value = match value {
            Some(value) if rest.trim().is_empty() => value,
            Some(value) => {
                eprintln!("line {line}: ignoring {rest:?} after {value:?}");
                value
            }
            None => Value::Word(rest.trim_end().to_owned()),
        };

        entries.push(Entry { line, key, value });
        line += 1;
    }
}

fn skip_inline_space<P: Pushback>(s: &mut P) -> Result<(), ScanError> {
    while let Some(ch) = s.peek()? {
        if ch != ' ' && ch != '\t' {
            break;
        }
        s.read()?;
    }
    Ok(())
}

fn main() -> Result<(), ScanError> {
    let stdin = io::stdin();
    let entries = if stdin.is_terminal() {
        parse(StrSource::new(SAMPLE))?
    } else {
        parse(ReadSource::new(stdin.lock()))?
    };

    for Entry { line, key, value } in entries {
        println!("{line:>3}: {key} => {value:?}");
    }
    Ok(())
}
