//! Console input helpers.

use std::io::{BufRead, Write};

use rust_decimal::Decimal;
use tracing::warn;

/// Writes `text` without a trailing newline, flushes, and reads one
/// line. Returns `None` at end of input or when the stream fails.
pub fn prompt_line<R, W>(input: &mut R, output: &mut W, text: &str) -> Option<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{text}").ok()?;
    output.flush().ok()?;
    read_line(input)
}

/// Reads one line, trimmed. Returns `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> Option<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line).ok()?;
    if read == 0 {
        return None;
    }
    Some(line.trim().to_string())
}

/// Parses a number entry, accepting commas as thousands separators.
/// Empty or unparseable input is `None`.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let normalized = text.trim().replace(',', "");
    if normalized.is_empty() {
        return None;
    }
    match normalized.parse() {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(input = %text, "invalid number: {error}");
            None
        }
    }
}
