//! Java `.properties` reader for message bundles

use std::collections::HashMap;
use std::iter::Peekable;
use std::str::Chars;

use super::L10nError;

/// Parse `key=value` pairs, honoring comments, continuations and escapes
pub fn parse_properties(text: &str) -> Result<HashMap<String, String>, L10nError> {
    let mut entries = HashMap::new();
    let mut logical = String::new();
    let mut start_line = 0;
    let mut continuing = false;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim_start();
        if !continuing {
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            start_line = index + 1;
        }

        let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
        if trailing % 2 == 1 {
            logical.push_str(&line[..line.len() - 1]);
            continuing = true;
            continue;
        }

        logical.push_str(line);
        continuing = false;
        let (key, value) = parse_entry(&logical, start_line)?;
        entries.insert(key, value);
        logical.clear();
    }

    // A trailing backslash on the last line still ends the entry
    if continuing {
        let (key, value) = parse_entry(&logical, start_line)?;
        entries.insert(key, value);
    }

    Ok(entries)
}

fn parse_entry(line: &str, line_no: usize) -> Result<(String, String), L10nError> {
    let mut chars = line.chars().peekable();
    let mut key = String::new();

    while let Some(&c) = chars.peek() {
        match c {
            '=' | ':' => break,
            c if c.is_whitespace() => break,
            '\\' => {
                chars.next();
                key.push(unescape(&mut chars, line_no)?);
            }
            c => {
                chars.next();
                key.push(c);
            }
        }
    }

    skip_whitespace(&mut chars);
    if matches!(chars.peek(), Some('=') | Some(':')) {
        chars.next();
        skip_whitespace(&mut chars);
    }

    let mut value = String::new();
    while let Some(c) = chars.next() {
        if c == '\\' {
            value.push(unescape(&mut chars, line_no)?);
        } else {
            value.push(c);
        }
    }

    Ok((key, value))
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.peek().map_or(false, |c| c.is_whitespace()) {
        chars.next();
    }
}

fn unescape(chars: &mut Peekable<Chars<'_>>, line_no: usize) -> Result<char, L10nError> {
    match chars.next() {
        Some('t') => Ok('\t'),
        Some('n') => Ok('\n'),
        Some('r') => Ok('\r'),
        Some('f') => Ok('\u{000C}'),
        Some('u') => {
            let invalid = |detail: String| L10nError::InvalidEscape {
                line: line_no,
                detail,
            };
            let high = read_hex4(chars).map_err(&invalid)?;
            if !(0xD800..=0xDBFF).contains(&high) {
                return char::from_u32(high).ok_or_else(|| invalid(format!("\\u{:04X}", high)));
            }

            // High surrogate: must be followed by an escaped low surrogate
            let low = match (chars.next(), chars.next()) {
                (Some('\\'), Some('u')) => read_hex4(chars).map_err(&invalid)?,
                _ => return Err(invalid(format!("\\u{:04X}", high))),
            };
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(invalid(format!("\\u{:04X}\\u{:04X}", high, low)));
            }
            let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
            char::from_u32(code).ok_or_else(|| invalid(format!("\\u{:04X}\\u{:04X}", high, low)))
        }
        Some(other) => Ok(other),
        None => Ok('\\'),
    }
}

/// Read four hex digits of a `\u` escape; the error carries the raw text
fn read_hex4(chars: &mut Peekable<Chars<'_>>) -> Result<u32, String> {
    let hex: String = chars.by_ref().take(4).collect();
    u32::from_str_radix(&hex, 16)
        .ok()
        .filter(|_| hex.len() == 4)
        .ok_or_else(|| format!("\\u{}", hex))
}
