//! Decoding of literal `\uXXXX` escapes.
//!
//! Some redirect targets carry JSON-style escapes (`\u0026` for `&`) in the
//! raw `Location` text. These are decoded for display only; the resolver
//! never sees the decoded form.

/// Decodes escape sequences while the text still contains `\u`.
///
/// Each pass interprets `s` as the body of a double-quoted string literal.
/// Supported escapes: `\uXXXX`, `\UXXXXXXXX`, `\xHH` (ASCII only), `\\`,
/// `\"`, `\n`, `\r`, `\t`, `\a`, `\b`, `\f`, `\v`. When a pass fails (unknown
/// escape, bare `"`, invalid code point such as a lone surrogate) the result of
/// the previous pass is returned unchanged.
///
/// Every successful pass shortens the text, so this always terminates.
pub fn unescape_unicode(s: &str) -> String {
    let mut result = s.to_string();
    while result.contains("\\u") {
        match decode_literal(&result) {
            Some(decoded) => result = decoded,
            None => break,
        }
    }
    result
}

fn decode_literal(s: &str) -> Option<String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => return None,
            '\\' => {
                let decoded = match chars.next()? {
                    'u' => hex_char(&mut chars, 4)?,
                    'U' => hex_char(&mut chars, 8)?,
                    'x' => hex_char(&mut chars, 2).filter(char::is_ascii)?,
                    '\\' => '\\',
                    '"' => '"',
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    'a' => '\u{07}',
                    'b' => '\u{08}',
                    'f' => '\u{0C}',
                    'v' => '\u{0B}',
                    _ => return None,
                };
                out.push(decoded);
            }
            other => out.push(other),
        }
    }

    Some(out)
}

fn hex_char(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<char> {
    let mut value = 0u32;
    for _ in 0..digits {
        value = value * 16 + chars.next()?.to_digit(16)?;
    }
    char::from_u32(value)
}
