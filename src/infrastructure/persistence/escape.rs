//! Reversible single-line escaping for history entries
//!
//! Entries may contain newlines and other control characters; the flat
//! file stores one entry per line, so those are mapped to literal escape
//! sequences. The same table drives both directions, making the
//! round-trip exact.

/// Escape entry text for single-line storage
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:04x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Reverse [`escape`]. Returns `None` for malformed input, which callers
/// treat as a skippable line.
pub fn unescape(line: &str) -> Option<String> {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next()? {
            '\\' => out.push('\\'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'u' => {
                if chars.next()? != '{' {
                    return None;
                }
                let mut hex = String::new();
                loop {
                    match chars.next()? {
                        '}' => break,
                        c => hex.push(c),
                    }
                }
                let code = u32::from_str_radix(&hex, 16).ok()?;
                out.push(char::from_u32(code)?);
            }
            _ => return None,
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape("hello world"), "hello world");
        assert_eq!(unescape("hello world").unwrap(), "hello world");
    }

    #[test]
    fn newlines_become_one_line() {
        let escaped = escape("line one\nline two");
        assert!(!escaped.contains('\n'));
        assert_eq!(escaped, "line one\\nline two");
    }

    #[test]
    fn round_trip_control_characters() {
        let original = "tab\there\r\nbackslash \\ bell \u{0007} end";
        assert_eq!(unescape(&escape(original)).unwrap(), original);
    }

    #[test]
    fn round_trip_unicode_text() {
        let original = "héllo 世界 🦀";
        assert_eq!(escape(original), original);
        assert_eq!(unescape(original).unwrap(), original);
    }

    #[test]
    fn unescape_rejects_trailing_backslash() {
        assert!(unescape("dangling\\").is_none());
    }

    #[test]
    fn unescape_rejects_unknown_sequence() {
        assert!(unescape("bad\\q").is_none());
    }

    #[test]
    fn unescape_rejects_malformed_unicode() {
        assert!(unescape("\\u{zzzz}").is_none());
        assert!(unescape("\\u{1234").is_none());
        assert!(unescape("\\u1234}").is_none());
        // Surrogate range is not a valid char
        assert!(unescape("\\u{d800}").is_none());
    }

    #[test]
    fn escaped_backslash_sequences_stay_literal() {
        // "\\n" in the payload must come back as backslash + n, not newline
        let original = "literal \\n not a newline";
        assert_eq!(unescape(&escape(original)).unwrap(), original);
    }
}
