//! Whitespace handling for browser-submitted strings.
//!
//! Form values and query parameters are trimmed with the ECMAScript notion of
//! whitespace (WhiteSpace plus LineTerminator), which differs from
//! `char::is_whitespace`: U+FEFF counts, U+0085 does not.

/// ECMAScript WhiteSpace or LineTerminator.
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}' // TAB
            | '\u{000A}' // LF
            | '\u{000B}' // VT
            | '\u{000C}' // FF
            | '\u{000D}' // CR
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Strip leading and trailing form whitespace.
pub fn trim_form_value(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_ascii_and_unicode_spaces() {
        assert_eq!(trim_form_value(" \t\r\n abc \u{A0}\u{3000}"), "abc");
        assert_eq!(trim_form_value("\u{2028}abc\u{2029}"), "abc");
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert_eq!(trim_form_value("\u{FEFF}abc\u{FEFF}"), "abc");
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert_eq!(trim_form_value("abc\u{85}"), "abc\u{85}");
        assert!(!is_form_whitespace('\u{85}'));
    }

    #[test]
    fn test_inner_whitespace_kept() {
        assert_eq!(trim_form_value("  a b  "), "a b");
    }
}
