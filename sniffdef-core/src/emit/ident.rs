//! Identifier and string literal quoting.

use std::borrow::Cow;

/// True for `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_plain_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Single-quote a name unless it is a plain identifier.
pub fn quote_identifier(name: &str) -> Cow<'_, str> {
    if is_plain_identifier(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("'{}'", escape(name, '\'')))
    }
}

/// Double-quoted string literal.
pub fn quote_string(s: &str) -> String {
    format!("\"{}\"", escape(s, '"'))
}

fn escape(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == '\\' || c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_identifier() {
        assert!(is_plain_identifier("tcp"));
        assert!(is_plain_identifier("_hardcoded_0"));
        assert!(is_plain_identifier("citrix_channels_ext"));
        assert!(!is_plain_identifier(""));
        assert!(!is_plain_identifier("other-ip"));
        assert!(!is_plain_identifier("9lives"));
        assert!(!is_plain_identifier("héllo"));
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("tcp"), "tcp");
        assert_eq!(quote_identifier("other-ip"), "'other-ip'");
        assert_eq!(quote_identifier("non-ip_ext"), "'non-ip_ext'");
        assert_eq!(quote_identifier("it's"), "'it\\'s'");
    }

    #[test]
    fn test_quote_string() {
        assert_eq!(quote_string("pvx.tcp"), "\"pvx.tcp\"");
        assert_eq!(quote_string("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote_string("C:\\caps"), "\"C:\\\\caps\"");
    }

    #[test]
    fn test_control_characters_stay_on_one_line() {
        assert_eq!(quote_string("a\nb"), "\"a\\nb\"");
        assert_eq!(quote_string("a\tb\r"), "\"a\\tb\\r\"");
        assert_eq!(quote_identifier("x\ny"), "'x\\ny'");
    }
}
