//! Quoting rules for scalar values and mapping keys.
//!
//! Values are left bare whenever a reader could not mistake them for something else;
//! keys follow a narrower identifier rule.
//!
//! ```rust
//! use toon_encoder::quote::{quote_key, quote_str};
//! use toon_encoder::Delimiter;
//!
//! assert_eq!(quote_str("hello world", Delimiter::Comma), "hello world");
//! assert_eq!(quote_str("true", Delimiter::Comma), "\"true\"");
//! assert_eq!(quote_str("a|b", Delimiter::Comma), "a|b");
//! assert_eq!(quote_str("a|b", Delimiter::Pipe), "\"a|b\"");
//!
//! assert_eq!(quote_key("user.email"), "user.email");
//! assert_eq!(quote_key("user-id"), "\"user-id\"");
//! ```

use crate::{Delimiter, Scalar};
use std::borrow::Cow;

/// Renders a scalar the way it appears as a value.
///
/// `null`, booleans, and numbers are literal; strings go through [`quote_str`].
pub fn quote_scalar(scalar: &Scalar, delimiter: Delimiter) -> Cow<'_, str> {
    match scalar {
        Scalar::Null => Cow::Borrowed("null"),
        Scalar::Bool(true) => Cow::Borrowed("true"),
        Scalar::Bool(false) => Cow::Borrowed("false"),
        Scalar::Number(n) => Cow::Owned(n.to_string()),
        Scalar::String(s) => quote_str(s, delimiter),
    }
}

/// Quotes a string value if leaving it bare would be ambiguous.
pub fn quote_str(s: &str, delimiter: Delimiter) -> Cow<'_, str> {
    if !needs_quotes(s, delimiter) {
        return Cow::Borrowed(s);
    }

    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for ch in s.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

/// Returns `true` if `s` must be quoted under the given delimiter.
///
/// ```rust
/// use toon_encoder::quote::needs_quotes;
/// use toon_encoder::Delimiter;
///
/// for ambiguous in ["", " padded", "true", "null", "42", "-1.5e3", "[1]", "{a}", "- item"] {
///     assert!(needs_quotes(ambiguous, Delimiter::Comma), "{ambiguous:?}");
/// }
/// assert!(!needs_quotes("Button.tsx", Delimiter::Comma));
/// ```
#[must_use]
pub fn needs_quotes(s: &str, delimiter: Delimiter) -> bool {
    if s.is_empty() {
        return true;
    }

    if s.starts_with(' ') || s.ends_with(' ') {
        return true;
    }

    if s.contains(delimiter.as_char())
        || s.contains([':', '"', '\\', '\n', '\r', '\t'])
    {
        return true;
    }

    if matches!(s, "true" | "false" | "null") {
        return true;
    }

    // List item marker
    if s.starts_with("- ") {
        return true;
    }

    if s.starts_with('[') || s.starts_with('{') {
        return true;
    }

    looks_like_number(s)
}

/// Returns `true` if `s` would read back as a number.
///
/// Matches everything `f64` parsing accepts, which includes `inf` and `NaN` spellings,
/// plus digit groups joined by single underscores such as `1_000`.
///
/// ```rust
/// use toon_encoder::quote::looks_like_number;
///
/// assert!(looks_like_number("1_000"));
/// assert!(!looks_like_number("1__0"));
/// ```
#[must_use]
pub fn looks_like_number(s: &str) -> bool {
    if s.parse::<f64>().is_ok() {
        return true;
    }
    s.contains('_') && underscores_join_digits(s) && s.replace('_', "").parse::<f64>().is_ok()
}

/// Every `_` sits between two ASCII digits.
fn underscores_join_digits(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b == b'_')
        .all(|(i, _)| {
            i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
        })
}

/// Quotes a mapping key unless it is a plain identifier.
///
/// Identifiers start with an ASCII letter or underscore and continue with ASCII letters,
/// digits, underscores, or dots. Anything else is wrapped in double quotes verbatim.
pub fn quote_key(key: &str) -> Cow<'_, str> {
    if is_identifier(key) {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(format!("\"{}\"", key))
    }
}

#[inline]
fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;

    #[test]
    fn test_scalars() {
        let comma = Delimiter::Comma;
        assert_eq!(quote_scalar(&Scalar::Null, comma), "null");
        assert_eq!(quote_scalar(&Scalar::Bool(true), comma), "true");
        assert_eq!(quote_scalar(&Scalar::Bool(false), comma), "false");
        assert_eq!(
            quote_scalar(&Scalar::Number(Number::Integer(-7)), comma),
            "-7"
        );
        assert_eq!(
            quote_scalar(&Scalar::Number(Number::Float(2.25)), comma),
            "2.25"
        );
    }

    #[test]
    fn test_reserved_and_numeric_strings_are_quoted() {
        let comma = Delimiter::Comma;
        assert_eq!(quote_str("true", comma), "\"true\"");
        assert_eq!(quote_str("false", comma), "\"false\"");
        assert_eq!(quote_str("null", comma), "\"null\"");
        assert_eq!(quote_str("42", comma), "\"42\"");
        assert_eq!(quote_str("3.14", comma), "\"3.14\"");
        assert_eq!(quote_str("1e5", comma), "\"1e5\"");
        assert_eq!(quote_str("NaN", comma), "\"NaN\"");
        assert_eq!(quote_str("[1]", comma), "\"[1]\"");
        assert_eq!(quote_str("{a}", comma), "\"{a}\"");
        assert_eq!(quote_str("[", comma), "\"[\"");
    }

    #[test]
    fn test_digit_group_underscores_are_numeric() {
        let comma = Delimiter::Comma;
        assert_eq!(quote_str("1_000", comma), "\"1_000\"");
        assert_eq!(quote_str("1_0.5", comma), "\"1_0.5\"");
        assert_eq!(quote_str("-2_500e1_0", comma), "\"-2_500e1_0\"");

        assert_eq!(quote_str("_1", comma), "_1");
        assert_eq!(quote_str("1_", comma), "1_");
        assert_eq!(quote_str("1__0", comma), "1__0");
        assert_eq!(quote_str("1_.5", comma), "1_.5");
        assert_eq!(quote_str("a_b", comma), "a_b");
    }

    #[test]
    fn test_near_misses_stay_bare() {
        let comma = Delimiter::Comma;
        assert_eq!(quote_str("True", comma), "True");
        assert_eq!(quote_str("nullable", comma), "nullable");
        assert_eq!(quote_str("v1.2.3", comma), "v1.2.3");
        assert_eq!(quote_str("-item", comma), "-item");
        assert_eq!(quote_str("a]", comma), "a]");
        assert_eq!(quote_str("inner space", comma), "inner space");
        assert_eq!(quote_str("日本語", comma), "日本語");
    }

    #[test]
    fn test_whitespace_and_structure() {
        let comma = Delimiter::Comma;
        assert_eq!(quote_str("", comma), "\"\"");
        assert_eq!(quote_str(" lead", comma), "\" lead\"");
        assert_eq!(quote_str("trail ", comma), "\"trail \"");
        assert_eq!(quote_str("- item", comma), "\"- item\"");
        assert_eq!(quote_str("key: value", comma), "\"key: value\"");
    }

    #[test]
    fn test_escapes() {
        let comma = Delimiter::Comma;
        assert_eq!(quote_str("say \"hi\"", comma), r#""say \"hi\"""#);
        assert_eq!(quote_str(r"C:\path", comma), r#""C:\\path""#);
        assert_eq!(quote_str("line1\nline2", comma), r#""line1\nline2""#);
        assert_eq!(quote_str("a\rb", comma), r#""a\rb""#);
        assert_eq!(quote_str("a\tb", comma), r#""a\tb""#);
    }

    #[test]
    fn test_only_active_delimiter_forces_quotes() {
        assert_eq!(quote_str("a,b", Delimiter::Comma), "\"a,b\"");
        assert_eq!(quote_str("a,b", Delimiter::Pipe), "a,b");
        assert_eq!(quote_str("a|b", Delimiter::Comma), "a|b");
        assert_eq!(quote_str("a|b", Delimiter::Pipe), "\"a|b\"");
        // Tab is always quoted, active or not
        assert_eq!(quote_str("a\tb", Delimiter::Pipe), r#""a\tb""#);
    }

    #[test]
    fn test_keys() {
        assert_eq!(quote_key("name"), "name");
        assert_eq!(quote_key("_private"), "_private");
        assert_eq!(quote_key("user.email"), "user.email");
        assert_eq!(quote_key("a1_b2"), "a1_b2");
        assert_eq!(quote_key("user-id"), "\"user-id\"");
        assert_eq!(quote_key("2ndPlace"), "\"2ndPlace\"");
        assert_eq!(quote_key("src/components"), "\"src/components\"");
        assert_eq!(quote_key(""), "\"\"");
        assert_eq!(quote_key("ñame"), "\"ñame\"");
    }
}
