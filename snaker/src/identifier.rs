//! Identifier sanitization.

/// Whether `c` may appear in an identifier.
///
/// Accepts ASCII letters, digits and underscore, plus any non-ASCII
/// alphabetic or numeric character.
///
/// # Examples
///
/// ```
/// use snaker::is_identifier_char;
///
/// assert!(is_identifier_char('a'));
/// assert!(is_identifier_char('_'));
/// assert!(is_identifier_char('é'));
/// assert!(!is_identifier_char('-'));
/// assert!(!is_identifier_char(' '));
/// ```
#[inline]
#[must_use]
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || (!c.is_ascii() && (c.is_alphabetic() || c.is_numeric()))
}

/// Clean `s` so that it is usable as an identifier.
///
/// - Surrounding whitespace is trimmed
/// - Invalid characters are replaced with an underscore
/// - Runs of underscores collapse to one
/// - Leading digits and underscores are removed
/// - Trailing underscores are removed
///
/// Case is never changed.
///
/// # Examples
///
/// ```
/// use snaker::to_identifier;
///
/// assert_eq!(to_identifier("  user-name  "), "user_name");
/// assert_eq!(to_identifier("__2__xml___thing---"), "xml_thing");
/// assert_eq!(to_identifier("123"), "");
/// ```
#[must_use]
pub fn to_identifier(s: &str) -> String {
    let mut out = String::with_capacity(s.len());

    for c in s.trim().chars() {
        let c = if is_identifier_char(c) { c } else { '_' };
        if out.is_empty() && (c == '_' || c.is_ascii_digit()) {
            continue;
        }
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }

    let len = out.trim_end_matches('_').len();
    out.truncate(len);
    out
}
