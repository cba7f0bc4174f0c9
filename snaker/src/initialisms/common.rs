//! The built-in initialism roster.

/// Initialisms registered in the default set.
///
/// Built from the golint list, minus entries whose letter runs are more
/// often ordinary words in generated names ("GPU" splits to `g_p_u`).
const COMMON_INITIALISMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS", "TTL",
    "UDP", "UI", "UID", "URI", "URL", "UTC", "UTF8", "UUID", "VM", "XML", "XMPP", "XSRF", "XSS",
    "YAML",
];

/// Initialisms whose plural is spelled with a lower-case `s` ("IDs", "URLs").
const COMMON_PLURALS: &[&str] = &[
    "ACL", "API", "CPU", "GUID", "ID", "IP", "UID", "URI", "URL", "UUID", "VM",
];

/// Returns the initialisms registered in the default set.
///
/// # Example
///
/// ```
/// assert!(snaker::common_initialisms().contains(&"HTTP"));
/// ```
#[inline]
#[must_use]
pub const fn common_initialisms() -> &'static [&'static str] {
    COMMON_INITIALISMS
}

/// Returns the initialisms whose plural the default set renders as `XXs`.
#[inline]
#[must_use]
pub const fn common_plurals() -> &'static [&'static str] {
    COMMON_PLURALS
}
