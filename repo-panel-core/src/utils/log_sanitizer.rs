//! Log sanitization utilities
//!
//! Keeps backend response bodies (commit messages, avatar data URIs, etc.)
//! from flooding debug/error logs.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// MSRV-compatible replacement for `str::floor_char_boundary`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Redact the password field of a JSON argument list before it is logged.
///
/// `SaveJiraCredentials` takes `[server, username, password]`; every other call
/// is logged as-is (after truncation).
pub fn redact_args(method: &str, args: &serde_json::Value) -> String {
    if method == "SaveJiraCredentials" {
        if let Some(items) = args.as_array() {
            let mut redacted = items.clone();
            if let Some(secret) = redacted.get_mut(2) {
                *secret = serde_json::Value::String("***".to_string());
            }
            return truncate_for_log(&serde_json::Value::Array(redacted).to_string());
        }
    }
    truncate_for_log(&args.to_string())
}
