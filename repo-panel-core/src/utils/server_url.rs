//! Jira server address normalization.

use url::Url;

use crate::error::{CoreError, CoreResult};

/// Normalizes a user-entered Jira server address.
///
/// - surrounding whitespace is trimmed
/// - a missing scheme defaults to `https://`
/// - trailing `/` characters are removed
///
/// The result must parse as an absolute URL with a host.
pub fn normalize_server_url(raw: &str) -> CoreResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::ValidationError(
            "server address is empty".to_string(),
        ));
    }

    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    let normalized = with_scheme.trim_end_matches('/').to_string();

    let parsed = Url::parse(&normalized)
        .map_err(|e| CoreError::ValidationError(format!("invalid server address: {e}")))?;
    if parsed.host_str().is_none() {
        return Err(CoreError::ValidationError(format!(
            "invalid server address: {normalized}"
        )));
    }

    Ok(normalized)
}
