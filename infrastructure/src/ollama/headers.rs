//! Credential headers and their masked log form

use super::error::TransportConfigError;
use council_domain::ChatRequest;
use hyper::header::HeaderValue;
use tracing::{debug, trace};

pub(crate) const AUTHORIZATION: &str = "authorization";
pub(crate) const X_API_KEY: &str = "x-api-key";

/// Bearer value for the `Authorization` header
pub(crate) fn bearer(api_key: &str) -> String {
    format!("Bearer {api_key}")
}

/// A header value that is redacted from `Debug` output
pub(crate) fn sensitive(value: &str) -> Result<HeaderValue, TransportConfigError> {
    let mut value =
        HeaderValue::from_str(value).map_err(|_| TransportConfigError::InvalidApiKey)?;
    value.set_sensitive(true);
    Ok(value)
}

/// Mask a header value for logging.
///
/// Values longer than 8 characters keep their first and last four
/// characters (`abcd...wxyz`); shorter ones become `****`; an absent
/// header is `<empty>`.
pub fn mask_header_value(value: Option<&str>) -> String {
    let Some(value) = value else {
        return "<empty>".to_string();
    };
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Log an outgoing chat call with its credential headers masked
pub(crate) fn log_outgoing(
    transport: &'static str,
    uri: &str,
    api_key: Option<&str>,
    request: &ChatRequest,
) {
    let authorization = api_key.map(bearer);
    debug!(
        transport,
        method = "POST",
        uri,
        authorization = %mask_header_value(authorization.as_deref()),
        x_api_key = %mask_header_value(api_key),
        model = %request.model(),
        "Sending chat request"
    );
    if tracing::enabled!(tracing::Level::TRACE)
        && let Ok(payload) = serde_json::to_string(request)
    {
        trace!(transport, %payload, "Chat request payload");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_long_value() {
        assert_eq!(mask_header_value(Some("abcd1234wxyz")), "abcd...wxyz");
        assert_eq!(
            mask_header_value(Some("Bearer sk-0123456789")),
            "Bear...6789"
        );
    }

    #[test]
    fn test_mask_short_value() {
        assert_eq!(mask_header_value(Some("12345678")), "****");
        assert_eq!(mask_header_value(Some("")), "****");
    }

    #[test]
    fn test_mask_absent_value() {
        assert_eq!(mask_header_value(None), "<empty>");
    }

    #[test]
    fn test_mask_multibyte_value() {
        assert_eq!(mask_header_value(Some("金鑰金鑰-秘密-結尾結尾")), "金鑰金鑰...結尾結尾");
    }
}
