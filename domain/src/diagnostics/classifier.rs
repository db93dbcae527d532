//! Troubleshooting hints for known misconfigurations

use serde::Serialize;
use std::net::IpAddr;

/// Substrings that indicate the backend actively refused the connection
const REFUSAL_INDICATORS: [&str; 4] = [
    "connection refused",
    "econnrefused",
    "getsockopt",
    "os error 111",
];

/// A remediation hint attached to a failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticHint {
    /// Connection refused while the backend address points at loopback
    LoopbackRefused { base_url: String },
}

impl DiagnosticHint {
    /// Human-readable remediation text
    pub fn message(&self) -> String {
        match self {
            DiagnosticHint::LoopbackRefused { base_url } => format!(
                "連線被拒絕：base-url={base_url} 指向本機迴路位址。\
                 若服務跑在容器內，localhost 會指向該容器本身，請改用容器網路上的位址（例如 http://ai-server:11434）；\
                 若在主機執行，localhost 可能解析為 IPv6 ::1，請確認推論服務有在該位址監聽或改用 http://127.0.0.1:11434"
            ),
        }
    }
}

impl std::fmt::Display for DiagnosticHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// Classify a failure message against the configured backend address.
///
/// Returns a hint only when the message looks like a refused connection and
/// the address names a loopback host. Never fails.
pub fn diagnose(message: &str, base_url: &str) -> Option<DiagnosticHint> {
    let lowered = message.to_ascii_lowercase();
    let refused = REFUSAL_INDICATORS
        .iter()
        .any(|indicator| lowered.contains(indicator));

    if refused && is_loopback_address(base_url) {
        Some(DiagnosticHint::LoopbackRefused {
            base_url: base_url.to_string(),
        })
    } else {
        None
    }
}

/// Whether the host part of `address` refers to the local machine
pub fn is_loopback_address(address: &str) -> bool {
    let Some(host) = host_of(address) else {
        return false;
    };
    let host = host.to_ascii_lowercase();
    if host == "localhost" || host.ends_with(".localhost") {
        return true;
    }
    match host.parse::<IpAddr>() {
        Ok(ip) => ip.is_loopback() || ip.is_unspecified(),
        Err(_) => false,
    }
}

/// Extract the host from `scheme://user@host:port/path`
fn host_of(address: &str) -> Option<&str> {
    let address = address.trim();
    let rest = match address.find("://") {
        Some(idx) => &address[idx + 3..],
        None => address,
    };
    let authority = rest.split(['/', '?', '#']).next()?;
    let authority = match authority.rfind('@') {
        Some(idx) => &authority[idx + 1..],
        None => authority,
    };

    let host = if let Some(bracketed) = authority.strip_prefix('[') {
        bracketed.split(']').next()?
    } else {
        authority.split(':').next()?
    };

    if host.is_empty() { None } else { Some(host) }
}
