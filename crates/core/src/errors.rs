use thiserror::Error;

/// Unified error type for the entire revenue-dashboard-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// The filter engine and the series projector are total and never
/// produce one of these.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({endpoint}): {message}")]
    Api {
        endpoint: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors embed the full URL; strip the query string so tokens
        // passed as parameters never end up in logs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
