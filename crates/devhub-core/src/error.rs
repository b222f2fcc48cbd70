// ── Core error types ──
//
// User-facing errors from devhub-core. Consumers never see raw reqwest
// errors or JSON parse failures; the `From<devhub_api::Error>` impl
// translates transport-layer errors into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach the DevHub API at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request to the DevHub API timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("{message}")]
    Api {
        message: String,
        /// HTTP status code (if the server answered).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Interactive errors ───────────────────────────────────────────
    #[error("Prompt failed: {message}")]
    Interaction { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Convert a failed single-record lookup. A 404 names the entity that
    /// was asked for; list and mutation failures keep the server detail.
    pub(crate) fn lookup(err: devhub_api::Error, entity_type: &str, identifier: &str) -> Self {
        if err.is_not_found() {
            Self::NotFound {
                entity_type: entity_type.into(),
                identifier: identifier.into(),
            }
        } else {
            err.into()
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<devhub_api::Error> for CoreError {
    fn from(err: devhub_api::Error) -> Self {
        match err {
            devhub_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            devhub_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            devhub_api::Error::InvalidBaseUrl(raw) => CoreError::Config {
                message: format!("Invalid API base URL: {raw}"),
            },
            devhub_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            devhub_api::Error::Api { status, message } => CoreError::Api {
                message: format!("Request failed with status code {status}: {message}"),
                status: Some(status),
            },
            devhub_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
