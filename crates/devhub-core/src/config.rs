// ── Runtime connection configuration ──
//
// Describes *how* to reach the DevHub API. Never touches disk: the CLI
// resolves files, env vars, and flags, then hands a `DevHubConfig` in.

use std::path::PathBuf;
use std::time::Duration;

pub use devhub_api::DEFAULT_BASE_URL;
use devhub_api::{TlsMode, TransportConfig};

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed development servers).
    DangerAcceptInvalid,
}

/// Configuration for talking to one DevHub API.
#[derive(Debug, Clone)]
pub struct DevHubConfig {
    /// API base URL including the `/api` prefix.
    pub api_url: String,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for DevHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.into(),
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl DevHubConfig {
    pub(crate) fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}
