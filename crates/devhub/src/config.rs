//! CLI configuration -- thin wrapper around `devhub_config`.
//!
//! Re-exports the shared types and layers `GlobalOpts` flag overrides
//! (--api-url, --timeout, --insecure, --output, --color) on top.

use std::time::Duration;

use clap::ValueEnum;

use devhub_core::{DevHubConfig, TlsVerification};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use devhub_config::{Config, config_path, load_config, save_config};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Fill output and color from the config file where no flag or env var
/// was given.
pub fn apply_defaults(global: &mut GlobalOpts, cfg: &Config) {
    if global.output.is_none() {
        global.output = OutputFormat::from_str(&cfg.output, true).ok();
    }
    if global.color.is_none() {
        global.color = ColorMode::from_str(&cfg.color, true).ok();
    }
}

/// Translate the config file + global flags into a `DevHubConfig`.
///
/// Flag values take priority over file values.
pub fn resolve(cfg: &Config, global: &GlobalOpts) -> Result<DevHubConfig, CliError> {
    let mut resolved = cfg.to_devhub_config()?;

    if let Some(ref api_url) = global.api_url {
        url::Url::parse(api_url).map_err(|e| CliError::Validation {
            field: "api-url".into(),
            reason: format!("{e}: {api_url}"),
        })?;
        resolved.api_url.clone_from(api_url);
    }

    if global.insecure {
        resolved.tls = TlsVerification::DangerAcceptInvalid;
    }

    if let Some(timeout) = global.timeout {
        resolved.timeout = Duration::from_secs(timeout);
    }

    Ok(resolved)
}
