//! Config subcommand handlers.

use dialoguer::{Confirm, Input};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

use super::util;

/// File values with any --api-url / --timeout / --insecure applied.
fn effective(cfg: &Config, global: &GlobalOpts) -> Config {
    let mut effective = cfg.clone();
    if let Some(ref api_url) = global.api_url {
        effective.api_url.clone_from(api_url);
    }
    if let Some(timeout) = global.timeout {
        effective.timeout = timeout;
    }
    effective.insecure |= global.insecure;
    effective
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, cfg: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => {
            let path = config::config_path();
            eprintln!("DevHub CLI configuration");
            eprintln!("   Config path: {}\n", path.display());

            let api_url = util::prompt_url("API base URL (including /api)", &cfg.api_url)?;
            let timeout: u64 = Input::new()
                .with_prompt("Request timeout (seconds)")
                .default(cfg.timeout)
                .interact_text()
                .map_err(util::prompt_err)?;
            let insecure = Confirm::new()
                .with_prompt("Accept invalid TLS certificates?")
                .default(cfg.insecure)
                .interact()
                .map_err(util::prompt_err)?;

            let new_cfg = Config {
                api_url: api_url.trim().to_owned(),
                timeout,
                insecure,
                ..cfg.clone()
            };
            let written = config::save_config(&new_cfg)?;

            eprintln!("\n✓ Configuration written to {}", written.display());
            eprintln!("\n  Test it: devhub portfolio list");
            Ok(())
        }

        ConfigCommand::Show => {
            let shown = effective(cfg, global);
            let rendered = toml::to_string_pretty(&shown)?;
            let out = output::render_single(
                global.output_format(),
                &shown,
                |_| rendered.trim_end().to_owned(),
                |c| c.api_url.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    #[test]
    fn flags_show_in_effective_config() {
        let cli = Cli::try_parse_from([
            "devhub",
            "--api-url",
            "http://flag.example/api",
            "-k",
            "config",
            "show",
        ])
        .unwrap();
        let shown = effective(&Config::default(), &cli.global);

        assert_eq!(shown.api_url, "http://flag.example/api");
        assert!(shown.insecure);
        assert_eq!(shown.timeout, Config::default().timeout);
    }
}
