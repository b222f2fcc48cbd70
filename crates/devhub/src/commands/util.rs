//! Shared helpers for command handlers.

use std::future::Future;
use std::io::IsTerminal;
use std::time::Duration;

use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};

use devhub_core::{Confirm, CoreError, Remote, ResourceStore};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Confirmation ────────────────────────────────────────────────────

/// `dialoguer` confirmation, auto-approving if `--yes` was passed.
#[derive(Debug, Clone, Copy)]
pub struct PromptConfirm {
    assume_yes: bool,
}

impl PromptConfirm {
    pub fn new(global: &GlobalOpts) -> Self {
        Self {
            assume_yes: global.yes,
        }
    }
}

impl Confirm for PromptConfirm {
    async fn confirm(&self, prompt: &str) -> Result<bool, CoreError> {
        if self.assume_yes {
            return Ok(true);
        }
        let prompt = prompt.to_owned();
        tokio::task::spawn_blocking(move || {
            dialoguer::Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()
        })
        .await
        .map_err(|e| CoreError::Internal(format!("prompt task failed: {e}")))?
        .map_err(|e| CoreError::Interaction {
            message: e.to_string(),
        })
    }
}

/// Refuse to prompt when stdin is not a terminal and `--yes` is absent.
pub fn ensure_can_confirm(global: &GlobalOpts, resource: &str) -> Result<(), CliError> {
    if global.yes || std::io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(CliError::NonInteractiveRequiresYes {
            resource: resource.into(),
        })
    }
}

// ── Prompts ─────────────────────────────────────────────────────────

/// Map a dialoguer failure into CliError.
pub fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Prompt {
        message: e.to_string(),
    }
}

/// Prompt for a value that must not be blank.
pub fn prompt_required(label: &str, initial: &str) -> Result<String, CliError> {
    Input::<String>::new()
        .with_prompt(label)
        .with_initial_text(initial)
        .validate_with(|value: &String| -> Result<(), &'static str> {
            if value.trim().is_empty() {
                Err("this field is required")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(prompt_err)
}

/// Prompt for an optional value; empty input is accepted.
pub fn prompt_optional(label: &str, initial: &str) -> Result<String, CliError> {
    Input::<String>::new()
        .with_prompt(label)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_err)
}

/// Prompt for an absolute URL.
pub fn prompt_url(label: &str, initial: &str) -> Result<String, CliError> {
    Input::<String>::new()
        .with_prompt(label)
        .with_initial_text(initial)
        .validate_with(|value: &String| -> Result<(), String> {
            url::Url::parse(value.trim())
                .map(|_| ())
                .map_err(|e| format!("not a valid URL: {e}"))
        })
        .interact_text()
        .map_err(prompt_err)
}

/// Check a URL given on the command line.
pub fn validate_url(field: &str, value: &str) -> Result<(), CliError> {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|e| CliError::Validation {
            field: field.into(),
            reason: format!("not a valid URL ({e}): {value}"),
        })
}

/// Reject an `edit` that names no field to change.
pub fn require_changes(has_changes: bool) -> Result<(), CliError> {
    if has_changes {
        Ok(())
    } else {
        Err(CliError::Validation {
            field: "edit".into(),
            reason: "pass at least one field flag (or use --interactive)".into(),
        })
    }
}

// ── Loading indicator ───────────────────────────────────────────────

/// Whether a spinner should be drawn on stderr.
pub fn spinner_enabled(global: &GlobalOpts) -> bool {
    !global.quiet && std::io::stderr().is_terminal()
}

/// Drive `fut` to completion, showing a spinner whenever `store` reports
/// it is loading.
pub async fn while_loading<R, F>(
    store: &ResourceStore<R>,
    message: &str,
    enabled: bool,
    fut: F,
) -> F::Output
where
    R: Remote,
    F: Future,
{
    if !enabled {
        return fut.await;
    }

    let mut state = store.subscribe();
    let mut spinner: Option<ProgressBar> = None;

    tokio::pin!(fut);
    let out = loop {
        tokio::select! {
            out = &mut fut => break out,
            Ok(()) = state.changed() => {
                let loading = state.borrow_and_update().loading;
                match (loading, spinner.take()) {
                    (true, None) => spinner = Some(start_spinner(message)),
                    (true, Some(active)) => spinner = Some(active),
                    (false, Some(active)) => active.finish_and_clear(),
                    (false, None) => {}
                }
            }
        }
    };
    if let Some(active) = spinner {
        active.finish_and_clear();
    }
    out
}

fn start_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_owned());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Load `target` into `store`; a failure becomes the store's error message.
pub async fn load_or_fail<R: Remote>(
    store: &ResourceStore<R>,
    target: R::Target,
    message: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let result = while_loading(store, message, spinner_enabled(global), store.load(target)).await;
    result.map_err(|err| store_failure(store, err))
}

/// Wrap `err` with the message the store recorded for it.
pub fn store_failure<R: Remote>(store: &ResourceStore<R>, err: CoreError) -> CliError {
    let message = store
        .snapshot()
        .error
        .unwrap_or_else(|| err.to_string());
    CliError::request_failed(message, err)
}
