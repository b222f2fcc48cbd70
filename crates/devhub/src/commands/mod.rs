//! Command dispatch: bridges CLI args -> core views -> output formatting.

pub mod config_cmd;
pub mod console;
pub mod portfolio;
pub mod snippets;
pub mod util;

use devhub_core::{Console, MutationOutcome};

use crate::cli::{Command, GlobalOpts};
use crate::error::{CliError, exit_code};

/// Dispatch an API-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    console: &Console,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Portfolio(args) => portfolio::handle(console, args, global).await,
        Command::Snippets(args) => snippets::handle(console, args, global).await,
        Command::Console(args) => console::handle(console, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Err(CliError::Internal(
            "config and completions do not talk to the API".into(),
        )),
    }
}

/// Report a create/delete outcome after the refreshed list was printed.
///
/// `store_error` is the store's error slot after the mutation. A committed
/// mutation whose reload failed still exits non-zero.
pub(crate) fn finish_mutation(
    outcome: MutationOutcome,
    store_error: Option<String>,
    done: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match outcome {
        MutationOutcome::Committed => {
            if !global.quiet {
                eprintln!("✓ {done}");
            }
            match store_error {
                Some(message) => Err(CliError::RequestFailed {
                    message,
                    exit: exit_code::GENERAL,
                }),
                None => Ok(()),
            }
        }
        MutationOutcome::Declined => {
            if !global.quiet {
                eprintln!("Cancelled.");
            }
            Ok(())
        }
        MutationOutcome::Failed(err) => {
            let message = store_error.unwrap_or_else(|| err.to_string());
            Err(CliError::request_failed(message, err))
        }
    }
}
