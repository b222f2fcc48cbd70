//! Interactive console: one resource type, redrawn after every action.
//!
//! Each pass prints the store error (if any) above the list, the list
//! itself, and the pending draft while the form is open. Failures never
//! end the loop; they show up on the next pass.

use std::io::IsTerminal;

use dialoguer::Select;
use tracing::debug;

use devhub_core::{
    CodeSnippet, Console, CoreError, MutationOutcome, PortfolioDraft, PortfolioLink, Remote,
    ResourceStore, SnippetDraft, SnippetFilter, confirm_and_remove,
};

use crate::cli::{ConsoleArgs, GlobalOpts, Resource};
use crate::error::CliError;
use crate::output;

use super::util::{self, PromptConfirm};
use super::{portfolio, snippets};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Refresh,
    Filter(SnippetFilter),
    OpenForm,
    EditDraft,
    Submit,
    HideForm,
    Edit,
    Delete,
    Quit,
}

pub async fn handle(
    console: &Console,
    args: ConsoleArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !std::io::stdin().is_terminal() {
        return Err(CliError::Validation {
            field: "console".into(),
            reason: "the interactive console needs a terminal on stdin".into(),
        });
    }
    match args.resource {
        Resource::Portfolio => run_portfolio(console, global).await,
        Resource::Snippets => run_snippets(console, global).await,
    }
}

// ── Portfolio ───────────────────────────────────────────────────────

async fn run_portfolio(console: &Console, global: &GlobalOpts) -> Result<(), CliError> {
    let mut view = console.portfolio();
    let spinner = util::spinner_enabled(global);
    let mount = view.mount();
    settle(util::while_loading(&view.store, "Loading portfolio links...", spinner, mount).await);

    loop {
        let state = view.store.snapshot();
        print_screen(
            state.error.as_deref(),
            &portfolio::render_links(&state.records, global),
            view.form
                .is_visible()
                .then(|| portfolio::draft_summary(view.form.draft(), view.form.editing())),
            global,
        );

        let items = menu(
            view.form.is_visible(),
            "Add New Link",
            None,
            !state.records.is_empty(),
        );
        match choose(&items)? {
            Action::Refresh => {
                let reload = view.store.reload();
                settle(util::while_loading(&view.store, "Refreshing...", spinner, reload).await);
            }
            Action::OpenForm | Action::EditDraft => portfolio::prompt_draft(&mut view)?,
            Action::HideForm => view.form.toggle(),
            Action::Submit => {
                let done = if view.form.editing().is_some() {
                    "Link updated"
                } else {
                    "Link added"
                };
                let outcome = util::while_loading(
                    &view.store,
                    "Saving link...",
                    spinner,
                    view.form.submit(&view.store),
                )
                .await;
                report(&outcome, done, global);
            }
            Action::Edit => {
                let picked = pick_row("Edit which?", &link_rows(&state.records))?
                    .and_then(|id| state.records.iter().find(|l| l.id == id));
                if let Some(link) = picked {
                    view.form.open_existing(&link.id, PortfolioDraft::from(link));
                    portfolio::prompt_draft(&mut view)?;
                }
            }
            Action::Delete => {
                if let Some(id) = pick_row("Delete which?", &link_rows(&state.records))? {
                    remove_row(&view.store, &id, "Link deleted", global).await?;
                }
            }
            Action::Filter(_) => {}
            Action::Quit => return Ok(()),
        }
    }
}

// ── Snippets ────────────────────────────────────────────────────────

async fn run_snippets(console: &Console, global: &GlobalOpts) -> Result<(), CliError> {
    let mut view = console.snippets();
    let spinner = util::spinner_enabled(global);
    let mount = view.mount();
    settle(util::while_loading(&view.store, "Loading snippets...", spinner, mount).await);

    loop {
        let state = view.store.snapshot();
        if !global.quiet {
            eprintln!("Showing: {} snippets", view.filter.selected());
        }
        print_screen(
            state.error.as_deref(),
            &snippets::render_list(&state.records, global),
            view.form
                .is_visible()
                .then(|| snippets::draft_summary(view.form.draft(), view.form.editing())),
            global,
        );

        let other = match view.filter.selected() {
            SnippetFilter::All => SnippetFilter::Public,
            SnippetFilter::Public => SnippetFilter::All,
        };
        let items = menu(
            view.form.is_visible(),
            "Add New Snippet",
            Some(other),
            !state.records.is_empty(),
        );
        match choose(&items)? {
            Action::Refresh => {
                let reload = view.store.reload();
                settle(util::while_loading(&view.store, "Refreshing...", spinner, reload).await);
            }
            Action::Filter(filter) => {
                if let Err(err) = snippets::select_filter(&mut view, filter, global).await {
                    debug!(error = %err, "filter load failed");
                }
            }
            Action::OpenForm | Action::EditDraft => snippets::prompt_draft(&mut view)?,
            Action::HideForm => view.form.toggle(),
            Action::Submit => {
                let done = if view.form.editing().is_some() {
                    "Snippet updated"
                } else {
                    "Snippet added"
                };
                let outcome = util::while_loading(
                    &view.store,
                    "Saving snippet...",
                    spinner,
                    view.form.submit(&view.store),
                )
                .await;
                report(&outcome, done, global);
            }
            Action::Edit => {
                let picked = pick_row("Edit which?", &snippet_rows(&state.records))?
                    .and_then(|id| state.records.iter().find(|s| s.id == id));
                if let Some(snippet) = picked {
                    view.form.open_existing(&snippet.id, SnippetDraft::from(snippet));
                    snippets::prompt_draft(&mut view)?;
                }
            }
            Action::Delete => {
                if let Some(id) = pick_row("Delete which?", &snippet_rows(&state.records))? {
                    remove_row(&view.store, &id, "Snippet deleted", global).await?;
                }
            }
            Action::Quit => return Ok(()),
        }
    }
}

// ── Shared pieces ───────────────────────────────────────────────────

/// Load results are already recorded in the store; only log them here.
fn settle(result: Result<(), CoreError>) {
    if let Err(err) = result {
        debug!(error = %err, "load failed");
    }
}

fn menu(
    form_open: bool,
    create_label: &str,
    filter: Option<SnippetFilter>,
    has_rows: bool,
) -> Vec<(String, Action)> {
    let mut items = vec![("Refresh".to_owned(), Action::Refresh)];
    if let Some(filter) = filter {
        items.push((format!("Show {filter} snippets"), Action::Filter(filter)));
    }
    if form_open {
        items.push(("Submit draft".to_owned(), Action::Submit));
        items.push(("Edit draft".to_owned(), Action::EditDraft));
        items.push(("Hide form".to_owned(), Action::HideForm));
    } else {
        items.push((create_label.to_owned(), Action::OpenForm));
        if has_rows {
            items.push(("Edit...".to_owned(), Action::Edit));
        }
    }
    if has_rows {
        items.push(("Delete...".to_owned(), Action::Delete));
    }
    items.push(("Quit".to_owned(), Action::Quit));
    items
}

fn choose(items: &[(String, Action)]) -> Result<Action, CliError> {
    let labels: Vec<&str> = items.iter().map(|(label, _)| label.as_str()).collect();
    let picked = Select::new()
        .with_prompt("Action")
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(util::prompt_err)?;
    Ok(picked
        .and_then(|i| items.get(i))
        .map_or(Action::Quit, |(_, action)| *action))
}

fn link_rows(links: &[PortfolioLink]) -> Vec<(String, String)> {
    links
        .iter()
        .map(|l| (l.id.clone(), format!("{} ({})", l.title, l.url)))
        .collect()
}

fn snippet_rows(snippets: &[CodeSnippet]) -> Vec<(String, String)> {
    snippets
        .iter()
        .map(|s| (s.id.clone(), format!("{} [{}]", s.title, s.language)))
        .collect()
}

/// Pick a row by label and return its id; `None` means back out.
fn pick_row(prompt: &str, rows: &[(String, String)]) -> Result<Option<String>, CliError> {
    let mut labels: Vec<&str> = rows.iter().map(|(_, label)| label.as_str()).collect();
    labels.push("Back");
    let picked = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(util::prompt_err)?;
    Ok(picked.and_then(|i| rows.get(i)).map(|(id, _)| id.clone()))
}

async fn remove_row<R: Remote>(
    store: &ResourceStore<R>,
    id: &str,
    done: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let confirm = PromptConfirm::new(global);
    let outcome = util::while_loading(
        store,
        "Deleting...",
        util::spinner_enabled(global),
        confirm_and_remove(store, id, &confirm),
    )
    .await?;
    report(&outcome, done, global);
    Ok(())
}

fn report(outcome: &MutationOutcome, done: &str, global: &GlobalOpts) {
    if global.quiet {
        return;
    }
    match outcome {
        MutationOutcome::Committed => eprintln!("✓ {done}"),
        MutationOutcome::Declined => eprintln!("Cancelled."),
        // Shown above the list on the next pass.
        MutationOutcome::Failed(_) => {}
    }
}

fn print_screen(error: Option<&str>, list: &str, draft: Option<String>, global: &GlobalOpts) {
    let color = output::should_color(global.color_mode());
    if let Some(message) = error {
        eprintln!("{}", output::error_line(message, color));
    }
    output::print_output(list, global.quiet);
    if let Some(draft) = draft {
        eprintln!("{draft}");
    }
}
