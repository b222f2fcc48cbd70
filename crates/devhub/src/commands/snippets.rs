//! Code snippet command handlers.

use std::path::Path;

use chrono::Local;
use dialoguer::Editor;
use tabled::Tabled;

use devhub_core::{
    CodeSnippet, Console, SnippetDraft, SnippetField, SnippetFilter, SnippetRow, SnippetTarget,
    SnippetView, confirm_and_remove, format_timestamp, render_snippets,
};

use crate::cli::{GlobalOpts, SnippetAddArgs, SnippetEditArgs, SnippetsArgs, SnippetsCommand};
use crate::error::CliError;
use crate::output;

use super::util::{self, PromptConfirm};

const EMPTY_HINT: &str = "Run \"devhub snippets add\" to create one.";
const LOADING: &str = "Loading snippets...";

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SnippetTableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Language")]
    language: String,
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Visibility")]
    visibility: &'static str,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl From<&SnippetRow> for SnippetTableRow {
    fn from(r: &SnippetRow) -> Self {
        Self {
            id: r.id.clone(),
            title: r.title.clone(),
            language: r.language.clone(),
            tags: r.tags.join(", "),
            visibility: visibility(r.is_public),
            created: r.created.clone(),
            updated: r.updated.clone().unwrap_or_default(),
        }
    }
}

fn visibility(is_public: bool) -> &'static str {
    if is_public { "public" } else { "private" }
}

/// `Created: x`, plus `| Updated: y` when the server sent an update time.
fn dates_line(s: &CodeSnippet) -> String {
    let created = format_timestamp(s.created_at, &Local);
    match s.updated_at {
        Some(ts) => format!(
            "Created: {created} | Updated: {}",
            format_timestamp(Some(ts), &Local)
        ),
        None => format!("Created: {created}"),
    }
}

fn detail(s: &CodeSnippet) -> String {
    let mut lines = vec![
        format!("ID:          {}", s.id),
        format!("Title:       {}", s.title),
        format!("Language:    {}", s.language),
        format!("Visibility:  {}", visibility(s.is_public)),
        format!("Category:    {}", s.category.as_deref().unwrap_or("-")),
        format!("Tags:        {}", s.tags.join(", ")),
    ];
    if let Some(ref description) = s.description {
        lines.push(format!("Description: {description}"));
    }
    if let Some(ref author) = s.author {
        lines.push(format!("Author:      {author}"));
    }
    if let Some(ref file_url) = s.file_url {
        lines.push(format!("File:        {file_url}"));
    }
    lines.push(dates_line(s));
    lines.push(String::new());
    lines.push(s.code.clone());
    lines.join("\n")
}

/// Render the store's current snippets in the selected output format.
pub(crate) fn render_list(snippets: &[CodeSnippet], global: &GlobalOpts) -> String {
    output::render_view(
        global.output_format(),
        snippets,
        &render_snippets(snippets, &Local),
        |r| SnippetTableRow::from(r),
        |s| s.id.clone(),
        EMPTY_HINT,
        output::should_color(global.color_mode()),
    )
}

fn print_snippets(view: &SnippetView, global: &GlobalOpts) {
    let out = render_list(&view.store.snapshot().records, global);
    output::print_output(&out, global.quiet);
}

/// Switch the view's filter and fetch its target.
pub(crate) async fn select_filter(
    view: &mut SnippetView,
    filter: SnippetFilter,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let result = util::while_loading(
        &view.store,
        LOADING,
        util::spinner_enabled(global),
        view.filter.select(filter, &view.store),
    )
    .await;
    result.map_err(|err| util::store_failure(&view.store, err))
}

async fn mount(view: &SnippetView, global: &GlobalOpts) -> Result<(), CliError> {
    let result = util::while_loading(
        &view.store,
        LOADING,
        util::spinner_enabled(global),
        view.mount(),
    )
    .await;
    result.map_err(|err| util::store_failure(&view.store, err))
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    console: &Console,
    args: SnippetsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SnippetsCommand::List {
            public,
            language,
            tag,
        } => {
            let mut view = console.snippets();
            match (language, tag) {
                (Some(language), _) => {
                    let target = SnippetTarget::Language(language);
                    util::load_or_fail(&view.store, target, LOADING, global).await?;
                }
                (None, Some(tag)) => {
                    let target = SnippetTarget::Tag(tag);
                    util::load_or_fail(&view.store, target, LOADING, global).await?;
                }
                (None, None) if public => {
                    select_filter(&mut view, SnippetFilter::Public, global).await?;
                }
                (None, None) => mount(&view, global).await?,
            }
            print_snippets(&view, global);
            Ok(())
        }

        SnippetsCommand::Show { id } => {
            let snippet = console.snippet(&id).await?;
            let out = output::render_single(global.output_format(), &snippet, detail, |s| {
                s.id.clone()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SnippetsCommand::Add(add) => {
            let mut view = console.snippets();
            if add.interactive {
                prompt_draft(&mut view)?;
            } else {
                fill_draft(&mut view, add)?;
            }
            mount(&view, global).await?;

            let outcome = util::while_loading(
                &view.store,
                "Saving snippet...",
                util::spinner_enabled(global),
                view.form.submit(&view.store),
            )
            .await;
            print_snippets(&view, global);
            super::finish_mutation(outcome, view.store.snapshot().error, "Snippet added", global)
        }

        SnippetsCommand::Edit(edit) => {
            if !edit.interactive {
                util::require_changes(edit.has_changes())?;
            }
            let snippet = console.snippet(&edit.id).await?;
            let mut view = console.snippets();
            view.form.open_existing(&snippet.id, SnippetDraft::from(&snippet));
            if edit.interactive {
                prompt_draft(&mut view)?;
            } else {
                apply_edits(&mut view, edit)?;
            }
            mount(&view, global).await?;

            let outcome = util::while_loading(
                &view.store,
                "Saving snippet...",
                util::spinner_enabled(global),
                view.form.submit(&view.store),
            )
            .await;
            print_snippets(&view, global);
            let error = view.store.snapshot().error;
            super::finish_mutation(outcome, error, "Snippet updated", global)
        }

        SnippetsCommand::Delete { id } => {
            util::ensure_can_confirm(global, "a snippet")?;
            let view = console.snippets();
            mount(&view, global).await?;

            let confirm = PromptConfirm::new(global);
            let outcome = util::while_loading(
                &view.store,
                "Deleting snippet...",
                util::spinner_enabled(global),
                confirm_and_remove(&view.store, &id, &confirm),
            )
            .await?;
            print_snippets(&view, global);
            let error = view.store.snapshot().error;
            super::finish_mutation(outcome, error, "Snippet deleted", global)
        }
    }
}

// ── Draft entry ─────────────────────────────────────────────────────

/// Inline code wins over a file. `None` when neither was given.
fn code_from(code: Option<&str>, code_file: Option<&Path>) -> Result<Option<String>, CliError> {
    let code = match (code, code_file) {
        (Some(code), _) => code.to_owned(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => return Ok(None),
    };
    if code.trim().is_empty() {
        return Err(CliError::Validation {
            field: "code".into(),
            reason: "code must not be empty".into(),
        });
    }
    Ok(Some(code))
}

fn read_code(add: &SnippetAddArgs) -> Result<String, CliError> {
    code_from(add.code.as_deref(), add.code_file.as_deref())?.ok_or_else(|| CliError::Validation {
        field: "code".into(),
        reason: "pass --code or --code-file (or use --interactive)".into(),
    })
}

fn fill_draft(view: &mut SnippetView, add: SnippetAddArgs) -> Result<(), CliError> {
    let code = read_code(&add)?;

    let form = &mut view.form;
    form.toggle();
    form.edit(SnippetField::Title(add.title.unwrap_or_default()));
    form.edit(SnippetField::Language(add.language.unwrap_or_default()));
    form.edit(SnippetField::Code(code));
    form.edit(SnippetField::Tags(add.tags));
    form.edit(SnippetField::Category(add.category.unwrap_or_default()));
    form.edit(SnippetField::IsPublic(add.public));
    form.edit(SnippetField::Description(add.description.unwrap_or_default()));
    Ok(())
}

/// Overwrite only the fields named on the command line.
fn apply_edits(view: &mut SnippetView, edit: SnippetEditArgs) -> Result<(), CliError> {
    let code = code_from(edit.code.as_deref(), edit.code_file.as_deref())?;
    let visibility = edit.visibility();

    let form = &mut view.form;
    if let Some(title) = edit.title {
        form.edit(SnippetField::Title(title));
    }
    if let Some(language) = edit.language {
        form.edit(SnippetField::Language(language));
    }
    if let Some(code) = code {
        form.edit(SnippetField::Code(code));
    }
    if let Some(tags) = edit.tags {
        form.edit(SnippetField::Tags(tags));
    }
    if let Some(category) = edit.category {
        form.edit(SnippetField::Category(category));
    }
    if let Some(is_public) = visibility {
        form.edit(SnippetField::IsPublic(is_public));
    }
    if let Some(description) = edit.description {
        form.edit(SnippetField::Description(description));
    }
    Ok(())
}

/// Walk every draft field; the code is edited in `$EDITOR`.
pub(crate) fn prompt_draft(view: &mut SnippetView) -> Result<(), CliError> {
    let current: SnippetDraft = view.form.draft().clone();
    if !view.form.is_visible() {
        view.form.toggle();
    }

    let title = util::prompt_required("Title", &current.title)?;
    let language = util::prompt_required("Language", &current.language)?;
    let code = loop {
        let edited = Editor::new()
            .extension(&editor_extension(&language))
            .require_save(true)
            .edit(&current.code)
            .map_err(util::prompt_err)?;
        match edited {
            Some(code) if !code.trim().is_empty() => break code,
            _ => eprintln!("Code is required."),
        }
    };
    let tags = util::prompt_optional("Tags (comma-separated)", &current.tags)?;
    let category = util::prompt_optional("Category", &current.category)?;
    let is_public = dialoguer::Confirm::new()
        .with_prompt("Public?")
        .default(current.is_public)
        .interact()
        .map_err(util::prompt_err)?;
    let description = util::prompt_optional("Description", &current.description)?;

    let form = &mut view.form;
    form.edit(SnippetField::Title(title.trim().to_owned()));
    form.edit(SnippetField::Language(language.trim().to_owned()));
    form.edit(SnippetField::Code(code));
    form.edit(SnippetField::Tags(tags));
    form.edit(SnippetField::Category(category));
    form.edit(SnippetField::IsPublic(is_public));
    form.edit(SnippetField::Description(description));
    Ok(())
}

/// File extension for the editor buffer, so editors pick a syntax mode.
fn editor_extension(language: &str) -> String {
    let ext = match language.trim().to_lowercase().as_str() {
        "rust" => "rs",
        "python" => "py",
        "javascript" => "js",
        "typescript" => "ts",
        "shell" | "bash" => "sh",
        "markdown" => "md",
        "" => "txt",
        other => return format!(".{other}"),
    };
    format!(".{ext}")
}

/// One-line summary of an unsubmitted draft, naming the snippet being
/// edited if there is one.
pub(crate) fn draft_summary(draft: &SnippetDraft, editing: Option<&str>) -> String {
    let title = if draft.title.is_empty() {
        "<untitled>"
    } else {
        draft.title.as_str()
    };
    let language = if draft.language.is_empty() {
        "?"
    } else {
        draft.language.as_str()
    };
    let label = editing.map_or_else(|| "Draft".to_owned(), |id| format!("Editing {id}"));
    format!(
        "{label}: {title} [{language}] {} lines, {}",
        draft.code.lines().count(),
        visibility(draft.is_public)
    )
}
