//! Portfolio link command handlers.

use dialoguer::Input;
use tabled::Tabled;

use devhub_core::{
    Console, PortfolioDraft, PortfolioField, PortfolioLink, PortfolioRow, PortfolioTarget,
    PortfolioView, confirm_and_remove, render_portfolio,
};

use crate::cli::{GlobalOpts, PortfolioAddArgs, PortfolioArgs, PortfolioCommand, PortfolioEditArgs};
use crate::error::CliError;
use crate::output;

use super::util::{self, PromptConfirm};

const EMPTY_HINT: &str = "Run \"devhub portfolio add\" to create one.";

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct LinkRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "URL")]
    url: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Order")]
    order: i64,
}

impl From<&PortfolioRow> for LinkRow {
    fn from(r: &PortfolioRow) -> Self {
        Self {
            id: r.id.clone(),
            title: r.title.clone(),
            url: r.url.clone(),
            category: r.category.clone().unwrap_or_default(),
            order: r.order,
        }
    }
}

fn detail(l: &PortfolioLink) -> String {
    [
        format!("ID:          {}", l.id),
        format!("Title:       {}", l.title),
        format!("URL:         {}", l.url),
        format!("Order:       {}", l.order),
        format!("Category:    {}", l.category.as_deref().unwrap_or("-")),
        format!("Icon:        {}", l.icon.as_deref().unwrap_or("-")),
        format!("Description: {}", l.description.as_deref().unwrap_or("-")),
    ]
    .join("\n")
}

/// Render the store's current links in the selected output format.
pub(crate) fn render_links(links: &[PortfolioLink], global: &GlobalOpts) -> String {
    output::render_view(
        global.output_format(),
        links,
        &render_portfolio(links),
        |r| LinkRow::from(r),
        |l| l.id.clone(),
        EMPTY_HINT,
        output::should_color(global.color_mode()),
    )
}

fn print_links(view: &PortfolioView, global: &GlobalOpts) {
    let out = render_links(&view.store.snapshot().records, global);
    output::print_output(&out, global.quiet);
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    console: &Console,
    args: PortfolioArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        PortfolioCommand::List { category } => {
            let view = console.portfolio();
            let target = category.map_or(PortfolioTarget::All, PortfolioTarget::Category);
            util::load_or_fail(&view.store, target, "Loading portfolio links...", global).await?;
            print_links(&view, global);
            Ok(())
        }

        PortfolioCommand::Show { id } => {
            let link = console.portfolio_link(&id).await?;
            let out = output::render_single(global.output_format(), &link, detail, |l| {
                l.id.clone()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PortfolioCommand::Add(add) => {
            let mut view = console.portfolio();
            if add.interactive {
                prompt_draft(&mut view)?;
            } else {
                fill_draft(&mut view, add)?;
            }
            util::load_or_fail(
                &view.store,
                PortfolioTarget::All,
                "Loading portfolio links...",
                global,
            )
            .await?;

            let outcome = util::while_loading(
                &view.store,
                "Saving link...",
                util::spinner_enabled(global),
                view.form.submit(&view.store),
            )
            .await;
            print_links(&view, global);
            super::finish_mutation(outcome, view.store.snapshot().error, "Link added", global)
        }

        PortfolioCommand::Edit(edit) => {
            if !edit.interactive {
                util::require_changes(edit.has_changes())?;
            }
            if let Some(ref url) = edit.url {
                util::validate_url("url", url)?;
            }
            let link = console.portfolio_link(&edit.id).await?;
            let mut view = console.portfolio();
            view.form.open_existing(&link.id, PortfolioDraft::from(&link));
            if edit.interactive {
                prompt_draft(&mut view)?;
            } else {
                apply_edits(&mut view, edit);
            }
            util::load_or_fail(
                &view.store,
                PortfolioTarget::All,
                "Loading portfolio links...",
                global,
            )
            .await?;

            let outcome = util::while_loading(
                &view.store,
                "Saving link...",
                util::spinner_enabled(global),
                view.form.submit(&view.store),
            )
            .await;
            print_links(&view, global);
            super::finish_mutation(outcome, view.store.snapshot().error, "Link updated", global)
        }

        PortfolioCommand::Delete { id } => {
            util::ensure_can_confirm(global, "a portfolio link")?;
            let view = console.portfolio();
            util::load_or_fail(
                &view.store,
                PortfolioTarget::All,
                "Loading portfolio links...",
                global,
            )
            .await?;

            let confirm = PromptConfirm::new(global);
            let outcome = util::while_loading(
                &view.store,
                "Deleting link...",
                util::spinner_enabled(global),
                confirm_and_remove(&view.store, &id, &confirm),
            )
            .await?;
            print_links(&view, global);
            super::finish_mutation(outcome, view.store.snapshot().error, "Link deleted", global)
        }
    }
}

// ── Draft entry ─────────────────────────────────────────────────────

fn fill_draft(view: &mut PortfolioView, add: PortfolioAddArgs) -> Result<(), CliError> {
    let title = add.title.unwrap_or_default();
    let url = add.url.unwrap_or_default();
    util::validate_url("url", &url)?;

    let form = &mut view.form;
    form.toggle();
    form.edit(PortfolioField::Title(title));
    form.edit(PortfolioField::Url(url));
    form.edit(PortfolioField::Order(add.order));
    form.edit(PortfolioField::Category(add.category.unwrap_or_default()));
    form.edit(PortfolioField::Icon(add.icon.unwrap_or_default()));
    form.edit(PortfolioField::Description(add.description.unwrap_or_default()));
    Ok(())
}

/// Overwrite only the fields named on the command line.
fn apply_edits(view: &mut PortfolioView, edit: PortfolioEditArgs) {
    let form = &mut view.form;
    if let Some(title) = edit.title {
        form.edit(PortfolioField::Title(title));
    }
    if let Some(url) = edit.url {
        form.edit(PortfolioField::Url(url));
    }
    if let Some(order) = edit.order {
        form.edit(PortfolioField::Order(order));
    }
    if let Some(category) = edit.category {
        form.edit(PortfolioField::Category(category));
    }
    if let Some(icon) = edit.icon {
        form.edit(PortfolioField::Icon(icon));
    }
    if let Some(description) = edit.description {
        form.edit(PortfolioField::Description(description));
    }
}

/// Walk every draft field with prompts pre-filled from the current draft.
pub(crate) fn prompt_draft(view: &mut PortfolioView) -> Result<(), CliError> {
    let current: PortfolioDraft = view.form.draft().clone();
    if !view.form.is_visible() {
        view.form.toggle();
    }

    let title = util::prompt_required("Title", &current.title)?;
    let url = util::prompt_url("URL", &current.url)?;
    let order = Input::<i64>::new()
        .with_prompt("Order")
        .default(current.order)
        .interact_text()
        .map_err(util::prompt_err)?;
    let category = util::prompt_optional("Category", &current.category)?;
    let icon = util::prompt_optional("Icon", &current.icon)?;
    let description = util::prompt_optional("Description", &current.description)?;

    let form = &mut view.form;
    form.edit(PortfolioField::Title(title.trim().to_owned()));
    form.edit(PortfolioField::Url(url.trim().to_owned()));
    form.edit(PortfolioField::Order(order));
    form.edit(PortfolioField::Category(category));
    form.edit(PortfolioField::Icon(icon));
    form.edit(PortfolioField::Description(description));
    Ok(())
}

/// One-line summary of an unsubmitted draft, naming the link being
/// edited if there is one.
pub(crate) fn draft_summary(draft: &PortfolioDraft, editing: Option<&str>) -> String {
    let title = if draft.title.is_empty() {
        "<untitled>"
    } else {
        draft.title.as_str()
    };
    let label = editing.map_or_else(|| "Draft".to_owned(), |id| format!("Editing {id}"));
    format!("{label}: {title} <{}> (order {})", draft.url, draft.order)
}
