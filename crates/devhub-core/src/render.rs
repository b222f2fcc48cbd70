// ── List rendering ──
//
// Pure projection of a store collection into display rows, plus the
// confirm-then-delete step wired to each row.

use std::fmt;
use std::future::Future;

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use tracing::debug;

use crate::error::CoreError;
use crate::model::{CodeSnippet, PortfolioLink};
use crate::remote::{Labels, PortfolioRemote, Remote, SnippetRemote};
use crate::store::{MutationOutcome, ResourceStore};

/// Rendered in place of an absent timestamp.
pub const MISSING_DATE: &str = "N/A";

const DATE_FORMAT: &str = "%-m/%-d/%Y %-I:%M:%S %p";

/// Shown when a collection is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub message: &'static str,
    /// Name of the action that creates the first record.
    pub action: &'static str,
}

impl Placeholder {
    pub fn from_labels(labels: &Labels) -> Self {
        Self {
            message: labels.empty,
            action: labels.create_action,
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Click \"{}\" to get started!",
            self.message, self.action
        )
    }
}

/// A rendered list: either rows in fetch order or the empty placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView<Row> {
    Empty(Placeholder),
    Rows(Vec<Row>),
}

impl<Row> ListView<Row> {
    fn build<T>(records: &[T], labels: &Labels, row: impl FnMut(&T) -> Row) -> Self {
        if records.is_empty() {
            Self::Empty(Placeholder::from_labels(labels))
        } else {
            Self::Rows(records.iter().map(row).collect())
        }
    }

    pub fn rows(&self) -> &[Row] {
        match self {
            Self::Empty(_) => &[],
            Self::Rows(rows) => rows,
        }
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        match self {
            Self::Empty(placeholder) => Some(placeholder),
            Self::Rows(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioRow {
    pub id: String,
    pub title: String,
    pub url: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetRow {
    pub id: String,
    pub title: String,
    pub language: String,
    pub category: Option<String>,
    pub is_public: bool,
    pub tags: Vec<String>,
    pub description: Option<String>,
    pub code: String,
    /// Always present; `N/A` when the server sent no creation time.
    pub created: String,
    /// Only present when the server sent an update time.
    pub updated: Option<String>,
}

/// Format a timestamp as `M/D/YYYY h:mm:ss AM` in `tz`.
pub fn format_timestamp<Tz>(ts: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    ts.map_or_else(
        || MISSING_DATE.to_owned(),
        |ts| ts.with_timezone(tz).format(DATE_FORMAT).to_string(),
    )
}

pub fn render_portfolio(links: &[PortfolioLink]) -> ListView<PortfolioRow> {
    ListView::build(links, &PortfolioRemote::LABELS, |link| PortfolioRow {
        id: link.id.clone(),
        title: link.title.clone(),
        url: link.url.clone(),
        category: link.category.clone(),
        description: link.description.clone(),
        order: link.order,
    })
}

pub fn render_snippets<Tz>(snippets: &[CodeSnippet], tz: &Tz) -> ListView<SnippetRow>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    ListView::build(snippets, &SnippetRemote::LABELS, |s| SnippetRow {
        id: s.id.clone(),
        title: s.title.clone(),
        language: s.language.clone(),
        category: s.category.clone(),
        is_public: s.is_public,
        tags: s.tags.clone(),
        description: s.description.clone(),
        code: s.code.clone(),
        created: format_timestamp(s.created_at, tz),
        updated: s.updated_at.map(|ts| format_timestamp(Some(ts), tz)),
    })
}

// ── Delete confirmation ──────────────────────────────────────────────

/// Asks the user a yes/no question and waits for the answer.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Ask `confirm` first; only a `true` answer issues the delete.
pub async fn confirm_and_remove<R, C>(
    store: &ResourceStore<R>,
    id: &str,
    confirm: &C,
) -> Result<MutationOutcome, CoreError>
where
    R: Remote,
    C: Confirm + Sync,
{
    if !confirm.confirm(R::LABELS.delete_prompt).await? {
        debug!(id, "delete declined");
        return Ok(MutationOutcome::Declined);
    }
    Ok(store.remove(id).await)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::FixedOffset;
    use pretty_assertions::assert_eq;

    use super::*;

    fn snippet(id: &str, created: Option<i64>, updated: Option<i64>) -> CodeSnippet {
        CodeSnippet {
            id: id.into(),
            title: format!("title {id}"),
            code: "fn main() {}".into(),
            language: "rust".into(),
            tags: vec!["cli".into()],
            category: None,
            is_public: false,
            description: None,
            created_at: created.and_then(|s| DateTime::from_timestamp(s, 0)),
            updated_at: updated.and_then(|s| DateTime::from_timestamp(s, 0)),
            file_url: None,
            author: None,
        }
    }

    #[test]
    fn empty_collections_render_placeholders() {
        let view = render_portfolio(&[]);
        assert!(view.rows().is_empty());
        assert_eq!(
            view.placeholder().map(ToString::to_string).as_deref(),
            Some("No portfolio links yet. Click \"Add New Link\" to get started!")
        );

        let view = render_snippets(&[], &Utc);
        assert_eq!(
            view.placeholder().map(ToString::to_string).as_deref(),
            Some("No snippets found. Click \"Add New Snippet\" to get started!")
        );
    }

    #[test]
    fn rows_keep_fetch_order() {
        let links: Vec<PortfolioLink> = [("b", 2), ("a", 1), ("c", 3)]
            .into_iter()
            .map(|(id, order)| PortfolioLink {
                id: id.into(),
                title: id.to_uppercase(),
                url: format!("https://{id}.dev"),
                order,
                category: None,
                icon: None,
                description: None,
            })
            .collect();

        let view = render_portfolio(&links);
        let ids: Vec<&str> = view.rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(view.placeholder(), None);
    }

    #[test]
    fn absent_created_renders_na_and_updated_is_omitted() {
        let view = render_snippets(&[snippet("1", None, None)], &Utc);
        let row = &view.rows()[0];
        assert_eq!(row.created, "N/A");
        assert_eq!(row.updated, None);
    }

    #[test]
    fn timestamps_format_in_given_zone() {
        // 2024-01-15T10:30:00Z
        let ts = 1_705_314_600;
        assert_eq!(
            format_timestamp(DateTime::from_timestamp(ts, 0), &Utc),
            "1/15/2024 10:30:00 AM"
        );

        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(
            format_timestamp(DateTime::from_timestamp(ts, 0), &new_york),
            "1/15/2024 5:30:00 AM"
        );

        let view = render_snippets(&[snippet("1", Some(ts), Some(ts + 3600))], &Utc);
        let row = &view.rows()[0];
        assert_eq!(row.created, "1/15/2024 10:30:00 AM");
        assert_eq!(row.updated.as_deref(), Some("1/15/2024 11:30:00 AM"));
    }
}
