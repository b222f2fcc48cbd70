// ── API-to-domain type conversions ──
//
// Bridges raw `devhub-api` wire types into canonical `devhub-core`
// domain types. Blank optional strings collapse to `None` so renderers
// only need one emptiness check.

use chrono::{DateTime, Utc};

use devhub_api::types as wire;

use crate::model::{CodeSnippet, PortfolioLink};

/// Treat `None`, `""` and whitespace-only strings as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Reconstruct a point in time from a server timestamp.
pub(crate) fn timestamp_to_datetime(ts: wire::Timestamp) -> Option<DateTime<Utc>> {
    let nanos = u32::try_from(ts.nanos).unwrap_or(0);
    DateTime::from_timestamp(ts.seconds, nanos)
}

impl From<wire::PortfolioLink> for PortfolioLink {
    fn from(l: wire::PortfolioLink) -> Self {
        Self {
            id: l.id,
            title: l.title,
            url: l.url,
            order: l.order,
            category: non_blank(l.category),
            icon: non_blank(l.icon),
            description: non_blank(l.description),
        }
    }
}

impl From<wire::CodeSnippet> for CodeSnippet {
    fn from(s: wire::CodeSnippet) -> Self {
        Self {
            id: s.id,
            title: s.title,
            code: s.code,
            language: s.language,
            tags: s.tags.unwrap_or_default(),
            category: non_blank(s.category),
            is_public: s.is_public.unwrap_or(false),
            description: non_blank(s.description),
            created_at: s.created_at.and_then(timestamp_to_datetime),
            updated_at: s.updated_at.and_then(timestamp_to_datetime),
            file_url: non_blank(s.gcs_file_url),
            author: non_blank(s.author),
        }
    }
}
