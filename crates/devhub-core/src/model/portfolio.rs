// ── Portfolio link domain type ──

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioLink {
    /// Server-assigned identifier.
    pub id: String,
    pub title: String,
    pub url: String,
    /// Display order as stored by the server. The console never re-sorts.
    pub order: i64,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
}
