// ── Code snippet domain type ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippet {
    /// Server-assigned identifier.
    pub id: String,
    pub title: String,
    pub code: String,
    /// Free-form language label (not checked against a known set).
    pub language: String,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub is_public: bool,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Storage URL of the uploaded source file, if the snippet came from one.
    pub file_url: Option<String>,
    pub author: Option<String>,
}
