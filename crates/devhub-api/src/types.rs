// Wire types for the DevHub REST API.
//
// Field names follow the server's camelCase JSON. Records read from the
// server carry an `id`; the `New*` request bodies never do.

use serde::{Deserialize, Serialize};

/// Server timestamp as serialized by the backend: `{"seconds": .., "nanos": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    pub seconds: i64,
    #[serde(default)]
    pub nanos: i32,
}

/// A portfolio link as returned by `GET /portfolio`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioLink {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `POST /portfolio` and `PUT /portfolio/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolioLink {
    pub title: String,
    pub url: String,
    pub order: i64,
    pub category: String,
    pub icon: String,
    pub description: String,
}

/// A code snippet as returned by `GET /snippets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippet {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_public: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
    #[serde(default)]
    pub gcs_file_url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

/// Body of `POST /snippets` and `PUT /snippets/{id}`. Tags travel as a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCodeSnippet {
    pub title: String,
    pub code: String,
    pub language: String,
    pub tags: Vec<String>,
    pub category: String,
    pub is_public: bool,
    pub description: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn snippet_tolerates_nulls_and_missing_fields() {
        let snippet: CodeSnippet = serde_json::from_value(json!({
            "id": "s1",
            "title": "Quick sort",
            "code": "fn main() {}",
            "language": "rust",
            "tags": null,
            "isPublic": null,
            "createdAt": { "seconds": 1_700_000_000 }
        }))
        .unwrap();

        assert_eq!(snippet.tags, None);
        assert_eq!(snippet.is_public, None);
        assert_eq!(
            snippet.created_at,
            Some(Timestamp {
                seconds: 1_700_000_000,
                nanos: 0
            })
        );
        assert!(snippet.updated_at.is_none());
    }

    #[test]
    fn new_snippet_body_has_no_id_and_uses_camel_case() {
        let body = serde_json::to_value(NewCodeSnippet {
            title: "t".into(),
            code: "c".into(),
            language: "l".into(),
            tags: vec!["a".into()],
            category: String::new(),
            is_public: true,
            description: String::new(),
        })
        .unwrap();

        assert!(body.get("id").is_none());
        assert_eq!(body["isPublic"], json!(true));
        assert_eq!(body["tags"], json!(["a"]));
    }
}
