// ── Code snippet draft ──

use devhub_api::NewCodeSnippet;

use super::Draft;
use crate::model::CodeSnippet;

/// Snippet form contents. `tags` is the raw comma-separated input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetDraft {
    pub title: String,
    pub code: String,
    pub language: String,
    pub tags: String,
    pub category: String,
    pub is_public: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetField {
    Title(String),
    Code(String),
    Language(String),
    Tags(String),
    Category(String),
    IsPublic(bool),
    Description(String),
}

/// Split a comma-separated tag list, trimming each entry and dropping
/// empty ones. Order is kept.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

impl Draft for SnippetDraft {
    type Field = SnippetField;
    type Request = NewCodeSnippet;

    fn set(&mut self, field: SnippetField) {
        match field {
            SnippetField::Title(v) => self.title = v,
            SnippetField::Code(v) => self.code = v,
            SnippetField::Language(v) => self.language = v,
            SnippetField::Tags(v) => self.tags = v,
            SnippetField::Category(v) => self.category = v,
            SnippetField::IsPublic(v) => self.is_public = v,
            SnippetField::Description(v) => self.description = v,
        }
    }

    fn to_request(&self) -> NewCodeSnippet {
        NewCodeSnippet {
            title: self.title.clone(),
            code: self.code.clone(),
            language: self.language.clone(),
            tags: parse_tags(&self.tags),
            category: self.category.clone(),
            is_public: self.is_public,
            description: self.description.clone(),
        }
    }
}

/// Pre-fill a draft from a stored snippet, for editing. Tags are joined
/// back into the comma-separated form `parse_tags` reads.
impl From<&CodeSnippet> for SnippetDraft {
    fn from(snippet: &CodeSnippet) -> Self {
        Self {
            title: snippet.title.clone(),
            code: snippet.code.clone(),
            language: snippet.language.clone(),
            tags: snippet.tags.join(", "),
            category: snippet.category.clone().unwrap_or_default(),
            is_public: snippet.is_public,
            description: snippet.description.clone().unwrap_or_default(),
        }
    }
}
