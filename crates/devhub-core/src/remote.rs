// ── Remote collections ──
//
// The seam between a `ResourceStore` and the HTTP client. Each resource
// type implements `Remote` once; tests substitute scripted fakes.

use std::fmt;
use std::future::Future;

use devhub_api::{DevHubClient, NewCodeSnippet, NewPortfolioLink};
use strum::Display;

use crate::error::CoreError;
use crate::model::{CodeSnippet, PortfolioLink};

/// Store operation, used to pick the failure message prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Fetch,
    Create,
    Update,
    Delete,
}

/// Fixed user-facing text for one resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    /// Prefix of a failed `load`.
    pub fetch_failed: &'static str,
    /// Prefix of a failed `create`.
    pub create_failed: &'static str,
    /// Prefix of a failed `update`.
    pub update_failed: &'static str,
    /// Prefix of a failed `remove`.
    pub delete_failed: &'static str,
    /// Question asked before deleting a row.
    pub delete_prompt: &'static str,
    /// Shown instead of rows when the collection is empty.
    pub empty: &'static str,
    /// Name of the creation action, used in the empty-list hint.
    pub create_action: &'static str,
}

impl Labels {
    pub fn failure_prefix(&self, op: Operation) -> &'static str {
        match op {
            Operation::Fetch => self.fetch_failed,
            Operation::Create => self.create_failed,
            Operation::Update => self.update_failed,
            Operation::Delete => self.delete_failed,
        }
    }
}

/// A server-side collection that can be listed, appended to, edited, and pruned.
pub trait Remote: Send + Sync + 'static {
    /// Record type held in the store.
    type Record: Clone + Send + Sync + 'static;
    /// Which endpoint a fetch goes to.
    type Target: Clone + Default + fmt::Debug + PartialEq + Send + Sync + 'static;
    /// Body of a create or update request (no identifier).
    type New: Send + Sync;

    const LABELS: Labels;

    fn list(
        &self,
        target: &Self::Target,
    ) -> impl Future<Output = Result<Vec<Self::Record>, CoreError>> + Send;

    fn create(&self, record: &Self::New) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Replace every field of the record `id`.
    fn update(
        &self,
        id: &str,
        record: &Self::New,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn remove(&self, id: &str) -> impl Future<Output = Result<(), CoreError>> + Send;
}

// ── Portfolio ────────────────────────────────────────────────────────

/// Fetch targets for portfolio links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PortfolioTarget {
    /// `GET /portfolio`
    #[default]
    All,
    /// `GET /portfolio/category/{category}`
    Category(String),
}

/// Portfolio links backed by the DevHub API.
#[derive(Debug, Clone)]
pub struct PortfolioRemote {
    client: DevHubClient,
}

impl PortfolioRemote {
    pub fn new(client: DevHubClient) -> Self {
        Self { client }
    }
}

impl Remote for PortfolioRemote {
    type Record = PortfolioLink;
    type Target = PortfolioTarget;
    type New = NewPortfolioLink;

    const LABELS: Labels = Labels {
        fetch_failed: "Failed to fetch portfolio links",
        create_failed: "Failed to create portfolio link",
        update_failed: "Failed to update portfolio link",
        delete_failed: "Failed to delete link",
        delete_prompt: "Are you sure you want to delete this link?",
        empty: "No portfolio links yet.",
        create_action: "Add New Link",
    };

    async fn list(&self, target: &PortfolioTarget) -> Result<Vec<PortfolioLink>, CoreError> {
        let links = match target {
            PortfolioTarget::All => self.client.list_portfolio_links().await?,
            PortfolioTarget::Category(category) => {
                self.client
                    .list_portfolio_links_by_category(category)
                    .await?
            }
        };
        Ok(links.into_iter().map(PortfolioLink::from).collect())
    }

    async fn create(&self, record: &NewPortfolioLink) -> Result<(), CoreError> {
        Ok(self.client.create_portfolio_link(record).await?)
    }

    async fn update(&self, id: &str, record: &NewPortfolioLink) -> Result<(), CoreError> {
        Ok(self.client.update_portfolio_link(id, record).await?)
    }

    async fn remove(&self, id: &str) -> Result<(), CoreError> {
        Ok(self.client.delete_portfolio_link(id).await?)
    }
}

// ── Snippets ─────────────────────────────────────────────────────────

/// Fetch targets for code snippets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SnippetTarget {
    /// `GET /snippets`
    #[default]
    All,
    /// `GET /snippets/public`
    Public,
    /// `GET /snippets/language/{language}`
    Language(String),
    /// `GET /snippets/tag/{tag}`
    Tag(String),
}

/// Code snippets backed by the DevHub API.
#[derive(Debug, Clone)]
pub struct SnippetRemote {
    client: DevHubClient,
}

impl SnippetRemote {
    pub fn new(client: DevHubClient) -> Self {
        Self { client }
    }
}

impl Remote for SnippetRemote {
    type Record = CodeSnippet;
    type Target = SnippetTarget;
    type New = NewCodeSnippet;

    const LABELS: Labels = Labels {
        fetch_failed: "Failed to fetch snippets",
        create_failed: "Failed to create snippet",
        update_failed: "Failed to update snippet",
        delete_failed: "Failed to delete snippet",
        delete_prompt: "Are you sure you want to delete this snippet?",
        empty: "No snippets found.",
        create_action: "Add New Snippet",
    };

    async fn list(&self, target: &SnippetTarget) -> Result<Vec<CodeSnippet>, CoreError> {
        let snippets = match target {
            SnippetTarget::All => self.client.list_snippets().await?,
            SnippetTarget::Public => self.client.list_public_snippets().await?,
            SnippetTarget::Language(language) => {
                self.client.list_snippets_by_language(language).await?
            }
            SnippetTarget::Tag(tag) => self.client.list_snippets_by_tag(tag).await?,
        };
        Ok(snippets.into_iter().map(CodeSnippet::from).collect())
    }

    async fn create(&self, record: &NewCodeSnippet) -> Result<(), CoreError> {
        Ok(self.client.create_snippet(record).await?)
    }

    async fn update(&self, id: &str, record: &NewCodeSnippet) -> Result<(), CoreError> {
        Ok(self.client.update_snippet(id, record).await?)
    }

    async fn remove(&self, id: &str) -> Result<(), CoreError> {
        Ok(self.client.delete_snippet(id).await?)
    }
}
