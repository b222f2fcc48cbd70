// ── Console facade ──
//
// Wires one HTTP client into per-resource views. A view lives as long as
// the screen that shows it; nothing carries over between views.

use devhub_api::DevHubClient;
use tracing::debug;

use crate::config::DevHubConfig;
use crate::error::CoreError;
use crate::filter::FilterController;
use crate::form::{DraftForm, PortfolioDraft, SnippetDraft};
use crate::model::{CodeSnippet, PortfolioLink};
use crate::remote::{PortfolioRemote, PortfolioTarget, SnippetRemote};
use crate::store::ResourceStore;

/// Entry point for consumers: builds stores and runs one-off lookups.
#[derive(Debug, Clone)]
pub struct Console {
    client: DevHubClient,
    config: DevHubConfig,
}

impl Console {
    pub fn new(config: DevHubConfig) -> Result<Self, CoreError> {
        let client = DevHubClient::new(&config.api_url, &config.transport())?;
        debug!(base_url = %client.base_url(), "console ready");
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &DevHubConfig {
        &self.config
    }

    pub fn client(&self) -> &DevHubClient {
        &self.client
    }

    /// Fresh portfolio view: empty store, hidden form.
    pub fn portfolio(&self) -> PortfolioView {
        PortfolioView {
            store: ResourceStore::new(PortfolioRemote::new(self.client.clone())),
            form: DraftForm::new(),
        }
    }

    /// Fresh snippet view: empty store, hidden form, filter on `all`.
    pub fn snippets(&self) -> SnippetView {
        SnippetView {
            store: ResourceStore::new(SnippetRemote::new(self.client.clone())),
            form: DraftForm::new(),
            filter: FilterController::new(),
        }
    }

    pub async fn portfolio_link(&self, id: &str) -> Result<PortfolioLink, CoreError> {
        self.client
            .get_portfolio_link(id)
            .await
            .map(PortfolioLink::from)
            .map_err(|e| CoreError::lookup(e, "portfolio link", id))
    }

    pub async fn snippet(&self, id: &str) -> Result<CodeSnippet, CoreError> {
        self.client
            .get_snippet(id)
            .await
            .map(CodeSnippet::from)
            .map_err(|e| CoreError::lookup(e, "snippet", id))
    }
}

pub struct PortfolioView {
    pub store: ResourceStore<PortfolioRemote>,
    pub form: DraftForm<PortfolioDraft>,
}

impl PortfolioView {
    /// Initial fetch.
    pub async fn mount(&self) -> Result<(), CoreError> {
        self.store.load(PortfolioTarget::All).await
    }
}

pub struct SnippetView {
    pub store: ResourceStore<SnippetRemote>,
    pub form: DraftForm<SnippetDraft>,
    pub filter: FilterController,
}

impl SnippetView {
    /// Initial fetch against the selected filter.
    pub async fn mount(&self) -> Result<(), CoreError> {
        self.filter.refresh(&self.store).await
    }
}
