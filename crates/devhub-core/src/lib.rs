//! Synchronized collection layer between `devhub-api` and the console.
//!
//! - **[`ResourceStore`]** holds one server collection, its loading flag,
//!   and the last error. Transitions go through the pure
//!   [`StoreState::apply`]; loads are sequence-numbered so stale responses
//!   are dropped, and every mutation is followed by a full reload.
//! - **[`FilterController`]** switches the snippet list between all and
//!   public snippets.
//! - **[`DraftForm`]** holds an uncommitted record and submits it through
//!   the store.
//! - **[`render`]** projects a collection into display rows and guards
//!   deletes behind a [`Confirm`] step.
//! - **[`Console`]** builds all of the above from a [`DevHubConfig`].

pub mod config;
pub mod console;
pub mod convert;
pub mod error;
pub mod filter;
pub mod form;
pub mod model;
pub mod remote;
pub mod render;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_BASE_URL, DevHubConfig, TlsVerification};
pub use console::{Console, PortfolioView, SnippetView};
pub use error::CoreError;
pub use filter::{FilterController, FilterState, SnippetFilter};
pub use form::{
    Draft, DraftForm, FormEvent, FormState, PortfolioDraft, PortfolioField, SnippetDraft,
    SnippetField, parse_tags,
};
pub use model::{CodeSnippet, PortfolioLink};
pub use remote::{
    Labels, Operation, PortfolioRemote, PortfolioTarget, Remote, SnippetRemote, SnippetTarget,
};
pub use render::{
    Confirm, ListView, Placeholder, PortfolioRow, SnippetRow, confirm_and_remove,
    format_timestamp, render_portfolio, render_snippets,
};
pub use store::{MutationOutcome, ResourceStore, StoreEvent, StoreState};
