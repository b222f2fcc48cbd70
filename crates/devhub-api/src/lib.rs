// devhub-api: Async Rust client for the DevHub REST API (portfolio links + code snippets)

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

mod portfolio;
mod snippets;

pub use client::DevHubClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
pub use types::{
    CodeSnippet, NewCodeSnippet, NewPortfolioLink, PortfolioLink, Timestamp,
};

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
