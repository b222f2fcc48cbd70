// ── Domain model ──
//
// Canonical record types shown by the console. Built from the wire types
// in `devhub-api` via `crate::convert`; identifiers always come from the
// server.

mod portfolio;
mod snippet;

pub use portfolio::PortfolioLink;
pub use snippet::CodeSnippet;
