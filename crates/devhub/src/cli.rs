//! Clap derive structures for the `devhub` CLI.
//!
//! Defines the command tree, global flags, and shared value types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// devhub -- portfolio links and code snippets from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "devhub",
    version,
    about = "Manage portfolio links and code snippets from the command line",
    long_about = "A console for a DevHub server: list, add, edit, and delete portfolio links\n\
        and code snippets, one-shot or in an interactive loop.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// API base URL, including the /api prefix (overrides config)
    #[arg(long, short = 'u', env = "DEVHUB_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format [default: table, or `output` from config]
    #[arg(long, short = 'o', env = "DEVHUB_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: auto, or `color` from config]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "DEVHUB_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds [default: 30, or `timeout` from config]
    #[arg(long, env = "DEVHUB_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

impl GlobalOpts {
    pub fn output_format(&self) -> OutputFormat {
        self.output.unwrap_or(OutputFormat::Table)
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color.unwrap_or(ColorMode::Auto)
    }
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one identifier per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage portfolio links
    #[command(alias = "pf", alias = "links")]
    Portfolio(PortfolioArgs),

    /// Manage code snippets
    #[command(alias = "sn")]
    Snippets(SnippetsArgs),

    /// Interactive console for one resource type
    Console(ConsoleArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Reject empty and whitespace-only values.
pub fn non_empty(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("value must not be empty".into())
    } else {
        Ok(value.to_owned())
    }
}

// ── Portfolio ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PortfolioArgs {
    #[command(subcommand)]
    pub command: PortfolioCommand,
}

#[derive(Debug, Subcommand)]
pub enum PortfolioCommand {
    /// List portfolio links in server order
    #[command(alias = "ls")]
    List {
        /// Only links in this category
        #[arg(long, short = 'c')]
        category: Option<String>,
    },

    /// Show one portfolio link
    #[command(alias = "get")]
    Show {
        /// Link ID
        id: String,
    },

    /// Add a portfolio link, then show the refreshed list
    #[command(alias = "create")]
    Add(PortfolioAddArgs),

    /// Edit a portfolio link, then show the refreshed list
    #[command(alias = "update")]
    Edit(PortfolioEditArgs),

    /// Delete a portfolio link (asks first unless --yes)
    #[command(alias = "rm")]
    Delete {
        /// Link ID
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct PortfolioAddArgs {
    /// Prompt for every field instead of reading flags
    #[arg(long, short = 'i', conflicts_with_all = ["title", "url"])]
    pub interactive: bool,

    /// Link title
    #[arg(long, short = 't', required_unless_present = "interactive", value_parser = non_empty)]
    pub title: Option<String>,

    /// Link URL (must be an absolute URL)
    #[arg(long, required_unless_present = "interactive", value_parser = non_empty)]
    pub url: Option<String>,

    /// Display order
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub order: i64,

    /// Category (e.g. GitHub, LinkedIn, Blog)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Icon name or URL
    #[arg(long)]
    pub icon: Option<String>,

    /// Short description
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

/// Fields left out keep their stored values.
#[derive(Debug, Args)]
pub struct PortfolioEditArgs {
    /// Link ID
    pub id: String,

    /// Prompt for every field, pre-filled with the stored values
    #[arg(
        long,
        short = 'i',
        conflicts_with_all = ["title", "url", "order", "category", "icon", "description"]
    )]
    pub interactive: bool,

    /// New title
    #[arg(long, short = 't', value_parser = non_empty)]
    pub title: Option<String>,

    /// New URL (must be an absolute URL)
    #[arg(long, value_parser = non_empty)]
    pub url: Option<String>,

    /// New display order
    #[arg(long, allow_negative_numbers = true)]
    pub order: Option<i64>,

    /// New category (empty clears it)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// New icon name or URL (empty clears it)
    #[arg(long)]
    pub icon: Option<String>,

    /// New description (empty clears it)
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

impl PortfolioEditArgs {
    /// Whether any field flag was given.
    pub fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.url.is_some()
            || self.order.is_some()
            || self.category.is_some()
            || self.icon.is_some()
            || self.description.is_some()
    }
}

// ── Snippets ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SnippetsArgs {
    #[command(subcommand)]
    pub command: SnippetsCommand,
}

#[derive(Debug, Subcommand)]
pub enum SnippetsCommand {
    /// List snippets (all, public only, or by language / tag)
    #[command(alias = "ls")]
    List {
        /// Only public snippets
        #[arg(long, conflicts_with_all = ["language", "tag"])]
        public: bool,

        /// Only snippets in this language
        #[arg(long, short = 'l', conflicts_with = "tag")]
        language: Option<String>,

        /// Only snippets with this tag
        #[arg(long, short = 't')]
        tag: Option<String>,
    },

    /// Show one snippet, including its code
    #[command(alias = "get")]
    Show {
        /// Snippet ID
        id: String,
    },

    /// Add a snippet, then show the refreshed list
    #[command(alias = "create")]
    Add(SnippetAddArgs),

    /// Edit a snippet, then show the refreshed list
    #[command(alias = "update")]
    Edit(SnippetEditArgs),

    /// Delete a snippet (asks first unless --yes)
    #[command(alias = "rm")]
    Delete {
        /// Snippet ID
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct SnippetAddArgs {
    /// Prompt for every field instead of reading flags
    #[arg(long, short = 'i', conflicts_with_all = ["title", "language", "code", "code_file"])]
    pub interactive: bool,

    /// Snippet title
    #[arg(long, required_unless_present = "interactive", value_parser = non_empty)]
    pub title: Option<String>,

    /// Language label (free-form, e.g. rust, python)
    #[arg(long, short = 'l', required_unless_present = "interactive", value_parser = non_empty)]
    pub language: Option<String>,

    /// Code, inline
    #[arg(long, conflicts_with = "code_file")]
    pub code: Option<String>,

    /// Read the code from a file
    #[arg(long, short = 'f')]
    pub code_file: Option<PathBuf>,

    /// Comma-separated tags, e.g. "react, hooks"
    #[arg(long, short = 't', default_value = "")]
    pub tags: String,

    /// Category
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Make the snippet public
    #[arg(long)]
    pub public: bool,

    /// Short description
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

/// Fields left out keep their stored values.
#[derive(Debug, Args)]
pub struct SnippetEditArgs {
    /// Snippet ID
    pub id: String,

    /// Prompt for every field, pre-filled with the stored values
    #[arg(
        long,
        short = 'i',
        conflicts_with_all = [
            "title", "language", "code", "code_file", "tags", "category",
            "public", "private", "description",
        ]
    )]
    pub interactive: bool,

    /// New title
    #[arg(long, value_parser = non_empty)]
    pub title: Option<String>,

    /// New language label
    #[arg(long, short = 'l', value_parser = non_empty)]
    pub language: Option<String>,

    /// New code, inline
    #[arg(long, conflicts_with = "code_file")]
    pub code: Option<String>,

    /// Read the new code from a file
    #[arg(long, short = 'f')]
    pub code_file: Option<PathBuf>,

    /// New comma-separated tags (empty clears them)
    #[arg(long, short = 't')]
    pub tags: Option<String>,

    /// New category (empty clears it)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Make the snippet public
    #[arg(long, conflicts_with = "private")]
    pub public: bool,

    /// Make the snippet private
    #[arg(long)]
    pub private: bool,

    /// New description (empty clears it)
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

impl SnippetEditArgs {
    /// Requested visibility, if either flag was given.
    pub fn visibility(&self) -> Option<bool> {
        match (self.public, self.private) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// Whether any field flag was given.
    pub fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.language.is_some()
            || self.code.is_some()
            || self.code_file.is_some()
            || self.tags.is_some()
            || self.category.is_some()
            || self.visibility().is_some()
            || self.description.is_some()
    }
}

// ── Console ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConsoleArgs {
    /// Which resource to manage
    #[arg(value_enum)]
    pub resource: Resource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Resource {
    /// Portfolio links
    Portfolio,
    /// Code snippets
    Snippets,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create the config file with guided setup
    Init,

    /// Display the resolved configuration
    Show,

    /// Print the config file path
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
