//! CLI argument definitions for cointrack.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `fetch` | Fetch prices and history for comma-separated coin IDs |
//! | `ranges` | List supported history windows |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//!
//! # Examples
//!
//! ```bash
//! cointrack fetch "bitcoin, ethereum"
//! cointrack fetch bitcoin --range 30d --chart
//! cointrack fetch bitcoin --fixture ./sample.json --format json --pretty
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use cointrack_core::DEFAULT_ENDPOINT;

/// Cointrack - cryptocurrency price tracker
///
/// Fetches current prices, market data, and price history for a set of
/// coins from a price backend and prints normalized, currency-formatted
/// results.
#[derive(Debug, Parser)]
#[command(
    name = "cointrack",
    author,
    version,
    about = "Cryptocurrency price tracker",
    long_about = "Cointrack sends a list of coin identifiers to a price backend and prints \
normalized results:\n\
\n\
  • Localized currency amounts (lakh or thousands grouping)\n\
  • Percentage change over the selected window\n\
  • Price history as chart-ready (date, price) points\n\
\n\
Use 'cointrack <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Table,
    /// Single JSON document.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch prices for one or more coins.
    ///
    /// # Examples
    ///
    ///   cointrack fetch bitcoin
    ///   cointrack fetch "bitcoin, ethereum, litecoin" --range 7d
    Fetch(FetchArgs),

    /// List supported history windows.
    Ranges,
}

/// Arguments for the `fetch` command.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Comma-separated provider coin IDs (e.g. "bitcoin, ethereum").
    pub ids: String,

    /// History window: 24h, 7d, 30d, or 1y.
    #[arg(long, default_value = "24h")]
    pub range: String,

    /// Price backend endpoint receiving the form submission.
    #[arg(long, env = "COINTRACK_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Transport timeout in milliseconds (unset waits indefinitely).
    #[arg(long, env = "COINTRACK_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,

    /// Number locale: en-in or en-us.
    #[arg(long, default_value = "en-in")]
    pub locale: String,

    /// Symbol printed before every amount.
    #[arg(long, default_value = "₹")]
    pub currency_symbol: String,

    /// Drop repeated coin IDs before sending the request.
    #[arg(long, default_value_t = false)]
    pub dedupe: bool,

    /// Serve the backend response from a JSON file instead of the network.
    #[arg(long)]
    pub fixture: Option<PathBuf>,

    /// Print every history point in table output.
    #[arg(long, default_value_t = false)]
    pub chart: bool,
}
