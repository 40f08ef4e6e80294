mod fetch;
mod ranges;

use cointrack_core::{ResultSet, TimeRange};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// What a command produced, ready for rendering.
#[derive(Debug)]
pub enum Report {
    Coins { result: ResultSet, chart: bool },
    Ranges(Vec<TimeRange>),
}

pub async fn run(cli: &Cli) -> Result<Report, CliError> {
    match &cli.command {
        Command::Fetch(args) => fetch::run(args).await,
        Command::Ranges => Ok(ranges::run()),
    }
}
