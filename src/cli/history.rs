//! CLI command for browsing the run history

use clap::Args;

use crate::config::NorthwindPaths;
use crate::error::NorthwindResult;
use crate::history::RunHistory;

/// Arguments of `northwind history`
#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    /// Number of runs to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Handle `northwind history`
pub fn handle_history_command(paths: &NorthwindPaths, args: HistoryArgs) -> NorthwindResult<()> {
    let history = RunHistory::new(paths.history_log());
    let entries = history.read_recent(args.limit)?;

    if entries.is_empty() {
        println!("No report runs recorded yet.");
        return Ok(());
    }

    for entry in entries.iter().rev() {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
