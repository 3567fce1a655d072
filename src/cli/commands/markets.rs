//! One-shot markets command: fetch, optionally filter and sort, print.

use anyhow::Result;
use clap::{Args, ValueEnum};
use owo_colors::OwoColorize;

use crate::markets::{display, transforms, MarketsClient, SortKey};

#[derive(Debug, Clone, ValueEnum)]
pub enum SortArg {
    /// Descending market capitalization
    MarketCap,
    /// Descending 24h percentage change
    Change,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::MarketCap => SortKey::MarketCap,
            SortArg::Change => SortKey::Change24h,
        }
    }
}

#[derive(Args)]
pub struct MarketsArgs {
    /// Filter term matched case-insensitively against coin names (optional)
    pub query: Option<String>,

    /// Sort the displayed rows
    #[arg(long, short = 's', value_enum)]
    pub sort: Option<SortArg>,

    /// Maximum number of rows to display
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

pub struct MarketsCommand {
    args: MarketsArgs,
}

impl MarketsCommand {
    pub fn new(args: MarketsArgs) -> Self {
        Self { args }
    }

    pub async fn execute(&self) -> Result<()> {
        let client = MarketsClient::new();

        println!("{}", "Fetching market data...".bright_blue());
        let entries = client.fetch_markets().await?;

        let term = self.args.query.as_deref().unwrap_or("");
        let sort = self.args.sort.clone().map(SortKey::from);

        let mut visible = transforms::apply(&entries, term, sort);
        if let Some(limit) = self.args.limit {
            visible.truncate(limit);
        }

        if !term.is_empty() && visible.is_empty() {
            println!(
                "{}",
                format!("No coins matching '{}'.", term).yellow()
            );
            return Ok(());
        }

        display::display_markets(&visible, sort);
        Ok(())
    }
}
