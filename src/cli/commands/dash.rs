//! Dashboard command: launch the interactive TUI.

use anyhow::Result;
use clap::Args;

use crate::markets::MarketsClient;
use crate::tui;

#[derive(Args, Clone)]
pub struct DashArgs {}

pub struct DashCommand {
    _args: DashArgs,
}

impl DashCommand {
    pub fn new(args: DashArgs) -> Self {
        Self { _args: args }
    }

    pub async fn execute(&self) -> Result<()> {
        tui::run(MarketsClient::new()).await
    }
}
