pub mod args;
pub mod config;
pub mod context;
pub mod handlers;
pub mod output;
pub mod tui;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use flopboard_client::HttpApi;

pub use args::{Cli, Commands, OutputFormat};
use config::Config;
use context::AppContext;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(&cli)?;
    let runtime = tokio::runtime::Runtime::new()?;
    let api = HttpApi::new(&config.api_url, Duration::from_secs(config.timeout_secs))?;
    let ctx = AppContext {
        api: Arc::new(api),
        config,
    };

    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => handlers::dashboard::handle(&ctx, &runtime),
        Commands::Winners {
            year,
            winner,
            page,
            page_size,
            format,
        } => handlers::winners::handle(&ctx, &runtime, year, winner, page, page_size, format),
        Commands::Intervals { format } => handlers::intervals::handle(&ctx, &runtime, format),
    }
}
