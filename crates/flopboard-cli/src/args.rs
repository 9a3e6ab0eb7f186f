use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flopboard")]
#[command(about = "Terminal dashboard for award-winner statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the awards API (overrides env and config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Path to an alternate config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive dashboard (the default when no command is given)
    Dashboard,

    /// Print one page of the winners list and exit
    Winners {
        /// Year filter: empty or exactly four digits
        #[arg(long)]
        year: Option<String>,

        /// Winner filter
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        winner: bool,

        /// 1-based page to fetch
        #[arg(long, default_value = "1")]
        page: u64,

        #[arg(long, default_value = "10")]
        page_size: u64,

        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },

    /// Print the min/max producer win-interval rankings and exit
    Intervals {
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Csv,
}
