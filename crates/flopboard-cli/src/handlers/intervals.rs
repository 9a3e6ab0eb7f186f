//! One-shot min/max interval rankings.

use anyhow::{Result, anyhow};
use flopboard_core::FETCH_ERROR_TEXT;
use tokio::runtime::Runtime;

use crate::args::OutputFormat;
use crate::context::AppContext;
use crate::output;

pub fn handle(ctx: &AppContext, runtime: &Runtime, format: OutputFormat) -> Result<()> {
    let buckets = match runtime.block_on(ctx.api.producer_intervals()) {
        Ok(buckets) => buckets,
        Err(err) => {
            // Log the underlying cause, surface only the fixed message.
            eprintln!("intervals fetch failed: {err}");
            return Err(anyhow!(FETCH_ERROR_TEXT));
        }
    };

    match format {
        OutputFormat::Plain => {
            output::print_intervals("Minimum", &buckets.min);
            println!();
            output::print_intervals("Maximum", &buckets.max);
        }
        OutputFormat::Csv => {
            output::csv::write_intervals(std::io::stdout().lock(), &buckets.min, &buckets.max)?;
        }
    }
    Ok(())
}
