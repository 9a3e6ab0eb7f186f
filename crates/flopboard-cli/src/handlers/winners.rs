//! One-shot winners listing.

use anyhow::{Context, Result, bail};
use flopboard_core::{FETCH_ERROR_TEXT, Pagination, year_filter_complete};
use flopboard_types::WinnersQuery;
use tokio::runtime::Runtime;

use crate::args::OutputFormat;
use crate::context::AppContext;
use crate::output;

pub fn handle(
    ctx: &AppContext,
    runtime: &Runtime,
    year: Option<String>,
    winner: bool,
    page: u64,
    page_size: u64,
    format: OutputFormat,
) -> Result<()> {
    let year = year.unwrap_or_default();
    if !year_filter_complete(&year) {
        bail!("year filter must be empty or exactly four digits, got {year:?}");
    }
    if page == 0 || page_size == 0 {
        bail!("page and page-size must be at least 1");
    }

    let query = WinnersQuery {
        page,
        page_size,
        year,
        winner,
    };
    let result = runtime
        .block_on(ctx.api.winners_by_year(&query))
        .context(FETCH_ERROR_TEXT)?;

    match format {
        OutputFormat::Plain => {
            let pagination = Pagination {
                current: page,
                page_size,
                total: result.total_elements,
            };
            output::print_winners(&result.content, pagination);
        }
        OutputFormat::Csv => {
            output::csv::write_winners(std::io::stdout().lock(), &result.content)?;
        }
    }
    Ok(())
}
