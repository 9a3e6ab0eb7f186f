//! Console rendering for the one-shot commands.

pub mod csv;

use flopboard_core::{IntervalColumn, MovieColumn, Pagination};
use flopboard_types::{Movie, ProducerInterval};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

const FALLBACK_WIDTH: usize = 120;
const MIN_CELL_WIDTH: usize = 8;

fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

fn console_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(FALLBACK_WIDTH)
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let kept: String = value.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Widths per column: max of header and cells, clamped so a row fits the
/// terminal.
fn fit_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let padding = widths.len() * 2;
    let available = console_width().saturating_sub(padding);
    let mut used: usize = widths.iter().sum();
    // Shrink the widest columns first until the row fits.
    while used > available {
        let Some((idx, _)) = widths
            .iter()
            .enumerate()
            .filter(|(_, w)| **w > MIN_CELL_WIDTH)
            .max_by_key(|(_, w)| **w)
        else {
            break;
        };
        widths[idx] -= 1;
        used -= 1;
    }
    widths
}

fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let widths = fit_widths(headers, rows);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<width$}", h, width = w))
        .collect::<Vec<_>>()
        .join("  ");
    if use_color() {
        println!("{}", header_line.bold());
    } else {
        println!("{header_line}");
    }
    println!("{}", "-".repeat(header_line.chars().count()));

    for row in rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", truncate(cell, *w), width = w))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{line}");
    }
}

pub fn print_winners(movies: &[Movie], pagination: Pagination) {
    let headers: Vec<&str> = MovieColumn::ALL.iter().map(|c| c.title()).collect();
    let rows: Vec<Vec<String>> = movies
        .iter()
        .map(|m| MovieColumn::ALL.iter().map(|c| c.display(m)).collect())
        .collect();
    print_table(&headers, &rows);

    println!();
    println!(
        "page {}/{} · {} matches",
        pagination.current,
        pagination.page_count(),
        pagination.total
    );
}

pub fn print_intervals(title: &str, entries: &[ProducerInterval]) {
    if use_color() {
        println!("{}", title.bold());
    } else {
        println!("{title}");
    }
    let headers: Vec<&str> = IntervalColumn::ALL.iter().map(|c| c.title()).collect();
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| IntervalColumn::ALL.iter().map(|c| c.display(e)).collect())
        .collect();
    print_table(&headers, &rows);
}
