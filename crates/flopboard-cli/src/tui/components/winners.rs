//! Winners view: filter bar, paginated table, error banner.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use flopboard_core::MovieColumn;
use flopboard_types::Movie;

use crate::tui::app::{AppState, InputMode};

pub(crate) fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Filter bar
            Constraint::Min(0),    // Table or error banner
            Constraint::Length(1), // Pagination line
        ])
        .split(area);

    render_filter_bar(f, chunks[0], state);

    // The error banner replaces the table body only; the filter bar above
    // stays mounted so recovery never requires leaving the view.
    let view = state.winners.view();
    if let Some(message) = view.error {
        render_error(f, chunks[1], message);
    } else {
        render_table(f, chunks[1], state);
    }

    render_pagination(f, chunks[2], state);
}

fn render_filter_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let label = Style::default().add_modifier(Modifier::DIM);
    let editing = state.input_mode == InputMode::EditingYear;

    let year_style = if editing {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let year_text = if state.winners.year_input().is_empty() && !editing {
        "(any)".to_string()
    } else if editing {
        format!("{}▏", state.winners.year_input())
    } else {
        state.winners.year_input().to_string()
    };

    let line = Line::from(vec![
        Span::styled("Year: ", label),
        Span::styled(year_text, year_style),
        Span::raw("   "),
        Span::styled("Winner: ", label),
        Span::raw(if state.winners.winner() { "Yes" } else { "No" }),
        Span::raw("   "),
        Span::styled("Sort: ", label),
        Span::raw(state.sort.map_or("server", |c| c.title())),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            "Error: ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message, Style::default().fg(Color::Red)),
        Span::raw("  press "),
        Span::styled("[r]", Style::default().fg(Color::Yellow)),
        Span::raw(" to retry"),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Red)));
    f.render_widget(banner, area);
}

fn render_table(f: &mut Frame, area: Rect, state: &AppState) {
    let view = state.winners.view();

    let mut rows: Vec<&Movie> = view.rows.iter().collect();
    if let Some(column) = state.sort {
        rows.sort_by(|a, b| column.compare(a, b));
    }

    let header = Row::new(
        MovieColumn::ALL
            .iter()
            .map(|c| Cell::from(c.title()))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let body = rows.into_iter().map(|movie| {
        Row::new(
            MovieColumn::ALL
                .iter()
                .map(|c| Cell::from(c.display(movie)))
                .collect::<Vec<_>>(),
        )
    });

    let widths = [
        Constraint::Percentage(34),
        Constraint::Length(6),
        Constraint::Percentage(24),
        Constraint::Percentage(28),
        Constraint::Length(6),
    ];
    let table = Table::new(body, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("List movies"));
    f.render_widget(table, area);
}

fn render_pagination(f: &mut Frame, area: Rect, state: &AppState) {
    let pagination = state.winners.pagination();
    let line = Line::from(format!(
        "page {}/{} · {} matches · {} per page",
        pagination.current,
        pagination.page_count(),
        pagination.total,
        pagination.page_size,
    ));
    f.render_widget(
        Paragraph::new(line).style(Style::default().add_modifier(Modifier::DIM)),
        area,
    );
}
