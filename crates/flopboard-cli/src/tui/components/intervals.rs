//! Intervals view: the two ranked tables stacked, focused one highlighted.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use flopboard_core::{IntervalColumn, Ranking};

use crate::tui::app::AppState;

pub(crate) fn render(f: &mut Frame, area: Rect, state: &AppState) {
    if let Some(message) = state.intervals.error() {
        render_error(f, area, message);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_ranking(f, chunks[0], state, Ranking::Min, "Minimum");
    render_ranking(f, chunks[1], state, Ranking::Max, "Maximum");
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
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(banner, area);
}

fn render_ranking(f: &mut Frame, area: Rect, state: &AppState, ranking: Ranking, title: &str) {
    let focused = state.focused_ranking == ranking;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let header = Row::new(
        IntervalColumn::ALL
            .iter()
            .map(|c| Cell::from(c.title()))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let body = state.intervals.ranking(ranking).iter().map(|entry| {
        Row::new(
            IntervalColumn::ALL
                .iter()
                .map(|c| Cell::from(c.display(entry)))
                .collect::<Vec<_>>(),
        )
    });

    let widths = [
        Constraint::Percentage(46),
        Constraint::Length(8),
        Constraint::Length(12),
        Constraint::Length(13),
    ];
    let table = Table::new(body, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );
    f.render_widget(table, area);
}
