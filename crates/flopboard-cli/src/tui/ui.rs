use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app::{AppState, InputMode, View};
use super::components;

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Active view
            Constraint::Length(1), // Footer (Help)
        ])
        .split(f.area());

    render_tabs(f, chunks[0], state);

    match state.view {
        View::Winners => components::winners::render(f, chunks[1], state),
        View::Intervals => components::intervals::render(f, chunks[1], state),
    }

    render_footer(f, chunks[2], state);
}

fn render_tabs(f: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
    let active = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().add_modifier(Modifier::DIM);

    let loading = match state.view {
        View::Winners => state.winners.view().loading,
        View::Intervals => state.intervals.loading(),
    };

    let mut spans = vec![
        Span::styled(
            " Winners ",
            if state.view == View::Winners { active } else { inactive },
        ),
        Span::raw("│"),
        Span::styled(
            " Intervals ",
            if state.view == View::Intervals { active } else { inactive },
        ),
    ];
    if loading {
        spans.push(Span::styled(
            "  fetching…",
            Style::default().fg(Color::Yellow),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
    let key = Style::default().fg(Color::Yellow);

    let footer_line = match (state.view, state.input_mode) {
        (_, InputMode::EditingYear) => Line::from(vec![
            Span::raw("typing year filter "),
            Span::styled("[Esc/Enter]", key),
            Span::raw("done "),
            Span::styled("[Backspace]", key),
            Span::raw("erase"),
        ]),
        (View::Winners, _) => Line::from(vec![
            Span::styled("[q]", key),
            Span::raw("uit "),
            Span::styled("[Tab]", key),
            Span::raw("view "),
            Span::styled("[y]", key),
            Span::raw("ear "),
            Span::styled("[w]", key),
            Span::raw("inner "),
            Span::styled("[←/→]", key),
            Span::raw("page "),
            Span::styled("[s]", key),
            Span::raw("ort "),
            Span::styled("[r]", key),
            Span::raw("etry"),
        ]),
        (View::Intervals, _) => Line::from(vec![
            Span::styled("[q]", key),
            Span::raw("uit "),
            Span::styled("[Tab]", key),
            Span::raw("view "),
            Span::styled("[↑/↓]", key),
            Span::raw("table "),
            Span::styled("[r]", key),
            Span::raw("efresh"),
        ]),
    };

    f.render_widget(Paragraph::new(footer_line), area);
}
