//! Dashboard application state and key handling.
//!
//! `AppState` wraps the two pure controllers and adds UI-local concerns:
//! which view is active, whether the year field is being edited, the
//! client-side sort column, and which ranked table holds focus. Every
//! mutation goes through controller events; the returned jobs are the
//! fetches the caller must spawn.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use flopboard_core::{
    IntervalBoard, IntervalEvent, MovieColumn, Ranking, WinnersEvent, WinnersList,
};

use super::event::TuiEvent;
use super::fetch::FetchJob;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Winners,
    Intervals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Keystrokes edit the year filter until Esc/Enter.
    EditingYear,
}

pub struct AppState {
    pub winners: WinnersList,
    pub intervals: IntervalBoard,
    pub view: View,
    pub input_mode: InputMode,
    /// Client-side sort of the displayed page; `None` keeps server order.
    pub sort: Option<MovieColumn>,
    pub focused_ranking: Ranking,
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            winners: WinnersList::new(),
            intervals: IntervalBoard::new(),
            view: View::Winners,
            input_mode: InputMode::Normal,
            sort: None,
            focused_ranking: Ranking::Min,
            should_quit: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial fetches for both lists.
    pub fn on_mount(&mut self) -> Vec<FetchJob> {
        let mut jobs = Vec::new();
        if let Some(effect) = self.winners.apply(WinnersEvent::Mounted) {
            jobs.push(effect.into());
        }
        if let Some(effect) = self.intervals.apply(IntervalEvent::Mounted) {
            jobs.push(effect.into());
        }
        jobs
    }

    pub fn on_event(&mut self, event: TuiEvent) -> Vec<FetchJob> {
        match event {
            TuiEvent::Input(key) => self.on_key(key),
            TuiEvent::Tick => Vec::new(),
            TuiEvent::WinnersSettled { seq, outcome } => {
                self.winners
                    .apply(WinnersEvent::FetchSettled { seq, outcome });
                Vec::new()
            }
            TuiEvent::IntervalsSettled { seq, outcome } => {
                self.intervals
                    .apply(IntervalEvent::FetchSettled { seq, outcome });
                Vec::new()
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Vec<FetchJob> {
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }
        match self.input_mode {
            InputMode::EditingYear => self.on_year_key(key),
            InputMode::Normal => self.on_normal_key(key),
        }
    }

    fn on_year_key(&mut self, key: KeyEvent) -> Vec<FetchJob> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                Vec::new()
            }
            KeyCode::Backspace => {
                let mut value = self.winners.year_input().to_string();
                value.pop();
                self.edit_year(value)
            }
            KeyCode::Char(c) => {
                let mut value = self.winners.year_input().to_string();
                value.push(c);
                self.edit_year(value)
            }
            _ => Vec::new(),
        }
    }

    fn edit_year(&mut self, value: String) -> Vec<FetchJob> {
        // Backspace on an empty field would otherwise re-dispatch "" and
        // reset the page cursor without the filter actually changing.
        if value == self.winners.year_input() {
            return Vec::new();
        }
        self.winners
            .apply(WinnersEvent::YearEdited(value))
            .map(|effect| vec![effect.into()])
            .unwrap_or_default()
    }

    fn on_normal_key(&mut self, key: KeyEvent) -> Vec<FetchJob> {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                Vec::new()
            }
            KeyCode::Tab => {
                self.view = match self.view {
                    View::Winners => View::Intervals,
                    View::Intervals => View::Winners,
                };
                Vec::new()
            }
            _ => match self.view {
                View::Winners => self.on_winners_key(key),
                View::Intervals => self.on_intervals_key(key),
            },
        }
    }

    fn on_winners_key(&mut self, key: KeyEvent) -> Vec<FetchJob> {
        match key.code {
            KeyCode::Char('y') => {
                self.input_mode = InputMode::EditingYear;
                Vec::new()
            }
            KeyCode::Char('w') => {
                let toggled = !self.winners.winner();
                self.winners
                    .apply(WinnersEvent::WinnerSelected(toggled))
                    .map(|effect| vec![effect.into()])
                    .unwrap_or_default()
            }
            KeyCode::Char('s') => {
                self.sort = match self.sort {
                    None => Some(MovieColumn::Title),
                    Some(MovieColumn::Winner) => None,
                    Some(column) => Some(column.next()),
                };
                Vec::new()
            }
            KeyCode::Char('r') => self
                .winners
                .apply(WinnersEvent::Retry)
                .map(|effect| vec![effect.into()])
                .unwrap_or_default(),
            KeyCode::Left | KeyCode::Right => self.turn_page(key.code),
            _ => Vec::new(),
        }
    }

    fn turn_page(&mut self, code: KeyCode) -> Vec<FetchJob> {
        let pagination = self.winners.pagination();
        let target = match code {
            KeyCode::Left => pagination.current.saturating_sub(1).max(1),
            _ => (pagination.current + 1).min(pagination.page_count()),
        };
        if target == pagination.current {
            return Vec::new();
        }
        self.winners
            .apply(WinnersEvent::PageChanged {
                current: target,
                page_size: pagination.page_size,
            })
            .map(|effect| vec![effect.into()])
            .unwrap_or_default()
    }

    fn on_intervals_key(&mut self, key: KeyEvent) -> Vec<FetchJob> {
        match key.code {
            KeyCode::Up | KeyCode::Down => {
                self.focused_ranking = match self.focused_ranking {
                    Ranking::Min => Ranking::Max,
                    Ranking::Max => Ranking::Min,
                };
                Vec::new()
            }
            KeyCode::Char('r') => self
                .intervals
                .apply(IntervalEvent::Refresh(self.focused_ranking))
                .map(|effect| vec![effect.into()])
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use flopboard_testing::fixtures;

    fn press(code: KeyCode) -> TuiEvent {
        TuiEvent::Input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn settle_winners(app: &mut AppState, job: &FetchJob) {
        let FetchJob::Winners { seq, .. } = job else {
            panic!("expected a winners job");
        };
        app.on_event(TuiEvent::WinnersSettled {
            seq: *seq,
            outcome: Ok(fixtures::winners_page(30)),
        });
    }

    #[test]
    fn test_mount_requests_both_lists() {
        let mut app = AppState::new();
        let jobs = app.on_mount();
        assert_eq!(jobs.len(), 2);
        assert!(matches!(jobs[0], FetchJob::Winners { .. }));
        assert!(matches!(jobs[1], FetchJob::Intervals { .. }));
    }

    #[test]
    fn test_year_editing_gates_fetches() {
        let mut app = AppState::new();
        app.on_mount();
        app.on_event(press(KeyCode::Char('y')));
        assert_eq!(app.input_mode, InputMode::EditingYear);

        assert!(app.on_event(press(KeyCode::Char('1'))).is_empty());
        assert!(app.on_event(press(KeyCode::Char('9'))).is_empty());
        assert!(app.on_event(press(KeyCode::Char('9'))).is_empty());
        let jobs = app.on_event(press(KeyCode::Char('0')));
        assert_eq!(jobs.len(), 1);
        let FetchJob::Winners { query, .. } = &jobs[0] else {
            panic!("expected a winners job");
        };
        assert_eq!(query.year, "1990");

        app.on_event(press(KeyCode::Esc));
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_backspace_on_empty_year_changes_nothing() {
        let mut app = AppState::new();
        let jobs = app.on_mount();
        settle_winners(&mut app, &jobs[0]);
        let before = app.winners.pagination();

        app.on_event(press(KeyCode::Char('y')));
        assert!(app.on_event(press(KeyCode::Backspace)).is_empty());
        assert_eq!(app.winners.pagination(), before);
    }

    #[test]
    fn test_winner_toggle_fetches_with_reset_cursor() {
        let mut app = AppState::new();
        app.on_mount();
        let jobs = app.on_event(press(KeyCode::Char('w')));
        let FetchJob::Winners { query, .. } = &jobs[0] else {
            panic!("expected a winners job");
        };
        assert!(!query.winner);
        assert_eq!((query.page, query.page_size), (1, 5));
    }

    #[test]
    fn test_page_turn_clamps_at_bounds() {
        let mut app = AppState::new();
        let jobs = app.on_mount();
        settle_winners(&mut app, &jobs[0]);

        // Page 1 of 3; Left is a no-op.
        assert!(app.on_event(press(KeyCode::Left)).is_empty());

        let jobs = app.on_event(press(KeyCode::Right));
        let FetchJob::Winners { query, .. } = &jobs[0] else {
            panic!("expected a winners job");
        };
        assert_eq!(query.page, 2);
    }

    #[test]
    fn test_tab_switches_views() {
        let mut app = AppState::new();
        app.on_event(press(KeyCode::Tab));
        assert_eq!(app.view, View::Intervals);
        app.on_event(press(KeyCode::Tab));
        assert_eq!(app.view, View::Winners);
    }

    #[test]
    fn test_sort_cycle_returns_to_server_order() {
        let mut app = AppState::new();
        for _ in 0..MovieColumn::ALL.len() {
            app.on_event(press(KeyCode::Char('s')));
        }
        assert_eq!(app.sort, Some(MovieColumn::Winner));
        app.on_event(press(KeyCode::Char('s')));
        assert_eq!(app.sort, None);
    }

    #[test]
    fn test_intervals_refresh_targets_focused_ranking() {
        let mut app = AppState::new();
        app.on_mount();
        app.on_event(press(KeyCode::Tab));
        app.on_event(press(KeyCode::Down));
        assert_eq!(app.focused_ranking, Ranking::Max);
        let jobs = app.on_event(press(KeyCode::Char('r')));
        assert!(matches!(jobs[0], FetchJob::Intervals { .. }));
    }

    #[test]
    fn test_quit_flag() {
        let mut app = AppState::new();
        app.on_event(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
