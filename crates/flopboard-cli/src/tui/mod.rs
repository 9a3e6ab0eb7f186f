//! Interactive dashboard: app state, event plumbing, and rendering.

pub mod app;
pub mod event;
pub mod fetch;

pub(crate) mod components;
pub(crate) mod ui;

pub use app::{AppState, InputMode, View};
pub use event::TuiEvent;
pub use fetch::FetchJob;
