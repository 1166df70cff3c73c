//! TUI (Text User Interface) module for panel-sim
//!
//! A single-screen facilitator console built on ratatui: setup form,
//! countdown, speaking order, roles, case, scoring grid and notes.

mod app;
mod mode;
mod presenter;
mod state;
mod ticker;
mod widgets;

pub use app::TuiApp;
pub use mode::{Action, KeyHandler, Mode};
pub use presenter::TuiPresenter;
pub use state::TuiState;
pub use ticker::PhaseTicker;
