//! TUI widgets: ratatui components for the main layout
//!
//! Layout:
//! ┌── Header (3) ──────────────────────────────────────────┐
//! ├── Timer (6) ──────────────┬── Case (40%) ──────────────┤
//! ├── Setup / Order (flex) ───┼── Scoring (flex) ──────────┤
//! ├── Roles (35%) ────────────┼── Notes (8) ───────────────┤
//! └── StatusBar (1) ──────────────────────────────────────┘

pub mod case;
pub mod header;
pub mod help;
pub mod notes;
pub mod order;
pub mod reference;
pub mod roles;
pub mod scoring;
pub mod setup;
pub mod status_bar;
pub mod timer;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub timer: Rect,
    /// Setup form before the session starts, speaking order afterwards
    pub panel: Rect,
    pub roles: Rect,
    pub case: Rect,
    pub scoring: Rect,
    pub notes: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(vertical[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Fill(1),
                Constraint::Percentage(35),
            ])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Fill(1),
                Constraint::Length(8),
            ])
            .split(columns[1]);

        Self {
            header: vertical[0],
            timer: left[0],
            panel: left[1],
            roles: left[2],
            case: right[0],
            scoring: right[1],
            notes: right[2],
            status_bar: vertical[2],
        }
    }

    /// Centered overlay rectangle for help and reference dialogs
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}

/// Buffer contents with blank cells dropped, so wide glyphs compare as text.
#[cfg(test)]
pub(crate) fn rendered_text(buf: &ratatui::buffer::Buffer) -> String {
    buf.content()
        .iter()
        .map(|c| c.symbol())
        .filter(|s| *s != " ")
        .collect()
}

#[cfg(test)]
pub(crate) fn compact(text: &str) -> String {
    text.chars().filter(|c| *c != ' ').collect()
}
