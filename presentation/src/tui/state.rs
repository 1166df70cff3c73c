//! TUI application state
//!
//! Everything the TUI renders that is not session state: mode, edit
//! buffers, selections, overlays and the flash message. Session state is
//! read straight from the controller at draw time.

use super::mode::Mode;
use panel_domain::{Criterion, ParticipantId, Phase, Session};
use std::time::{Duration, Instant};

/// A selectable row of the setup panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupRow {
    Case,
    Roster,
    Duration(Phase),
    Participant(ParticipantId),
}

/// Rows of the setup panel, top to bottom
pub fn setup_rows(session: &Session) -> Vec<SetupRow> {
    let mut rows = vec![SetupRow::Case, SetupRow::Roster];
    rows.extend(Phase::TIMED.iter().copied().map(SetupRow::Duration));
    rows.extend(session.roster().iter().map(|p| SetupRow::Participant(p.id)));
    rows
}

/// Central TUI state, owned by the TuiApp select! loop
#[derive(Default)]
pub struct TuiState {
    // -- Mode --
    pub mode: Mode,

    // -- Command buffer (for : mode) --
    pub command_input: String,
    pub command_cursor: usize,

    // -- Notes pad (Insert mode) --
    pub notes_input: String,
    pub notes_cursor: usize,

    // -- Selection --
    pub setup_row: usize,
    pub score_row: usize,
    pub score_col: usize,

    // -- Overlays --
    pub show_help: bool,
    pub show_reference: bool,
    pub flash_message: Option<(String, Instant)>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Input editing --

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.active_cursor();
        self.active_input_mut().insert(cursor, c);
        *self.active_cursor_mut() += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        let cursor = self.active_cursor();
        if cursor > 0 {
            let input = self.active_input_mut();
            let prev_char_len = input[..cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            input.remove(cursor - prev_char_len);
            *self.active_cursor_mut() -= prev_char_len;
        }
    }

    pub fn cursor_left(&mut self) {
        let cursor = self.active_cursor();
        let prev_char_len = self.active_input()[..cursor]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        *self.active_cursor_mut() -= prev_char_len;
    }

    pub fn cursor_right(&mut self) {
        let cursor = self.active_cursor();
        let next_char_len = self.active_input()[cursor..]
            .chars()
            .next()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        *self.active_cursor_mut() += next_char_len;
    }

    pub fn cursor_home(&mut self) {
        *self.active_cursor_mut() = 0;
    }

    pub fn cursor_end(&mut self) {
        let len = self.active_input().len();
        *self.active_cursor_mut() = len;
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Take the command buffer contents and clear it
    pub fn take_command(&mut self) -> String {
        self.command_cursor = 0;
        std::mem::take(&mut self.command_input)
    }

    /// Open the command line with `text` already typed
    pub fn prefill_command(&mut self, text: impl Into<String>) {
        self.command_input = text.into();
        self.command_cursor = self.command_input.len();
        self.mode = Mode::Command;
    }

    /// Load the saved notes into the pad and start editing
    pub fn begin_notes(&mut self, notes: &str) {
        self.notes_input = notes.to_string();
        self.notes_cursor = self.notes_input.len();
        self.mode = Mode::Insert;
    }

    fn active_input(&self) -> &str {
        match self.mode {
            Mode::Command => &self.command_input,
            _ => &self.notes_input,
        }
    }

    fn active_input_mut(&mut self) -> &mut String {
        match self.mode {
            Mode::Command => &mut self.command_input,
            _ => &mut self.notes_input,
        }
    }

    fn active_cursor(&self) -> usize {
        match self.mode {
            Mode::Command => self.command_cursor,
            _ => self.notes_cursor,
        }
    }

    fn active_cursor_mut(&mut self) -> &mut usize {
        match self.mode {
            Mode::Command => &mut self.command_cursor,
            _ => &mut self.notes_cursor,
        }
    }

    // -- Selection --

    /// Keep selections inside the current roster and row count
    pub fn clamp_selection(&mut self, session: &Session) {
        let rows = setup_rows(session).len();
        self.setup_row = self.setup_row.min(rows.saturating_sub(1));
        self.score_row = self.score_row.min(session.roster().len().saturating_sub(1));
        self.score_col = self.score_col.min(Criterion::ALL.len() - 1);
    }

    pub fn selected_setup_row(&self, session: &Session) -> Option<SetupRow> {
        setup_rows(session).get(self.setup_row).copied()
    }

    pub fn selected_participant(&self, session: &Session) -> Option<ParticipantId> {
        session.roster().as_slice().get(self.score_row).map(|p| p.id)
    }

    pub fn selected_criterion(&self) -> Criterion {
        Criterion::ALL[self.score_col % Criterion::ALL.len()]
    }

    pub fn move_selection(&mut self, session: &Session, delta: isize) {
        if session.phase() == Phase::Setup {
            self.setup_row = self.setup_row.saturating_add_signed(delta);
        } else {
            self.score_row = self.score_row.saturating_add_signed(delta);
        }
        self.clamp_selection(session);
    }

    pub fn next_criterion(&mut self) {
        self.score_col = (self.score_col + 1) % Criterion::ALL.len();
    }

    pub fn previous_criterion(&mut self) {
        self.score_col = (self.score_col + Criterion::ALL.len() - 1) % Criterion::ALL.len();
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }

    /// Close any open overlay. Returns whether one was open.
    pub fn close_overlays(&mut self) -> bool {
        let was_open = self.show_help || self.show_reference;
        self.show_help = false;
        self.show_reference = false;
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_domain::{Case, PhaseDurations};

    fn session(size: usize) -> Session {
        Session::new(Case::default_case(), size, PhaseDurations::default())
    }

    #[test]
    fn test_utf8_editing() {
        let mut state = TuiState::new();
        state.begin_notes("");
        state.insert_char('数');
        state.insert_char('据');
        state.insert_char('!');
        assert_eq!(state.notes_input, "数据!");

        state.cursor_left();
        state.delete_char();
        assert_eq!(state.notes_input, "数!");

        state.cursor_home();
        state.delete_char();
        assert_eq!(state.notes_input, "数!");

        state.cursor_end();
        state.insert_newline();
        assert_eq!(state.notes_input, "数!\n");
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut state = TuiState::new();
        state.begin_notes("ab");
        state.cursor_right();
        assert_eq!(state.notes_cursor, 2);
        state.cursor_home();
        state.cursor_left();
        assert_eq!(state.notes_cursor, 0);
    }

    #[test]
    fn test_command_buffer_is_separate_from_notes() {
        let mut state = TuiState::new();
        state.begin_notes("keep");
        state.prefill_command("name 2 ");
        state.insert_char('A');
        assert_eq!(state.take_command(), "name 2 A");
        assert_eq!(state.notes_input, "keep");
        assert_eq!(state.command_cursor, 0);
    }

    #[test]
    fn test_setup_rows() {
        let session = session(3);
        let rows = setup_rows(&session);
        assert_eq!(rows.len(), 2 + 4 + 3);
        assert_eq!(rows[0], SetupRow::Case);
        assert_eq!(rows[2], SetupRow::Duration(Phase::Reading));
        assert_eq!(rows[6], SetupRow::Participant(ParticipantId::new(1)));
    }

    #[test]
    fn test_selection_clamps_to_roster() {
        let mut state = TuiState::new();
        state.setup_row = 100;
        state.score_row = 100;
        let session = session(4);
        state.clamp_selection(&session);
        assert_eq!(state.setup_row, 2 + 4 + 4 - 1);
        assert_eq!(state.score_row, 3);
        assert_eq!(state.selected_participant(&session), Some(ParticipantId::new(4)));
    }

    #[test]
    fn test_move_selection_uses_setup_rows_before_start() {
        let mut state = TuiState::new();
        let session = session(3);
        state.move_selection(&session, 1);
        assert_eq!(state.setup_row, 1);
        assert_eq!(state.selected_setup_row(&session), Some(SetupRow::Roster));
        state.move_selection(&session, -5);
        assert_eq!(state.setup_row, 0);
        assert_eq!(state.score_row, 0);
    }

    #[test]
    fn test_criterion_wraps() {
        let mut state = TuiState::new();
        state.previous_criterion();
        assert_eq!(state.selected_criterion(), Criterion::Business);
        state.next_criterion();
        assert_eq!(state.selected_criterion(), Criterion::Logic);
    }

    #[test]
    fn test_flash_expiry() {
        let mut state = TuiState::new();
        state.set_flash("hello");
        state.expire_flash(Duration::from_secs(60));
        assert!(state.flash_message.is_some());
        state.expire_flash(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(5));
        state.expire_flash(Duration::ZERO);
        assert!(state.flash_message.is_none());
    }
}
