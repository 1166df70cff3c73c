//! TUI mode system (vim-like mode switching)
//!
//! Defines the mode-based interaction model:
//! - Normal mode: session controls and navigation
//! - Insert mode: editing the notes pad
//! - Command mode: `:` command line
//! - Confirm mode: yes/no before a reset

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application mode (vim-like)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal mode - session controls and navigation
    #[default]
    Normal,
    /// Insert mode - notes editing
    Insert,
    /// Command mode - execute commands (like `:` in vim)
    Command,
    /// Confirm mode - yes/no prompts
    Confirm,
}

impl Mode {
    /// Get the mode indicator string for status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "NOTES",
            Self::Command => "COMMAND",
            Self::Confirm => "CONFIRM",
        }
    }

    /// Get the mode color for status line
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Normal => Color::Blue,
            Self::Insert => Color::Green,
            Self::Command => Color::Yellow,
            Self::Confirm => Color::Magenta,
        }
    }
}

/// User action derived from key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // -- Mode switches --
    /// Start editing notes
    EnterInsert,
    /// Enter command mode
    EnterCommand,
    /// Leave notes editing (saves the pad)
    ExitToNormal,
    /// Submit the command line
    Submit,
    /// Cancel current operation (Esc)
    Cancel,
    Quit,

    // -- Text editing --
    InsertChar(char),
    InsertNewline,
    DeleteChar,
    CursorLeft,
    CursorRight,
    CursorStart,
    CursorEnd,

    // -- Session controls --
    Start,
    ToggleTimer,
    Advance,
    /// Ask for confirmation, then reset
    RequestReset,
    /// `+`: next value on the selected setup row, or +1 minute once started
    Increment,
    /// `-`: previous value on the selected setup row, or -1 minute once started
    Decrement,
    PreviousSpeaker,
    NextSpeaker,
    CycleCase,
    AssignRoles,
    Export,

    // -- Selection --
    SelectUp,
    SelectDown,
    NextCriterion,
    PreviousCriterion,
    /// Rate the selected cell 1-5
    Rate(u8),
    /// Enter on the selected setup row
    Activate,

    // -- Overlays --
    ShowHelp,
    ToggleReference,

    // -- Confirm --
    ConfirmYes,
    ConfirmNo,

    None,
}

/// Key event handler - maps key events to actions based on current mode
pub struct KeyHandler;

impl KeyHandler {
    /// Handle key event in the given mode
    pub fn handle(mode: Mode, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        match mode {
            Mode::Normal => Self::handle_normal(key),
            Mode::Insert => Self::handle_insert(key),
            Mode::Command => Self::handle_command(key),
            Mode::Confirm => Self::handle_confirm(key),
        }
    }

    fn handle_normal(key: KeyEvent) -> Action {
        // Shifted symbols arrive with SHIFT on some terminals
        let modifiers = key.modifiers - KeyModifiers::SHIFT;
        if !modifiers.is_empty() {
            return Action::None;
        }

        match key.code {
            // Mode switches
            KeyCode::Char('i') => Action::EnterInsert,
            KeyCode::Char(':') => Action::EnterCommand,
            KeyCode::Char('q') => Action::Quit,

            // Lifecycle
            KeyCode::Char('s') => Action::Start,
            KeyCode::Char(' ') | KeyCode::Char('p') => Action::ToggleTimer,
            KeyCode::Char('n') => Action::Advance,
            KeyCode::Char('R') => Action::RequestReset,
            KeyCode::Char('+') | KeyCode::Char('=') => Action::Increment,
            KeyCode::Char('-') => Action::Decrement,

            // Speaking order
            KeyCode::Char('h') | KeyCode::Left => Action::PreviousSpeaker,
            KeyCode::Char('l') | KeyCode::Right => Action::NextSpeaker,

            // Selection
            KeyCode::Char('k') | KeyCode::Up => Action::SelectUp,
            KeyCode::Char('j') | KeyCode::Down => Action::SelectDown,
            KeyCode::Tab => Action::NextCriterion,
            KeyCode::BackTab => Action::PreviousCriterion,
            KeyCode::Char(c @ '1'..='5') => Action::Rate(c as u8 - b'0'),
            KeyCode::Enter => Action::Activate,

            // Session content
            KeyCode::Char('c') => Action::CycleCase,
            KeyCode::Char('r') => Action::AssignRoles,
            KeyCode::Char('e') => Action::Export,

            // Overlays
            KeyCode::Char('?') => Action::ShowHelp,
            KeyCode::Char('g') => Action::ToggleReference,
            KeyCode::Esc => Action::Cancel,

            _ => Action::None,
        }
    }

    fn handle_insert(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::ExitToNormal,
            KeyCode::Enter => Action::InsertNewline,
            KeyCode::Char(c) => Action::InsertChar(c),
            KeyCode::Backspace => Action::DeleteChar,
            KeyCode::Left => Action::CursorLeft,
            KeyCode::Right => Action::CursorRight,
            KeyCode::Home => Action::CursorStart,
            KeyCode::End => Action::CursorEnd,
            _ => Action::None,
        }
    }

    fn handle_command(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::Cancel,
            KeyCode::Enter => Action::Submit,
            KeyCode::Char(c) => Action::InsertChar(c),
            KeyCode::Backspace => Action::DeleteChar,
            KeyCode::Left => Action::CursorLeft,
            KeyCode::Right => Action::CursorRight,
            KeyCode::Home => Action::CursorStart,
            KeyCode::End => Action::CursorEnd,
            _ => Action::None,
        }
    }

    fn handle_confirm(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Action::ConfirmYes,
            KeyCode::Char('n') | KeyCode::Char('N') => Action::ConfirmNo,
            KeyCode::Esc => Action::Cancel,
            // A reset is destructive, so Enter does not confirm
            _ => Action::None,
        }
    }
}
