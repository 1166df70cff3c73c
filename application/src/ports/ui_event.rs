//! UI event types emitted by SessionController for presentation layer rendering
//!
//! These events form the output port from the application layer to the
//! presentation layer. The TUI receives them and turns them into flash
//! messages; the session state itself is read directly from the controller.

use panel_domain::{Criterion, ParticipantId, Phase, Rating};

/// Events emitted by SessionController for presentation layer to render
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // === Welcome & Info ===
    /// Session loaded, nothing started yet
    Welcome(WelcomeInfo),
    /// Show the key/command reference
    Help,

    // === Setup ===
    /// Another case was selected
    CaseSelected { id: &'static str, title: &'static str },
    /// Roster size changed; names were reset to defaults
    RosterResized { size: usize },
    /// Roster size requested but nothing changed
    RosterUnchanged { size: usize },
    /// A participant got a new name
    ParticipantRenamed { id: ParticipantId, name: String },
    /// A phase duration changed
    DurationChanged { phase: Phase, minutes: u32 },

    // === Lifecycle ===
    /// Session started: order and roles drawn, reading begins
    SessionStarted { participants: usize },
    /// A new phase became active
    PhaseEntered(PhaseEnteredEvent),
    /// Advance requested where no forward transition exists
    AdvanceIgnored { phase: Phase },
    /// Pause/resume
    TimerToggled { running: bool },
    /// ±minute adjustment applied
    TimerAdjusted { remaining: u32 },
    /// Back to setup
    SessionReset,

    // === During the session ===
    /// Current speaker moved
    SpeakerChanged { index: usize, name: Option<String> },
    /// Roles were redrawn
    RolesAssigned { count: usize },
    /// One score cell was set
    Rated {
        participant: ParticipantId,
        criterion: Criterion,
        rating: Rating,
    },
    /// Notes were replaced
    NotesSaved { chars: usize },

    // === Export ===
    /// Export landed on the clipboard
    ExportCopied { bytes: usize },
    /// Export could not be placed on the clipboard
    ExportFailed { error: String },

    // === Errors & Control ===
    /// Command usage/validation error
    CommandError { message: String },
    /// Unknown command entered
    UnknownCommand { command: String },
    /// Exit message
    Exit,
}

// === Supporting Types ===

/// Information for rendering the welcome flash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeInfo {
    pub case_title: &'static str,
    pub participants: usize,
    pub seed: Option<u64>,
}

/// A phase change, by countdown expiry or by hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseEnteredEvent {
    pub from: Phase,
    pub to: Phase,
    /// Countdown loaded for the new phase (0 for untimed phases)
    pub seconds: u32,
    /// `true` when triggered by an explicit advance
    pub manual: bool,
}
