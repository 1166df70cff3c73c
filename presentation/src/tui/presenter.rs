//! TUI Presenter - Converts Application Events to TUI State
//!
//! Adapter between the application layer (which emits UiEvents) and the
//! TUI view state. Session data is read from the controller at draw time,
//! so most events only produce a flash message.
//!
//! ```text
//! SessionController ──UiEvent──> TuiPresenter ──> TuiState ──> widgets
//! ```

use super::mode::Mode;
use super::state::TuiState;
use panel_application::{PhaseEnteredEvent, UiEvent, WelcomeInfo};
use panel_domain::{Phase, format_clock};

/// Shown when the session reaches the debrief
pub const DEBRIEF_BANNER: &str = "✅ 已进入复盘：请根据评分与KPI达成度总结3点可改进项。";

/// Shown after a successful export
pub const EXPORT_COPIED: &str = "已复制汇总到剪贴板！";

/// Applies UiEvents to the TUI state
#[derive(Debug, Default)]
pub struct TuiPresenter;

impl TuiPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, state: &mut TuiState, event: &UiEvent) {
        match event {
            UiEvent::Welcome(info) => state.set_flash(Self::welcome_text(info)),
            UiEvent::Help => state.show_help = true,

            UiEvent::CaseSelected { title, .. } => state.set_flash(format!("Case: {}", title)),
            UiEvent::RosterResized { size } => {
                state.set_flash(format!("{} participants (names reset)", size))
            }
            UiEvent::RosterUnchanged { size } => {
                state.set_flash(format!("Roster stays at {} participants", size))
            }
            UiEvent::ParticipantRenamed { id, name } => {
                state.set_flash(format!("#{} is now {}", id, name))
            }
            UiEvent::DurationChanged { phase, minutes } => state.set_flash(format!(
                "{}: {} min",
                phase.display_name(),
                minutes
            )),

            UiEvent::SessionStarted { participants } => state.set_flash(format!(
                "Session started, speaking order drawn for {}",
                participants
            )),
            UiEvent::PhaseEntered(entered) => state.set_flash(Self::phase_text(entered)),
            UiEvent::AdvanceIgnored { phase } => state.set_flash(match phase {
                Phase::Setup => "Press s to start the session".to_string(),
                _ => "Already at the last phase".to_string(),
            }),
            UiEvent::TimerToggled { running } => {
                state.set_flash(if *running { "Resumed" } else { "Paused" })
            }
            UiEvent::TimerAdjusted { remaining } => {
                state.set_flash(format!("Remaining {}", format_clock(*remaining)))
            }
            UiEvent::SessionReset => {
                state.notes_input.clear();
                state.notes_cursor = 0;
                state.score_row = 0;
                state.setup_row = 0;
                if state.mode == Mode::Insert {
                    state.mode = Mode::Normal;
                }
                state.set_flash("Session reset");
            }

            UiEvent::SpeakerChanged { index, name } => match name {
                Some(name) => state.set_flash(format!("Speaker {}: {}", index + 1, name)),
                None => state.set_flash("No speaking order yet"),
            },
            UiEvent::RolesAssigned { count } => {
                state.set_flash(format!("Roles drawn for {}", count))
            }
            UiEvent::Rated {
                participant,
                criterion,
                rating,
            } => state.set_flash(format!(
                "#{} {} = {}",
                participant,
                criterion.description(),
                rating
            )),
            UiEvent::NotesSaved { chars } => {
                state.set_flash(format!("Notes saved ({} chars)", chars))
            }

            UiEvent::ExportCopied { .. } => state.set_flash(EXPORT_COPIED),
            UiEvent::ExportFailed { error } => {
                state.set_flash(format!("Export failed: {}", error))
            }

            UiEvent::CommandError { message } => state.set_flash(message.clone()),
            UiEvent::UnknownCommand { command } => {
                state.set_flash(format!("Unknown command: {} (try :help)", command))
            }
            UiEvent::Exit => state.should_quit = true,
        }
    }

    fn welcome_text(info: &WelcomeInfo) -> String {
        let mut text = format!("{} · {} participants", info.case_title, info.participants);
        if let Some(seed) = info.seed {
            text.push_str(&format!(" · seed {}", seed));
        }
        text.push_str(" · ? for help");
        text
    }

    fn phase_text(entered: &PhaseEnteredEvent) -> String {
        if entered.to == Phase::Debrief {
            return DEBRIEF_BANNER.to_string();
        }
        let cause = if entered.manual { "" } else { "Time's up. " };
        format!(
            "{}{} ({})",
            cause,
            entered.to.display_name(),
            format_clock(entered.seconds)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_domain::{Criterion, ParticipantId, Rating};

    fn flash(state: &TuiState) -> &str {
        state
            .flash_message
            .as_ref()
            .map(|(text, _)| text.as_str())
            .unwrap_or_default()
    }

    #[test]
    fn test_welcome_mentions_seed() {
        let mut state = TuiState::new();
        TuiPresenter::new().apply(
            &mut state,
            &UiEvent::Welcome(WelcomeInfo {
                case_title: "案例",
                participants: 6,
                seed: Some(42),
            }),
        );
        assert!(flash(&state).contains("6 participants"));
        assert!(flash(&state).contains("seed 42"));
    }

    #[test]
    fn test_help_and_exit_change_state() {
        let presenter = TuiPresenter::new();
        let mut state = TuiState::new();
        presenter.apply(&mut state, &UiEvent::Help);
        assert!(state.show_help);
        presenter.apply(&mut state, &UiEvent::Exit);
        assert!(state.should_quit);
    }

    #[test]
    fn test_automatic_transition_is_marked() {
        let mut state = TuiState::new();
        TuiPresenter::new().apply(
            &mut state,
            &UiEvent::PhaseEntered(PhaseEnteredEvent {
                from: Phase::Reading,
                to: Phase::Statement,
                seconds: 300,
                manual: false,
            }),
        );
        assert!(flash(&state).starts_with("Time's up."));
        assert!(flash(&state).contains("05:00"));
    }

    #[test]
    fn test_debrief_shows_banner() {
        let mut state = TuiState::new();
        TuiPresenter::new().apply(
            &mut state,
            &UiEvent::PhaseEntered(PhaseEnteredEvent {
                from: Phase::Summary,
                to: Phase::Debrief,
                seconds: 0,
                manual: true,
            }),
        );
        assert_eq!(flash(&state), DEBRIEF_BANNER);
    }

    #[test]
    fn test_reset_clears_notes_pad() {
        let mut state = TuiState::new();
        state.begin_notes("draft");
        state.score_row = 3;
        TuiPresenter::new().apply(&mut state, &UiEvent::SessionReset);
        assert!(state.notes_input.is_empty());
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.score_row, 0);
    }

    #[test]
    fn test_rated_and_export() {
        let presenter = TuiPresenter::new();
        let mut state = TuiState::new();
        presenter.apply(
            &mut state,
            &UiEvent::Rated {
                participant: ParticipantId::new(2),
                criterion: Criterion::Data,
                rating: Rating::clamped(4),
            },
        );
        assert_eq!(flash(&state), "#2 数据敏感度 = 4");

        presenter.apply(&mut state, &UiEvent::ExportCopied { bytes: 10 });
        assert_eq!(flash(&state), EXPORT_COPIED);
    }
}
