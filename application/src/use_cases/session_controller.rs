//! Session Controller
//!
//! Owns the session state and turns facilitator commands and timer ticks
//! into domain operations. Emits UiEvent messages to a channel for the
//! presentation layer to render.

use crate::config::SessionConfig;
use crate::ports::clipboard::ClipboardPort;
use crate::ports::ui_event::{PhaseEnteredEvent, UiEvent, WelcomeInfo};
use crate::use_cases::export_session::ExportSessionUseCase;
use crate::use_cases::session_command::{CommandParseError, SessionCommand};
use panel_domain::{DomainError, Phase, Session, TickOutcome};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Result of handling a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    /// Keep the event loop running
    Continue,
    /// Leave the application
    Exit,
}

/// Session controller
///
/// This controller lives in the application layer and handles:
/// - Command processing (setup changes, lifecycle, scoring)
/// - Timer ticks from the presentation layer's ticker
/// - Export through the [`ClipboardPort`]
/// - Emitting UiEvents to a channel for the presentation layer
///
/// All state changes happen synchronously on the task that owns the
/// controller.
pub struct SessionController<C: ClipboardPort> {
    session: Session,
    rng: StdRng,
    seed: Option<u64>,
    clipboard: C,
    /// Channel sender for UI events
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl<C: ClipboardPort> SessionController<C> {
    /// Create a new SessionController
    pub fn new(config: &SessionConfig, clipboard: C, tx: mpsc::UnboundedSender<UiEvent>) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            session: config.build_session(),
            rng,
            seed: config.seed(),
            clipboard,
            tx,
        }
    }

    /// Current session state (read-only)
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn emit(&self, event: UiEvent) {
        let _ = self.tx.send(event);
    }

    fn emit_error(&self, error: impl std::fmt::Display) {
        self.emit(UiEvent::CommandError {
            message: error.to_string(),
        });
    }

    /// Send the welcome event
    pub fn send_welcome(&self) {
        self.emit(UiEvent::Welcome(WelcomeInfo {
            case_title: self.session.case().title,
            participants: self.session.roster().len(),
            seed: self.seed,
        }));
    }

    /// Parse and handle a command-line entry.
    pub fn handle_line(&mut self, line: &str) -> CommandAction {
        match SessionCommand::parse(line) {
            Ok(command) => self.handle(command),
            Err(CommandParseError::Empty) => CommandAction::Continue,
            Err(CommandParseError::Unknown(command)) => {
                self.emit(UiEvent::UnknownCommand { command });
                CommandAction::Continue
            }
            Err(e) => {
                self.emit_error(e);
                CommandAction::Continue
            }
        }
    }

    /// Handle a command. Returns whether to continue or exit.
    pub fn handle(&mut self, command: SessionCommand) -> CommandAction {
        debug!(?command, phase = %self.session.phase(), "Handling command");

        match command {
            SessionCommand::Quit => {
                self.emit(UiEvent::Exit);
                return CommandAction::Exit;
            }
            SessionCommand::Help => self.emit(UiEvent::Help),
            SessionCommand::Export => self.export(),
            other => {
                if let Err(e) = self.apply(other) {
                    self.emit_error(e);
                }
            }
        }
        CommandAction::Continue
    }

    fn apply(&mut self, command: SessionCommand) -> Result<(), DomainError> {
        match command {
            SessionCommand::SelectCase(id) => {
                let case = self.session.select_case(&id)?;
                info!(case = case.id, "Case selected");
                self.emit(UiEvent::CaseSelected {
                    id: case.id,
                    title: case.title,
                });
            }
            SessionCommand::CycleCase => {
                let case = self.session.cycle_case()?;
                info!(case = case.id, "Case selected");
                self.emit(UiEvent::CaseSelected {
                    id: case.id,
                    title: case.title,
                });
            }
            SessionCommand::Roster(size) => {
                let changed = self.session.set_roster_size(size)?;
                let size = self.session.roster().len();
                if changed {
                    info!(size, "Roster resized");
                    self.emit(UiEvent::RosterResized { size });
                } else {
                    self.emit(UiEvent::RosterUnchanged { size });
                }
            }
            SessionCommand::Rename { id, name } => {
                self.session.rename(id, &name)?;
                let name = self.session.roster().name_of(id).unwrap_or_default();
                self.emit(UiEvent::ParticipantRenamed {
                    id,
                    name: name.to_string(),
                });
            }
            SessionCommand::SetDuration { phase, minutes } => {
                let minutes = self.session.set_duration(phase, minutes)?;
                self.emit(UiEvent::DurationChanged { phase, minutes });
            }
            SessionCommand::AdjustDuration { phase, delta } => {
                let minutes = self.session.adjust_duration(phase, delta)?;
                self.emit(UiEvent::DurationChanged { phase, minutes });
            }
            SessionCommand::Start => {
                self.session.start(&mut self.rng)?;
                info!(
                    case = self.session.case().id,
                    participants = self.session.roster().len(),
                    "Session started"
                );
                self.emit(UiEvent::SessionStarted {
                    participants: self.session.roster().len(),
                });
                self.emit_phase_entered(Phase::Setup, true);
            }
            SessionCommand::ToggleTimer => {
                let running = self.session.toggle_running()?;
                debug!(running, "Timer toggled");
                self.emit(UiEvent::TimerToggled { running });
            }
            SessionCommand::Advance => {
                let from = self.session.phase();
                if self.session.advance().is_some() {
                    info!(from = %from, to = %self.session.phase(), "Phase advanced by hand");
                    self.emit_phase_entered(from, true);
                } else {
                    self.emit(UiEvent::AdvanceIgnored { phase: from });
                }
            }
            SessionCommand::AdjustTimer(minutes) => {
                let remaining = self.session.shift_remaining(minutes)?;
                self.emit(UiEvent::TimerAdjusted { remaining });
            }
            SessionCommand::Reset => {
                self.session.reset();
                info!("Session reset");
                self.emit(UiEvent::SessionReset);
            }
            SessionCommand::NextSpeaker => {
                let index = self.session.next_speaker();
                self.emit_speaker(index);
            }
            SessionCommand::PreviousSpeaker => {
                let index = self.session.previous_speaker();
                self.emit_speaker(index);
            }
            SessionCommand::AssignRoles => {
                let count = self.session.assign_roles(&mut self.rng).len();
                info!(count, "Roles assigned");
                self.emit(UiEvent::RolesAssigned { count });
            }
            SessionCommand::Rate {
                id,
                criterion,
                value,
            } => {
                let rating = self.session.rate(id, criterion, value)?;
                self.emit(UiEvent::Rated {
                    participant: id,
                    criterion,
                    rating,
                });
            }
            SessionCommand::Notes(notes) => {
                let chars = notes.chars().count();
                self.session.set_notes(notes);
                self.emit(UiEvent::NotesSaved { chars });
            }
            SessionCommand::Export | SessionCommand::Help | SessionCommand::Quit => {}
        }
        Ok(())
    }

    fn emit_phase_entered(&self, from: Phase, manual: bool) {
        self.emit(UiEvent::PhaseEntered(PhaseEnteredEvent {
            from,
            to: self.session.phase(),
            seconds: self.session.timer().remaining(),
            manual,
        }));
    }

    fn emit_speaker(&self, index: usize) {
        let name = self
            .session
            .speaking_order()
            .current_speaker()
            .and_then(|id| self.session.roster().name_of(id))
            .map(str::to_string);
        self.emit(UiEvent::SpeakerChanged { index, name });
    }

    fn export(&mut self) {
        match ExportSessionUseCase::execute(&self.session, &mut self.clipboard) {
            Ok(output) => self.emit(UiEvent::ExportCopied {
                bytes: output.json.len(),
            }),
            Err(e) => self.emit(UiEvent::ExportFailed {
                error: e.to_string(),
            }),
        }
    }

    /// One second elapsed on the ticker.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.session.tick();
        match outcome {
            TickOutcome::Advanced { from, to } => {
                info!(from = %from, to = %to, "Countdown expired, phase advanced");
                self.emit_phase_entered(from, false);
            }
            TickOutcome::Counted { remaining } => {
                debug!(remaining, "Tick");
            }
            TickOutcome::Idle => {}
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::RecordingClipboard;
    use panel_domain::{Criterion, ParticipantId, PhaseDurations};

    fn create_test_controller() -> (
        SessionController<RecordingClipboard>,
        mpsc::UnboundedReceiver<UiEvent>,
    ) {
        create_with_clipboard(RecordingClipboard::default())
    }

    fn create_with_clipboard(
        clipboard: RecordingClipboard,
    ) -> (
        SessionController<RecordingClipboard>,
        mpsc::UnboundedReceiver<UiEvent>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        let config = SessionConfig::default()
            .with_participants(5)
            .with_seed(Some(42));
        (SessionController::new(&config, clipboard, tx), rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<UiEvent>) -> Vec<UiEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[test]
    fn test_welcome() {
        let (controller, mut rx) = create_test_controller();
        controller.send_welcome();
        match rx.try_recv().unwrap() {
            UiEvent::Welcome(info) => {
                assert_eq!(info.participants, 5);
                assert_eq!(info.seed, Some(42));
            }
            other => panic!("Expected Welcome, got {:?}", other),
        }
    }

    #[test]
    fn test_start_emits_started_and_phase_entered() {
        let (mut controller, mut rx) = create_test_controller();
        let action = controller.handle(SessionCommand::Start);

        assert_eq!(action, CommandAction::Continue);
        assert_eq!(controller.session().phase(), Phase::Reading);
        let events = drain(&mut rx);
        assert_eq!(events[0], UiEvent::SessionStarted { participants: 5 });
        assert_eq!(
            events[1],
            UiEvent::PhaseEntered(PhaseEnteredEvent {
                from: Phase::Setup,
                to: Phase::Reading,
                seconds: 180,
                manual: true,
            })
        );
    }

    #[test]
    fn test_same_seed_same_draw() {
        let (mut a, _rx_a) = create_test_controller();
        let (mut b, _rx_b) = create_test_controller();
        a.handle(SessionCommand::Start);
        b.handle(SessionCommand::Start);
        assert_eq!(
            a.session().speaking_order().ids(),
            b.session().speaking_order().ids()
        );
        assert_eq!(a.session().roles(), b.session().roles());
    }

    #[test]
    fn test_wrong_phase_becomes_command_error() {
        let (mut controller, mut rx) = create_test_controller();
        controller.handle(SessionCommand::Start);
        drain(&mut rx);

        controller.handle(SessionCommand::Roster(8));
        match rx.try_recv().unwrap() {
            UiEvent::CommandError { message } => assert!(message.contains("reading")),
            other => panic!("Expected CommandError, got {:?}", other),
        }
        assert_eq!(controller.session().roster().len(), 5);
    }

    #[test]
    fn test_advance_in_setup_is_ignored() {
        let (mut controller, mut rx) = create_test_controller();
        controller.handle(SessionCommand::Advance);
        assert_eq!(
            rx.try_recv().unwrap(),
            UiEvent::AdvanceIgnored {
                phase: Phase::Setup
            }
        );
    }

    #[test]
    fn test_tick_expiry_emits_phase_entered() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let config = SessionConfig::default()
            .with_durations(PhaseDurations::new(1, 1, 1, 1))
            .with_seed(Some(1));
        let mut controller = SessionController::new(&config, RecordingClipboard::default(), tx);
        controller.handle(SessionCommand::Start);
        drain(&mut rx);

        for _ in 0..59 {
            assert!(matches!(controller.tick(), TickOutcome::Counted { .. }));
        }
        assert_eq!(
            controller.tick(),
            TickOutcome::Advanced {
                from: Phase::Reading,
                to: Phase::Statement
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            UiEvent::PhaseEntered(PhaseEnteredEvent {
                from: Phase::Reading,
                to: Phase::Statement,
                seconds: 60,
                manual: false,
            })
        );
    }

    #[test]
    fn test_handle_line_rate_and_export() {
        let (mut controller, mut rx) = create_test_controller();
        controller.handle_line(":start");
        controller.handle_line(":rate 2 logic 4");
        controller.handle_line(":rate 2 数据 2");
        drain(&mut rx);

        assert_eq!(
            controller
                .session()
                .scores()
                .get(ParticipantId::new(2), Criterion::Logic)
                .map(|r| r.value()),
            Some(4)
        );

        controller.handle_line("export");
        match rx.try_recv().unwrap() {
            UiEvent::ExportCopied { bytes } => assert!(bytes > 0),
            other => panic!("Expected ExportCopied, got {:?}", other),
        }
        let json = controller.clipboard.writes.last().unwrap();
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["participants"][1]["avg"], 3.0);
    }

    #[test]
    fn test_export_failure_is_flashed_not_fatal() {
        let (mut controller, mut rx) = create_with_clipboard(RecordingClipboard::failing());
        let action = controller.handle(SessionCommand::Export);
        assert_eq!(action, CommandAction::Continue);
        assert!(matches!(rx.try_recv().unwrap(), UiEvent::ExportFailed { .. }));
    }

    #[test]
    fn test_unknown_and_invalid_lines() {
        let (mut controller, mut rx) = create_test_controller();
        controller.handle_line("dance");
        assert_eq!(
            rx.try_recv().unwrap(),
            UiEvent::UnknownCommand {
                command: "dance".to_string()
            }
        );

        controller.handle_line("roster");
        assert!(matches!(
            rx.try_recv().unwrap(),
            UiEvent::CommandError { .. }
        ));

        controller.handle_line("   ");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_roster_resize_events() {
        let (mut controller, mut rx) = create_test_controller();
        controller.handle(SessionCommand::Roster(8));
        assert_eq!(rx.try_recv().unwrap(), UiEvent::RosterResized { size: 8 });
        controller.handle(SessionCommand::Roster(8));
        assert_eq!(rx.try_recv().unwrap(), UiEvent::RosterUnchanged { size: 8 });
    }

    #[test]
    fn test_reset_clears_and_emits() {
        let (mut controller, mut rx) = create_test_controller();
        controller.handle(SessionCommand::Start);
        controller.handle(SessionCommand::Notes("ok".to_string()));
        controller.handle(SessionCommand::Reset);

        assert_eq!(controller.session().phase(), Phase::Setup);
        assert!(controller.session().notes().is_empty());
        assert_eq!(drain(&mut rx).last(), Some(&UiEvent::SessionReset));
    }

    #[test]
    fn test_speaker_navigation() {
        let (mut controller, mut rx) = create_test_controller();
        controller.handle(SessionCommand::Start);
        drain(&mut rx);

        controller.handle(SessionCommand::PreviousSpeaker);
        match rx.try_recv().unwrap() {
            UiEvent::SpeakerChanged { index, name } => {
                assert_eq!(index, 0);
                assert!(name.is_some());
            }
            other => panic!("Expected SpeakerChanged, got {:?}", other),
        }
        controller.handle(SessionCommand::NextSpeaker);
        assert!(matches!(
            rx.try_recv().unwrap(),
            UiEvent::SpeakerChanged { index: 1, .. }
        ));
    }

    #[test]
    fn test_quit_returns_exit() {
        let (mut controller, mut rx) = create_test_controller();
        assert_eq!(controller.handle_line("quit"), CommandAction::Exit);
        assert_eq!(rx.try_recv().unwrap(), UiEvent::Exit);
    }
}
