//! TUI application: main loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop, owns the SessionController)
//!   ├─ crossterm EventStream  ── keys ──> KeyHandler ──> SessionCommand
//!   ├─ ui_rx (UiEvent)        ── TuiPresenter ──> TuiState
//!   ├─ PhaseTicker (1s, re-armed on every timer epoch) ──> controller.tick()
//!   └─ refresh interval       ── flash expiry
//! ```
//!
//! Every state change happens on this one task, so a tick and a manual
//! advance can never interleave.

use super::mode::{Action, KeyHandler, Mode};
use super::presenter::TuiPresenter;
use super::state::{SetupRow, TuiState};
use super::ticker::PhaseTicker;
use super::widgets::{
    MainLayout, case::CaseWidget, header::HeaderWidget, help::HelpWidget, notes::NotesWidget,
    order::OrderWidget, reference::ReferenceWidget, roles::RolesWidget, scoring::ScoringWidget,
    setup::SetupWidget, status_bar::StatusBarWidget, timer::TimerWidget,
};
use crate::config::TuiConfig;
use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use panel_application::{
    ClipboardPort, CommandAction, SessionCommand, SessionConfig, SessionController, UiEvent,
};
use panel_domain::{CASES, Case, Phase, Session};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::Clear,
};
use std::io;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Main TUI application
pub struct TuiApp<C: ClipboardPort> {
    controller: SessionController<C>,
    ui_rx: mpsc::UnboundedReceiver<UiEvent>,
    presenter: TuiPresenter,
    ticker: PhaseTicker,
    config: TuiConfig,
}

impl<C: ClipboardPort> TuiApp<C> {
    /// Create a new TUI application wired to a fresh controller
    pub fn new(session_config: &SessionConfig, clipboard: C, config: TuiConfig) -> Self {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
        let controller = SessionController::new(session_config, clipboard, ui_tx);

        Self {
            controller,
            ui_rx,
            presenter: TuiPresenter::new(),
            ticker: PhaseTicker::default(),
            config,
        }
    }

    pub fn session(&self) -> &Session {
        self.controller.session()
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        info!("TUI started");
        let result = self.event_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        info!("TUI stopped");

        result
    }

    async fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut state = TuiState::new();
        let mut event_stream = EventStream::new();
        let mut refresh = tokio::time::interval(self.config.refresh());

        self.controller.send_welcome();

        loop {
            self.sync_ticker();
            state.clamp_selection(self.controller.session());

            // Render
            terminal.draw(|frame| self.render(frame, &state))?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, term_event);
                }

                // UiEvents from the controller
                Some(ui_event) = self.ui_rx.recv() => {
                    self.presenter.apply(&mut state, &ui_event);
                }

                // One-second countdown, only armed while the timer runs
                _ = self.ticker.tick() => {
                    self.controller.tick();
                }

                // Flash expiry
                _ = refresh.tick() => {
                    state.expire_flash(self.config.flash());
                }
            }
        }

        Ok(())
    }

    fn sync_ticker(&mut self) {
        let session = self.controller.session();
        self.ticker
            .sync(session.timer_epoch(), session.timer().is_running());
    }

    fn handle_terminal_event(&mut self, state: &mut TuiState, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(state, key),
            // Resize redraws on the next iteration
            _ => {}
        }
    }

    fn handle_key(&mut self, state: &mut TuiState, key: KeyEvent) {
        let action = KeyHandler::handle(state.mode, key);

        // Any key closes an overlay; Ctrl+C still quits
        if state.show_help || state.show_reference {
            let ctrl_c = action == Action::Quit && key.modifiers.contains(KeyModifiers::CONTROL);
            state.close_overlays();
            if ctrl_c {
                self.dispatch(state, SessionCommand::Quit);
            }
            return;
        }

        debug!(?action, mode = ?state.mode, "Key action");

        match action {
            // -- Mode switches --
            Action::Quit => self.dispatch(state, SessionCommand::Quit),
            Action::EnterCommand => state.prefill_command(""),
            Action::EnterInsert => state.begin_notes(self.controller.session().notes()),
            Action::ExitToNormal => {
                state.mode = Mode::Normal;
                let notes = state.notes_input.clone();
                self.dispatch(state, SessionCommand::Notes(notes));
            }
            Action::Submit => {
                let line = state.take_command();
                state.mode = Mode::Normal;
                if self.controller.handle_line(&line) == CommandAction::Exit {
                    state.should_quit = true;
                }
            }
            Action::Cancel => match state.mode {
                Mode::Command => {
                    state.take_command();
                    state.mode = Mode::Normal;
                }
                Mode::Confirm => {
                    state.mode = Mode::Normal;
                    state.set_flash("Reset cancelled");
                }
                _ => {}
            },

            // -- Text editing --
            Action::InsertChar(c) => state.insert_char(c),
            Action::InsertNewline => state.insert_newline(),
            Action::DeleteChar => state.delete_char(),
            Action::CursorLeft => state.cursor_left(),
            Action::CursorRight => state.cursor_right(),
            Action::CursorStart => state.cursor_home(),
            Action::CursorEnd => state.cursor_end(),

            // -- Session controls --
            Action::Start => self.dispatch(state, SessionCommand::Start),
            Action::ToggleTimer => self.dispatch(state, SessionCommand::ToggleTimer),
            Action::Advance => self.dispatch(state, SessionCommand::Advance),
            Action::RequestReset => state.mode = Mode::Confirm,
            Action::ConfirmYes => {
                state.mode = Mode::Normal;
                self.dispatch(state, SessionCommand::Reset);
            }
            Action::ConfirmNo => state.mode = Mode::Normal,
            Action::Increment => self.step(state, 1),
            Action::Decrement => self.step(state, -1),
            Action::PreviousSpeaker => self.dispatch(state, SessionCommand::PreviousSpeaker),
            Action::NextSpeaker => self.dispatch(state, SessionCommand::NextSpeaker),
            Action::CycleCase => self.dispatch(state, SessionCommand::CycleCase),
            Action::AssignRoles => self.dispatch(state, SessionCommand::AssignRoles),
            Action::Export => self.dispatch(state, SessionCommand::Export),

            // -- Selection --
            Action::SelectUp => state.move_selection(self.controller.session(), -1),
            Action::SelectDown => state.move_selection(self.controller.session(), 1),
            Action::NextCriterion => state.next_criterion(),
            Action::PreviousCriterion => state.previous_criterion(),
            Action::Rate(value) => {
                if let Some(id) = state.selected_participant(self.controller.session()) {
                    let criterion = state.selected_criterion();
                    self.dispatch(
                        state,
                        SessionCommand::Rate {
                            id,
                            criterion,
                            value: i64::from(value),
                        },
                    );
                }
            }
            Action::Activate => self.activate(state),

            // -- Overlays --
            Action::ShowHelp => self.dispatch(state, SessionCommand::Help),
            Action::ToggleReference => state.show_reference = true,

            Action::None => {}
        }
    }

    fn dispatch(&mut self, state: &mut TuiState, command: SessionCommand) {
        if self.controller.handle(command) == CommandAction::Exit {
            state.should_quit = true;
        }
    }

    /// `+`/`-`: edit the selected setup row before the start, shift the
    /// countdown by a minute afterwards.
    fn step(&mut self, state: &mut TuiState, delta: isize) {
        let session = self.controller.session();
        let command = if session.phase() == Phase::Setup {
            match state.selected_setup_row(session) {
                Some(SetupRow::Case) => {
                    SessionCommand::SelectCase(neighbor_case(session.case(), delta).id.to_string())
                }
                Some(SetupRow::Roster) => {
                    SessionCommand::Roster(session.roster().len().saturating_add_signed(delta))
                }
                Some(SetupRow::Duration(phase)) => SessionCommand::AdjustDuration {
                    phase,
                    delta: delta as i64,
                },
                Some(SetupRow::Participant(_)) | None => {
                    state.set_flash("Press Enter to rename");
                    return;
                }
            }
        } else {
            SessionCommand::AdjustTimer(delta as i32)
        };
        self.dispatch(state, command);
    }

    /// Enter on the setup panel
    fn activate(&mut self, state: &mut TuiState) {
        let session = self.controller.session();
        if session.phase() != Phase::Setup {
            return;
        }
        match state.selected_setup_row(session) {
            Some(SetupRow::Participant(id)) => state.prefill_command(format!("name {} ", id)),
            Some(SetupRow::Case) => self.dispatch(state, SessionCommand::CycleCase),
            _ => {}
        }
    }

    /// Render all widgets
    fn render(&self, frame: &mut Frame, state: &TuiState) {
        let session = self.controller.session();
        let layout = MainLayout::compute(frame.area());

        frame.render_widget(HeaderWidget::new(session), layout.header);
        frame.render_widget(TimerWidget::new(session), layout.timer);
        if session.phase() == Phase::Setup {
            frame.render_widget(SetupWidget::new(session, state.setup_row), layout.panel);
        } else {
            frame.render_widget(OrderWidget::new(session), layout.panel);
        }
        frame.render_widget(RolesWidget::new(session), layout.roles);
        frame.render_widget(CaseWidget::new(session.case()), layout.case);
        frame.render_widget(
            ScoringWidget::new(session, state.score_row, state.score_col),
            layout.scoring,
        );
        let notes = if state.mode == Mode::Insert {
            NotesWidget::editing(&state.notes_input, state.notes_cursor)
        } else {
            NotesWidget::saved(session.notes())
        };
        frame.render_widget(notes, layout.notes);
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

        if state.show_reference {
            let area = MainLayout::centered_overlay(80, 80, frame.area());
            frame.render_widget(Clear, area);
            frame.render_widget(ReferenceWidget::new(), area);
        }

        if state.show_help {
            let area = MainLayout::centered_overlay(70, 80, frame.area());
            frame.render_widget(Clear, area);
            frame.render_widget(HelpWidget::new(), area);
        }
    }
}

/// The case `delta` steps away in the catalog, wrapping around
fn neighbor_case(current: &Case, delta: isize) -> &'static Case {
    let len = CASES.len() as isize;
    let index = CASES
        .iter()
        .position(|case| case.id == current.id)
        .unwrap_or(0) as isize;
    &CASES[(index + delta).rem_euclid(len) as usize]
}
