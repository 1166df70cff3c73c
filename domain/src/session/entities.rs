//! Session entity and phase/timer state machine

use crate::assignment::{RoleMap, SpeakingOrder};
use crate::catalog::Case;
use crate::core::error::DomainError;
use crate::export::SessionSnapshot;
use crate::phase::{Phase, PhaseDurations, PhaseTimer};
use crate::roster::{ParticipantId, Roster};
use crate::scoring::{Criterion, Rating, ScoreSheet};
use rand::Rng;

/// Result of a single one-second tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer is paused (or the session has no countdown)
    Idle,
    /// Counted down one second
    Counted { remaining: u32 },
    /// The countdown expired and the session moved forward
    Advanced { from: Phase, to: Phase },
}

/// A group-interview session (Entity)
///
/// Holds every piece of mutable state: phase, timer, roster, speaking
/// order, roles, scores and notes. All transitions are synchronous methods;
/// the caller owns the one-second ticker and calls [`Session::tick`].
///
/// # Timer epoch
///
/// Every phase change, start/pause and duration reload of the active phase
/// bumps [`Session::timer_epoch`]. A driver re-arms its ticker whenever the
/// epoch changes, so the first tick of a phase always comes one full period
/// after the phase was entered and an old ticker never survives a change.
///
/// # Example
///
/// ```
/// use panel_domain::{Case, Phase, PhaseDurations, Session};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let mut session = Session::new(Case::default_case(), 4, PhaseDurations::default());
/// session.start(&mut rng).unwrap();
/// assert_eq!(session.phase(), Phase::Reading);
/// assert_eq!(session.timer().remaining(), 180);
/// assert!(session.timer().is_running());
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
    case: &'static Case,
    roster: Roster,
    durations: PhaseDurations,
    timer: PhaseTimer,
    order: SpeakingOrder,
    roles: RoleMap,
    scores: ScoreSheet,
    notes: String,
    timer_epoch: u64,
}

impl Session {
    /// A session in `setup` with `roster_size` default participants.
    pub fn new(case: &'static Case, roster_size: usize, durations: PhaseDurations) -> Self {
        Self {
            phase: Phase::Setup,
            case,
            roster: Roster::numbered(roster_size),
            timer: PhaseTimer::paused(Self::reading_seconds(&durations)),
            durations,
            order: SpeakingOrder::default(),
            roles: RoleMap::default(),
            scores: ScoreSheet::default(),
            notes: String::new(),
            timer_epoch: 0,
        }
    }

    fn reading_seconds(durations: &PhaseDurations) -> u32 {
        durations.seconds(Phase::Reading).unwrap_or_default()
    }

    // ==================== Accessors ====================

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn case(&self) -> &'static Case {
        self.case
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn durations(&self) -> &PhaseDurations {
        &self.durations
    }

    pub fn timer(&self) -> &PhaseTimer {
        &self.timer
    }

    pub fn speaking_order(&self) -> &SpeakingOrder {
        &self.order
    }

    pub fn roles(&self) -> &RoleMap {
        &self.roles
    }

    pub fn scores(&self) -> &ScoreSheet {
        &self.scores
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn timer_epoch(&self) -> u64 {
        self.timer_epoch
    }

    fn bump_epoch(&mut self) {
        self.timer_epoch = self.timer_epoch.wrapping_add(1);
    }

    fn require_setup(&self, action: &'static str) -> Result<(), DomainError> {
        if self.phase == Phase::Setup {
            Ok(())
        } else {
            Err(DomainError::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }

    // ==================== Setup ====================

    /// Select a case by id. Only during `setup`.
    pub fn select_case(&mut self, id: &str) -> Result<&'static Case, DomainError> {
        self.require_setup("Case selection")?;
        self.case = Case::find(id)?;
        Ok(self.case)
    }

    /// Step to the next case in the catalog. Only during `setup`.
    pub fn cycle_case(&mut self) -> Result<&'static Case, DomainError> {
        self.require_setup("Case selection")?;
        self.case = self.case.next_in_catalog();
        Ok(self.case)
    }

    /// Resize the roster (clamped to 3–12). Only during `setup`.
    ///
    /// Returns whether the roster changed; any change resets every name to
    /// the default pattern and drops ratings and roles drawn for the old
    /// roster.
    pub fn set_roster_size(&mut self, size: usize) -> Result<bool, DomainError> {
        self.require_setup("Roster resize")?;
        let changed = self.roster.resize(size);
        if changed {
            self.scores.clear();
            self.roles.clear();
        }
        Ok(changed)
    }

    /// Rename a participant. Only during `setup`.
    pub fn rename(&mut self, id: ParticipantId, name: &str) -> Result<(), DomainError> {
        self.require_setup("Rename")?;
        self.roster.rename(id, name)
    }

    /// Set the duration of a timed phase (clamped to 1–60 minutes).
    ///
    /// When `phase` is the active phase its countdown is reloaded.
    pub fn set_duration(&mut self, phase: Phase, minutes: i64) -> Result<u32, DomainError> {
        let applied = self
            .durations
            .set_minutes(phase, minutes)
            .ok_or(DomainError::UntimedPhase(phase))?;
        self.reload_if_active(phase);
        Ok(applied)
    }

    /// Step the duration of a timed phase by `delta` minutes.
    pub fn adjust_duration(&mut self, phase: Phase, delta: i64) -> Result<u32, DomainError> {
        let applied = self
            .durations
            .adjust_minutes(phase, delta)
            .ok_or(DomainError::UntimedPhase(phase))?;
        self.reload_if_active(phase);
        Ok(applied)
    }

    fn reload_if_active(&mut self, phase: Phase) {
        if phase == self.phase {
            if let Some(seconds) = self.durations.seconds(phase) {
                self.timer.load(seconds);
                self.bump_epoch();
            }
        } else if self.phase == Phase::Setup && phase == Phase::Reading {
            // setup previews the reading countdown
            self.timer.load(Self::reading_seconds(&self.durations));
        }
    }

    // ==================== Lifecycle ====================

    /// Start the session: draw speaking order and roles, enter `reading`
    /// and run the timer. Only from `setup`.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), DomainError> {
        self.require_setup("Start")?;
        self.order = SpeakingOrder::generate(&self.roster, rng);
        self.roles = RoleMap::assign(&self.roster, rng);
        self.enter(Phase::Reading);
        Ok(())
    }

    /// Manual "advance". No-op in `setup` and `debrief`.
    pub fn advance(&mut self) -> Option<Phase> {
        self.advance_from(self.phase)
    }

    /// Forward transition guarded by the phase the caller observed.
    ///
    /// Does nothing unless the session is still in `observed`, so a second
    /// call for the same observation never advances twice.
    pub fn advance_from(&mut self, observed: Phase) -> Option<Phase> {
        if self.phase != observed {
            return None;
        }
        let next = observed.next()?;
        self.enter(next);
        Some(next)
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        match self.durations.seconds(phase) {
            Some(seconds) => {
                self.timer.load(seconds);
                self.timer.start();
            }
            None => {
                self.timer.load(0);
                self.timer.pause();
            }
        }
        self.bump_epoch();
    }

    /// One second elapsed.
    ///
    /// Counts down while running; at one second or less remaining the
    /// session advances instead and the timer holds the new phase's full
    /// duration.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.timer.is_running() {
            return TickOutcome::Idle;
        }
        let observed = self.phase;
        if self.timer.remaining() > 1 {
            return TickOutcome::Counted {
                remaining: self.timer.decrement(),
            };
        }
        match self.advance_from(observed) {
            Some(to) => TickOutcome::Advanced { from: observed, to },
            None => {
                // running without a successor: park at zero
                self.timer.load(0);
                self.timer.pause();
                self.bump_epoch();
                TickOutcome::Idle
            }
        }
    }

    /// Toggle pause/resume. Only in timed phases. Returns the new state.
    pub fn toggle_running(&mut self) -> Result<bool, DomainError> {
        if !self.phase.is_timed() {
            return Err(DomainError::WrongPhase {
                action: "Pause/resume",
                phase: self.phase,
            });
        }
        if self.timer.is_running() {
            self.timer.pause();
        } else {
            self.timer.start();
        }
        self.bump_epoch();
        Ok(self.timer.is_running())
    }

    /// ±1-minute style adjustment of the remaining time, floored at zero.
    /// Does not change `running`.
    pub fn shift_remaining(&mut self, minutes: i32) -> Result<u32, DomainError> {
        if !self.phase.is_started() {
            return Err(DomainError::WrongPhase {
                action: "Timer adjustment",
                phase: self.phase,
            });
        }
        Ok(self.timer.shift_minutes(minutes))
    }

    /// Return to `setup` from any phase.
    ///
    /// Clears order, roles, notes and scores and reloads the reading
    /// duration. Roster, case and durations are kept.
    pub fn reset(&mut self) {
        self.phase = Phase::Setup;
        self.timer = PhaseTimer::paused(Self::reading_seconds(&self.durations));
        self.order.clear();
        self.roles.clear();
        self.notes.clear();
        self.scores.clear();
        self.bump_epoch();
    }

    // ==================== During the session ====================

    pub fn next_speaker(&mut self) -> usize {
        self.order.next_speaker()
    }

    pub fn previous_speaker(&mut self) -> usize {
        self.order.previous_speaker()
    }

    /// Redraw roles for the whole roster. Allowed in any phase.
    pub fn assign_roles<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &RoleMap {
        self.roles = RoleMap::assign(&self.roster, rng);
        &self.roles
    }

    /// Set one score cell. `value` is clamped to 1–5.
    pub fn rate(
        &mut self,
        participant: ParticipantId,
        criterion: Criterion,
        value: i64,
    ) -> Result<Rating, DomainError> {
        if !self.roster.contains(participant) {
            return Err(DomainError::UnknownParticipant(participant.get()));
        }
        let rating = Rating::clamped(value);
        self.scores.set(participant, criterion, rating);
        Ok(rating)
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    // ==================== Export ====================

    /// Read-only snapshot of the current state for export.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self)
    }
}
