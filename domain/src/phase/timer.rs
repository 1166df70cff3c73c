//! Countdown state for the active phase

use crate::core::clock::{SECONDS_PER_MINUTE, format_clock};

/// Remaining seconds and the running flag.
///
/// The timer knows nothing about phases; [`crate::session::Session`]
/// decides when to load a new duration and what happens at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhaseTimer {
    remaining: u32,
    running: bool,
}

impl PhaseTimer {
    /// A paused timer holding `remaining` seconds
    pub fn paused(remaining: u32) -> Self {
        Self {
            remaining,
            running: false,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Replace the remaining time without touching `running`.
    pub fn load(&mut self, seconds: u32) {
        self.remaining = seconds;
    }

    /// Count down one second. Returns the new remaining time.
    pub fn decrement(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    /// Shift the remaining time by whole minutes, floored at zero.
    pub fn shift_minutes(&mut self, minutes: i32) -> u32 {
        let delta = minutes.unsigned_abs().saturating_mul(SECONDS_PER_MINUTE);
        self.remaining = if minutes >= 0 {
            self.remaining.saturating_add(delta)
        } else {
            self.remaining.saturating_sub(delta)
        };
        self.remaining
    }

    /// `mm:ss` rendering of the remaining time
    pub fn display(&self) -> String {
        format_clock(self.remaining)
    }
}
