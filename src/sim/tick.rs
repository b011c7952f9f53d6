//! Periodic task scheduling
//!
//! The session itself has no clock. A front end feeds elapsed wall time into
//! a `Scheduler`, which turns it into countdown ticks and search steps using
//! a fixed-interval accumulator per task.

use super::search::SearchState;
use super::state::{GamePhase, GameSession};
use crate::consts::{MAX_CATCHUP_STEPS, MAX_FRAME_MS, SEARCH_STEP_MS, TIMER_TICK_MS};

/// A fixed-interval task driven by an accumulator
#[derive(Debug, Clone)]
pub struct PeriodicTask {
    interval_ms: u32,
    accumulator_ms: u32,
    /// Session generation this task is scheduled for
    generation: u64,
}

impl PeriodicTask {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulator_ms: 0,
            generation: 0,
        }
    }

    /// Drop any partial interval when the session started a new instance of this task
    fn sync(&mut self, generation: u64) {
        if self.generation != generation {
            self.generation = generation;
            self.accumulator_ms = 0;
        }
    }

    /// Add elapsed time, returning how many intervals are due (capped)
    fn accumulate(&mut self, elapsed_ms: u32) -> u32 {
        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);
        let due = (self.accumulator_ms / self.interval_ms).min(MAX_CATCHUP_STEPS);
        self.accumulator_ms -= due * self.interval_ms;
        // Anything beyond the catch-up cap is dropped
        if self.accumulator_ms >= self.interval_ms {
            self.accumulator_ms = 0;
        }
        due
    }

    fn idle(&mut self) {
        self.accumulator_ms = 0;
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}

/// Countdown timer plus search stepper for one session
#[derive(Debug, Clone)]
pub struct Scheduler {
    timer: PeriodicTask,
    search: PeriodicTask,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(TIMER_TICK_MS, SEARCH_STEP_MS)
    }
}

impl Scheduler {
    pub fn new(timer_interval_ms: u32, search_step_ms: u32) -> Self {
        Self {
            timer: PeriodicTask::new(timer_interval_ms),
            search: PeriodicTask::new(search_step_ms),
        }
    }

    /// Delay between two search steps
    pub fn search_step_ms(&self) -> u32 {
        self.search.interval_ms()
    }

    /// Run every tick and search step that falls due within `elapsed_ms`
    pub fn advance(&mut self, session: &mut GameSession, elapsed_ms: u32) {
        let elapsed_ms = elapsed_ms.min(MAX_FRAME_MS);

        self.timer.sync(session.timer_generation());
        if session.phase() == GamePhase::Playing {
            for _ in 0..self.timer.accumulate(elapsed_ms) {
                session.tick();
                if session.phase() != GamePhase::Playing {
                    self.timer.idle();
                    break;
                }
            }
        } else {
            self.timer.idle();
        }

        self.search.sync(session.search_generation());
        if session.search_state() == SearchState::Scanning {
            for _ in 0..self.search.accumulate(elapsed_ms) {
                if session.search_step() != SearchState::Scanning {
                    self.search.idle();
                    break;
                }
            }
        } else {
            self.search.idle();
        }
    }
}
