//! Level attempt state machine.
//!
//! `Idle -> Running -> { Succeeded, Failed(TimedOut) }`
//!
//! The session owns no timers. Whoever drives it arms a countdown for the
//! [`LevelSession::generation`] returned by `start` and feeds ticks back with
//! that generation; ticks for an older attempt are ignored, so a callback
//! that outlives its attempt cannot touch the new one.

use serde::Serialize;
use tracing::debug;

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailReason {
    TimedOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    Running,
    Succeeded { score: u32 },
    Failed { reason: FailReason },
}

/// Breakdown of a successful attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Score {
    pub base: u32,
    pub time_bonus: u32,
    pub total: u32,
    pub seconds_remaining: u32,
    pub elapsed_secs: u32,
}

impl Score {
    pub fn compute(config: &GameConfig, seconds_remaining: u32, elapsed_secs: u32) -> Self {
        let time_bonus = seconds_remaining.saturating_mul(config.time_bonus_multiplier);
        Self {
            base: config.base_score,
            time_bonus,
            total: config.base_score.saturating_add(time_bonus),
            seconds_remaining,
            elapsed_secs,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick for an attempt that is no longer live.
    Stale,
    Running { remaining: u32 },
    TimedOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing but whitespace was submitted.
    Empty,
    Incorrect,
    Correct(Score),
    /// The session is not accepting input (idle, finished or timed out).
    Rejected,
}

/// A revealed hint, 1-based position out of `total`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Hint {
    pub number: usize,
    pub total: usize,
    pub text: &'static str,
}

/// HUD colouring of the remaining time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerUrgency {
    Normal,
    Warning,
    Danger,
}

impl TimerUrgency {
    pub fn for_remaining(config: &GameConfig, remaining: u32) -> Self {
        if remaining <= config.danger_threshold_secs {
            TimerUrgency::Danger
        } else if remaining <= config.warning_threshold_secs {
            TimerUrgency::Warning
        } else {
            TimerUrgency::Normal
        }
    }
}

/// Trim the whole text, then strip trailing whitespace from every line.
pub fn normalize_code(code: &str) -> String {
    code.trim()
        .split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Case-sensitive comparison after [`normalize_code`].
pub fn validate_code(submitted: &str, correct: &str) -> bool {
    normalize_code(submitted) == normalize_code(correct)
}

#[derive(Debug)]
pub struct LevelSession {
    level_id: u32,
    remaining: u32,
    hints_revealed: usize,
    state: SessionState,
    started_at_ms: f64,
    generation: u64,
}

impl Default for LevelSession {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelSession {
    pub fn new() -> Self {
        Self {
            level_id: 0,
            remaining: 0,
            hints_revealed: 0,
            state: SessionState::Idle,
            started_at_ms: 0.0,
            generation: 0,
        }
    }

    pub fn level_id(&self) -> u32 {
        self.level_id
    }
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
    pub fn hints_revealed(&self) -> usize {
        self.hints_revealed
    }
    pub fn state(&self) -> SessionState {
        self.state
    }
    pub fn generation(&self) -> u64 {
        self.generation
    }
    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Begin a fresh attempt, discarding whatever came before.
    /// Returns the generation the countdown must be armed with.
    pub fn start(&mut self, level_id: u32, duration_secs: u32, now_ms: f64) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.level_id = level_id;
        self.remaining = duration_secs;
        self.hints_revealed = 0;
        self.started_at_ms = now_ms;
        self.state = if duration_secs == 0 {
            SessionState::Failed { reason: FailReason::TimedOut }
        } else {
            SessionState::Running
        };
        debug!(level_id, generation = self.generation, duration_secs, "session started");
        self.generation
    }

    /// Drop the attempt (restart, exit to menu, logout). Outstanding ticks go stale.
    pub fn abort(&mut self) {
        if self.state != SessionState::Idle {
            debug!(level_id = self.level_id, generation = self.generation, "session aborted");
        }
        self.generation = self.generation.wrapping_add(1);
        self.state = SessionState::Idle;
    }

    /// One countdown step for attempt `generation`.
    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        if generation != self.generation || !self.is_running() {
            return TickOutcome::Stale;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.state = SessionState::Failed { reason: FailReason::TimedOut };
            debug!(level_id = self.level_id, "session timed out");
            TickOutcome::TimedOut
        } else {
            TickOutcome::Running { remaining: self.remaining }
        }
    }

    /// Check `submitted` against `correct`. Only a match changes state.
    pub fn submit(&mut self, submitted: &str, correct: &str, config: &GameConfig, now_ms: f64) -> SubmitOutcome {
        if !self.is_running() {
            return SubmitOutcome::Rejected;
        }
        if submitted.trim().is_empty() {
            return SubmitOutcome::Empty;
        }
        if !validate_code(submitted, correct) {
            return SubmitOutcome::Incorrect;
        }
        let elapsed_secs = ((now_ms - self.started_at_ms).max(0.0) / 1000.0).floor() as u32;
        let score = Score::compute(config, self.remaining, elapsed_secs);
        self.state = SessionState::Succeeded { score: score.total };
        debug!(level_id = self.level_id, score = score.total, elapsed_secs, "session succeeded");
        SubmitOutcome::Correct(score)
    }

    /// Next hint from `hints`, or `None` once they are used up or the attempt is over.
    pub fn reveal_hint(&mut self, hints: &'static [&'static str]) -> Option<Hint> {
        if !self.is_running() {
            return None;
        }
        let text = hints.get(self.hints_revealed)?;
        self.hints_revealed += 1;
        Some(Hint { number: self.hints_revealed, total: hints.len(), text })
    }
}
