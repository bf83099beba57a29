//! Guided step-cook session.
//!
//! A cooperative countdown over a recipe's steps: the caller drives the
//! clock by calling [`StepCookSession::tick`] once per elapsed second, so
//! there are no threads and no timers to cancel. When a step's countdown
//! reaches zero and auto-advance is on, the step is marked done and the
//! session moves on; finishing the last step completes the session. The
//! caller then records the cook through the store
//! (`CookSyncStore::complete_cooking`).

use crate::catalog::RecipeStep;
use anyhow::{bail, Result};
use std::collections::BTreeSet;

/// Cook skill, scaling every step's countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl SkillLevel {
    /// Beginners get 25% more time, experts 25% less.
    pub fn adjusted_duration(&self, base_seconds: u32) -> u32 {
        let factor = match self {
            SkillLevel::Beginner => 1.25,
            SkillLevel::Intermediate => 1.0,
            SkillLevel::Expert => 0.75,
        };
        (base_seconds as f64 * factor).round() as u32
    }
}

/// What a clock tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer not running; nothing moved.
    Idle,
    /// Still counting down; remaining seconds inside.
    Counting(u32),
    /// Countdown hit zero and stopped (auto-advance off).
    StepFinished,
    /// Countdown hit zero and the session advanced to this step index.
    Advanced(usize),
    /// Countdown hit zero on the last step; the session is complete.
    SessionComplete,
}

pub struct StepCookSession {
    steps: Vec<RecipeStep>,
    current: usize,
    skill_level: SkillLevel,
    timer_seconds: u32,
    timer_running: bool,
    auto_advance: bool,
    completed_steps: BTreeSet<usize>,
    finished: bool,
}

impl StepCookSession {
    pub fn new(steps: Vec<RecipeStep>) -> Result<Self> {
        if steps.is_empty() {
            bail!("a cook session needs at least one step");
        }
        Ok(Self {
            steps,
            current: 0,
            skill_level: SkillLevel::Intermediate,
            timer_seconds: 0,
            timer_running: false,
            auto_advance: true,
            completed_steps: BTreeSet::new(),
            finished: false,
        })
    }

    pub fn current_step(&self) -> &RecipeStep {
        &self.steps[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.timer_seconds
    }

    pub fn is_running(&self) -> bool {
        self.timer_running
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn completed_steps(&self) -> &BTreeSet<usize> {
        &self.completed_steps
    }

    pub fn skill_level(&self) -> SkillLevel {
        self.skill_level
    }

    pub fn set_auto_advance(&mut self, auto_advance: bool) {
        self.auto_advance = auto_advance;
    }

    /// Countdown length of the current step at the current skill level.
    pub fn adjusted_duration(&self) -> u32 {
        self.skill_level
            .adjusted_duration(self.current_step().duration)
    }

    /// Fraction of the session done, for the progress bar.
    pub fn progress(&self) -> f64 {
        let done = self.current + usize::from(self.completed_steps.contains(&self.current));
        done as f64 / self.steps.len() as f64
    }

    /// Starts (or resumes) the countdown; a spent timer restarts from the
    /// step's adjusted duration.
    pub fn start_timer(&mut self) {
        if self.timer_seconds == 0 {
            self.timer_seconds = self.adjusted_duration();
        }
        self.timer_running = true;
    }

    pub fn pause_timer(&mut self) {
        self.timer_running = false;
    }

    /// Two extra minutes on the clock.
    pub fn add_time(&mut self) {
        self.timer_seconds += 120;
    }

    /// Rescales the remaining time proportionally when the skill level
    /// changes mid-step.
    pub fn set_skill_level(&mut self, level: SkillLevel) {
        if level == self.skill_level {
            return;
        }
        let prev_adjusted = self.adjusted_duration();
        let new_adjusted = level.adjusted_duration(self.current_step().duration);
        self.timer_seconds = if prev_adjusted > 0 {
            let proportion = self.timer_seconds as f64 / prev_adjusted as f64;
            (new_adjusted as f64 * proportion).round() as u32
        } else {
            new_adjusted
        };
        self.skill_level = level;
    }

    /// One second of wall clock.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.timer_running || self.finished {
            return TickOutcome::Idle;
        }
        self.timer_seconds = self.timer_seconds.saturating_sub(1);
        if self.timer_seconds > 0 {
            return TickOutcome::Counting(self.timer_seconds);
        }
        self.timer_running = false;
        if !self.auto_advance {
            return TickOutcome::StepFinished;
        }
        self.completed_steps.insert(self.current);
        if self.current + 1 < self.steps.len() {
            self.enter_step(self.current + 1);
            TickOutcome::Advanced(self.current)
        } else {
            self.finished = true;
            TickOutcome::SessionComplete
        }
    }

    /// Manual advance: marks the current step done and moves on, finishing
    /// the session after the last step.
    pub fn next_step(&mut self) -> TickOutcome {
        self.completed_steps.insert(self.current);
        if self.current + 1 < self.steps.len() {
            self.enter_step(self.current + 1);
            TickOutcome::Advanced(self.current)
        } else {
            self.timer_running = false;
            self.finished = true;
            TickOutcome::SessionComplete
        }
    }

    pub fn previous_step(&mut self) {
        if self.current > 0 {
            let target = self.current - 1;
            self.jump_to(target);
        }
    }

    /// Jumps to a step. Jumping backwards re-opens everything from the
    /// target up to (not including) the step we left.
    pub fn jump_to(&mut self, index: usize) {
        if index >= self.steps.len() || index == self.current {
            return;
        }
        if index < self.current {
            for i in index..self.current {
                self.completed_steps.remove(&i);
            }
        }
        self.enter_step(index);
    }

    fn enter_step(&mut self, index: usize) {
        self.current = index;
        self.timer_seconds = self.adjusted_duration();
        // The first step waits for an explicit start; later steps roll.
        self.timer_running = index > 0;
    }
}

/// `mm:ss` for the countdown display.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
