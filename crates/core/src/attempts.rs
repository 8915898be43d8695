//! Bounded repair loop around an unreliable generator.
//!
//! The loop owns the attempt counter and the missing-path set carried from one
//! attempt to the next. It never calls the agent itself; the shell asks for the
//! next prompt, runs the agent, and feeds the result back through
//! [`RepairLoop::observe`].

use crate::prompt::{build_prompt, build_repair_prompt};
use crate::required::missing_paths;
use crate::types::{GenerationRequest, GenerationResult};

/// Attempts made before giving up.
pub const MAX_ATTEMPTS: usize = 3;

/// Outcome of feeding one agent result into the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Every required path is present.
    Satisfied(GenerationResult),
    /// Paths are missing and attempts remain.
    Retry { missing: Vec<String> },
    /// Paths are still missing after the last attempt.
    Exhausted { missing: Vec<String> },
}

#[derive(Debug, Clone)]
pub struct RepairLoop {
    request: GenerationRequest,
    max_attempts: usize,
    attempt: usize,
    missing: Vec<String>,
    finished: bool,
}

impl RepairLoop {
    pub fn new(request: GenerationRequest) -> Self {
        Self::with_max_attempts(request, MAX_ATTEMPTS)
    }

    /// `max_attempts` is clamped to at least one.
    pub fn with_max_attempts(request: GenerationRequest, max_attempts: usize) -> Self {
        Self {
            request,
            max_attempts: max_attempts.max(1),
            attempt: 0,
            missing: Vec::new(),
            finished: false,
        }
    }

    /// Number of attempts started so far.
    pub fn attempt(&self) -> usize {
        self.attempt
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Missing paths recorded by the last observed attempt.
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    /// Start the next attempt and return its number and prompt.
    ///
    /// Attempt 1 gets the full initial prompt; every later attempt gets a
    /// repair prompt built from the previous missing set. Returns `None` once
    /// the loop reached a terminal state or ran out of attempts.
    pub fn next_prompt(&mut self) -> Option<(usize, String)> {
        if self.finished || self.attempt >= self.max_attempts {
            return None;
        }
        self.attempt += 1;

        let prompt = if self.attempt == 1 {
            build_prompt(&self.request)
        } else {
            build_repair_prompt(&self.request, &self.missing)
        };

        Some((self.attempt, prompt))
    }

    /// Validate the result of the current attempt and decide what happens next.
    pub fn observe(&mut self, result: GenerationResult) -> Step {
        self.missing = missing_paths(&self.request.package, &result.paths());

        if self.missing.is_empty() {
            self.finished = true;
            return Step::Satisfied(result);
        }

        if self.attempt >= self.max_attempts {
            self.finished = true;
            Step::Exhausted {
                missing: self.missing.clone(),
            }
        } else {
            Step::Retry {
                missing: self.missing.clone(),
            }
        }
    }
}
