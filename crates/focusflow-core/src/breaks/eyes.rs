//! Guided eye-rest routine (20-20-20 rule and friends).

use serde::{Deserialize, Serialize};

const STEPS: [&str; 6] = [
    "Look at something 20 feet away for 20 seconds",
    "Blink slowly 10 times",
    "Look up, down, left, right (hold each for 2 seconds)",
    "Make circles with your eyes - 5 clockwise, 5 counter-clockwise",
    "Focus on your finger, then something far away (repeat 5 times)",
    "Close your eyes and rest for 10 seconds",
];

/// Step machine over the eye-rest instructions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EyeExercise {
    step: usize,
}

impl EyeExercise {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps() -> &'static [&'static str] {
        &STEPS
    }

    /// Zero-based index of the current step.
    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        STEPS.len()
    }

    pub fn is_complete(&self) -> bool {
        self.step >= STEPS.len()
    }

    /// The current instruction, or `None` once the routine is done.
    pub fn current(&self) -> Option<&'static str> {
        STEPS.get(self.step).copied()
    }

    /// Move to the next step; returns its instruction, or `None` when the
    /// routine completes.
    pub fn advance(&mut self) -> Option<&'static str> {
        if self.is_complete() {
            return None;
        }
        self.step += 1;
        self.current()
    }
}
