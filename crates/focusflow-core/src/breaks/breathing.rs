//! Guided breathing exercise.
//!
//! A three-phase cycle driven by one-second ticks:
//!
//! ```text
//! Inhale (4s) -> Hold (4s) -> Exhale (6s) -> Inhale ...
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
}

impl BreathPhase {
    pub fn duration_secs(self) -> u64 {
        match self {
            BreathPhase::Inhale => 4,
            BreathPhase::Hold => 4,
            BreathPhase::Exhale => 6,
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Breathe In",
            BreathPhase::Hold => "Hold",
            BreathPhase::Exhale => "Breathe Out",
        }
    }

    fn next(self) -> BreathPhase {
        match self {
            BreathPhase::Inhale => BreathPhase::Hold,
            BreathPhase::Hold => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Inhale,
        }
    }
}

/// Phase state machine for the breathing exercise. The caller supplies the
/// one-second tick source and tears it down when the exercise stops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreathingExercise {
    phase: BreathPhase,
    seconds_in_phase: u64,
    cycles_completed: u32,
}

impl Default for BreathingExercise {
    fn default() -> Self {
        Self::new()
    }
}

impl BreathingExercise {
    pub fn new() -> Self {
        Self {
            phase: BreathPhase::Inhale,
            seconds_in_phase: 0,
            cycles_completed: 0,
        }
    }

    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    pub fn seconds_in_phase(&self) -> u64 {
        self.seconds_in_phase
    }

    /// Full inhale-hold-exhale cycles finished so far.
    pub fn cycles_completed(&self) -> u32 {
        self.cycles_completed
    }

    /// Advance one second. Returns the new phase when a transition happens.
    pub fn tick(&mut self) -> Option<BreathPhase> {
        self.seconds_in_phase += 1;
        if self.seconds_in_phase < self.phase.duration_secs() {
            return None;
        }
        if self.phase == BreathPhase::Exhale {
            self.cycles_completed += 1;
        }
        self.phase = self.phase.next();
        self.seconds_in_phase = 0;
        Some(self.phase)
    }
}
