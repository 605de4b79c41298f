//! Break-activity prompts and guided exercises.
//!
//! Like the countdown timer, the exercises here are caller-ticked state
//! machines with no internal threads; dropping one stops it.

mod activities;
mod breathing;
mod eyes;

pub use activities::{find, random, BreakActivity, ACTIVITIES};
pub use breathing::{BreathPhase, BreathingExercise};
pub use eyes::EyeExercise;
