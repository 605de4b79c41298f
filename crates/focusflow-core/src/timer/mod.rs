mod engine;
pub mod presets;

pub use engine::{CountdownTimer, TimerState};
