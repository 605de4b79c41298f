//! Duration presets per session type.

use crate::session::SessionType;

/// Offered durations in minutes, first entry is the default.
pub fn durations(session_type: SessionType) -> &'static [u64] {
    match session_type {
        SessionType::Focus => &[25, 15, 45, 60],
        SessionType::ShortBreak => &[5],
        SessionType::LongBreak => &[15],
    }
}

/// Default duration in minutes for the given session type.
pub fn default_minutes(session_type: SessionType) -> u64 {
    durations(session_type)[0]
}
