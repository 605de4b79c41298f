//! # Focusflow Core Library
//!
//! This library provides the core logic for Focusflow, a local-first
//! focus/wellness tracker. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary; any GUI is a thin
//! layer over the same core library.
//!
//! ## Architecture
//!
//! - **Session Store**: An owned store holding the append-only session list
//!   and the derived statistics snapshot. Every mutation recomputes the
//!   snapshot in full and persists both records.
//! - **Statistics Engine**: Day-bucketed aggregation over the session list,
//!   including streak tracking and a trailing-week breakdown.
//! - **Timers & Exercises**: Wall-clock-based state machines that require
//!   the caller to periodically invoke `tick()` -- no internal threads.
//! - **Storage**: SQLite-backed key-value records (JSON values), one record
//!   per persisted document.
//!
//! ## Key Components
//!
//! - [`WellnessStore`]: Session list + statistics persistence
//! - [`WellnessStats`]: The derived statistics snapshot
//! - [`CountdownTimer`]: Countdown state machine for focus/break sessions
//! - [`Settings`]: User preferences record

pub mod badges;
pub mod breaks;
pub mod error;
pub mod events;
pub mod session;
pub mod settings;
pub mod stats;
pub mod storage;
pub mod store;
pub mod timer;
pub mod transfer;

pub use badges::Badge;
pub use error::{CoreError, DatabaseError, SettingsError, TransferError, ValidationError};
pub use events::Event;
pub use session::{Session, SessionType};
pub use settings::{AmbientSound, Settings, Theme};
pub use stats::{DayFocus, WellnessStats};
pub use storage::Database;
pub use store::WellnessStore;
pub use timer::{CountdownTimer, TimerState};
pub use transfer::{ExportBundle, ImportBundle};
