//! The session store.
//!
//! Owns the append-only session list, the derived statistics snapshot, and
//! the settings record. There are no ambient globals: every consumer gets a
//! reference to one `WellnessStore`, reads through its accessors, and
//! mutates through `add_session` / `update_daily_goal`.
//!
//! Both the session list and the snapshot are persisted on every mutation
//! and rehydrated at open. Absent or malformed records degrade to defaults;
//! nothing here escalates to a process abort.

use std::path::Path;

use chrono::Utc;

use crate::error::{CoreError, Result, ValidationError};
use crate::events::Event;
use crate::session::{Session, SessionType};
use crate::settings::Settings;
use crate::stats::{local_today, WellnessStats};
use crate::storage::{Database, SESSIONS_KEY, SETTINGS_KEY, STATS_KEY};
use crate::transfer::{ExportBundle, ImportBundle};

pub struct WellnessStore {
    db: Database,
    sessions: Vec<Session>,
    stats: WellnessStats,
    settings: Settings,
}

impl WellnessStore {
    /// Open the store backed by the default database location.
    pub fn open() -> Result<Self> {
        Self::from_db(Database::open()?)
    }

    /// Open the store backed by a database at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self> {
        Self::from_db(Database::open_at(path)?)
    }

    /// In-memory store for tests.
    #[cfg(test)]
    pub(crate) fn open_memory() -> Result<Self> {
        Self::from_db(Database::open_memory()?)
    }

    fn from_db(db: Database) -> Result<Self> {
        let sessions: Vec<Session> = db.load_record(SESSIONS_KEY)?.unwrap_or_default();
        let stats: WellnessStats = db.load_record(STATS_KEY)?.unwrap_or_default();
        let settings: Settings = db.load_record(SETTINGS_KEY)?.unwrap_or_default();
        Ok(Self {
            db,
            sessions,
            stats,
            settings,
        })
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn stats(&self) -> &WellnessStats {
        &self.stats
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The underlying record store, for auxiliary records such as the
    /// persisted countdown timer.
    pub fn db(&self) -> &Database {
        &self.db
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Record a completed session and recompute the statistics snapshot.
    ///
    /// Persists both the updated session list and the new snapshot.
    ///
    /// # Errors
    /// Rejects a zero duration as a validation error; storage failures
    /// propagate.
    pub fn add_session(&mut self, session_type: SessionType, duration_min: u64) -> Result<Event> {
        if duration_min == 0 {
            return Err(ValidationError::InvalidValue {
                field: "duration_min".into(),
                message: "must be positive".into(),
            }
            .into());
        }

        let session = Session::new(session_type, duration_min);
        self.sessions.push(session.clone());
        self.stats =
            WellnessStats::compute(&self.sessions, self.stats.daily_goal_min, local_today());

        self.db.save_record(SESSIONS_KEY, &self.sessions)?;
        self.db.save_record(STATS_KEY, &self.stats)?;

        log::debug!(
            "recorded {} session of {} min ({} total)",
            session.session_type.label(),
            session.duration_min,
            self.sessions.len()
        );
        Ok(Event::SessionRecorded {
            session,
            at: Utc::now(),
        })
    }

    /// Replace the daily goal in the snapshot and persist it.
    ///
    /// Touches nothing else: session data is untouched and no other
    /// statistics field is recomputed.
    pub fn update_daily_goal(&mut self, daily_goal_min: u64) -> Result<Event> {
        if daily_goal_min == 0 {
            return Err(ValidationError::InvalidValue {
                field: "daily_goal_min".into(),
                message: "must be positive".into(),
            }
            .into());
        }
        self.stats.daily_goal_min = daily_goal_min;
        self.db.save_record(STATS_KEY, &self.stats)?;
        Ok(Event::GoalUpdated {
            daily_goal_min,
            at: Utc::now(),
        })
    }

    /// Update the settings record and persist it.
    pub fn update_settings(&mut self, settings: Settings) -> Result<()> {
        settings.validate().map_err(CoreError::Settings)?;
        self.settings = settings;
        self.db.save_record(SETTINGS_KEY, &self.settings)?;
        Ok(())
    }

    // ── Import / export ──────────────────────────────────────────────

    /// The full current value of all three records.
    pub fn export(&self) -> ExportBundle {
        ExportBundle {
            sessions: self.sessions.clone(),
            stats: self.stats.clone(),
            settings: self.settings.clone(),
        }
    }

    /// Overwrite whichever records the bundle carries.
    ///
    /// The bundle is already fully parsed, so there is no partial-write
    /// path; a document that fails to parse never reaches this method.
    pub fn import(&mut self, bundle: ImportBundle) -> Result<()> {
        if let Some(sessions) = bundle.sessions {
            self.db.save_record(SESSIONS_KEY, &sessions)?;
            self.sessions = sessions;
        }
        if let Some(stats) = bundle.stats {
            self.db.save_record(STATS_KEY, &stats)?;
            self.stats = stats;
        }
        if let Some(settings) = bundle.settings {
            self.db.save_record(SETTINGS_KEY, &settings)?;
            self.settings = settings;
        }
        Ok(())
    }
}
