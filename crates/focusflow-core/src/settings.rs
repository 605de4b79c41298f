//! User preferences record.
//!
//! Stored as a JSON key-value record alongside the session list and the
//! statistics snapshot. Every field carries a serde default so a record
//! written by an older build still loads.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Color palette identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Blue,
    Purple,
    Green,
    Orange,
}

/// Ambient sound identifiers, `None` meaning silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbientSound {
    None,
    Rain,
    Forest,
    Ocean,
    Whitenoise,
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Target focus minutes per day.
    #[serde(default = "default_daily_goal")]
    pub daily_goal_min: u64,
    #[serde(default = "default_true")]
    pub sound_enabled: bool,
    #[serde(default = "default_true")]
    pub notifications: bool,
    #[serde(default = "default_theme")]
    pub theme: Theme,
    #[serde(default = "default_ambient")]
    pub ambient_sound: AmbientSound,
    #[serde(default = "default_true")]
    pub auto_break_reminder: bool,
    /// Minutes between break reminders: 15-60 in steps of 5.
    #[serde(default = "default_reminder_interval")]
    pub break_reminder_interval_min: u64,
}

fn default_daily_goal() -> u64 {
    crate::stats::DEFAULT_DAILY_GOAL_MIN
}
fn default_true() -> bool {
    true
}
fn default_theme() -> Theme {
    Theme::Blue
}
fn default_ambient() -> AmbientSound {
    AmbientSound::None
}
fn default_reminder_interval() -> u64 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_goal_min: default_daily_goal(),
            sound_enabled: true,
            notifications: true,
            theme: default_theme(),
            ambient_sound: default_ambient(),
            auto_break_reminder: true,
            break_reminder_interval_min: default_reminder_interval(),
        }
    }
}

impl Settings {
    /// Get a settings value as a string by field name.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        match json.get(key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a settings value by field name, parsing `value` against the
    /// field's current type. Returns the updated record only if it is
    /// valid as a whole.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut json = serde_json::to_value(&*self)
            .map_err(|e| SettingsError::ParseFailed(e.to_string()))?;
        let obj = json
            .as_object_mut()
            .ok_or_else(|| SettingsError::ParseFailed("settings is not an object".into()))?;
        let existing = obj
            .get(key)
            .ok_or_else(|| SettingsError::UnknownKey(key.to_string()))?;

        let new_value = match existing {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(value.parse::<bool>().map_err(
                |_| SettingsError::InvalidValue {
                    key: key.to_string(),
                    message: format!("cannot parse '{value}' as bool"),
                },
            )?),
            serde_json::Value::Number(_) => {
                let n = value
                    .parse::<u64>()
                    .map_err(|_| SettingsError::InvalidValue {
                        key: key.to_string(),
                        message: format!("cannot parse '{value}' as number"),
                    })?;
                serde_json::Value::Number(n.into())
            }
            _ => serde_json::Value::String(value.into()),
        };

        obj.insert(key.to_string(), new_value);
        let updated: Settings =
            serde_json::from_value(json).map_err(|e| SettingsError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Range checks the record as a whole.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.daily_goal_min == 0 {
            return Err(SettingsError::InvalidValue {
                key: "daily_goal_min".into(),
                message: "must be positive".into(),
            });
        }
        let interval = self.break_reminder_interval_min;
        if !(15..=60).contains(&interval) || interval % 5 != 0 {
            return Err(SettingsError::InvalidValue {
                key: "break_reminder_interval_min".into(),
                message: "must be between 15 and 60 in steps of 5".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_roundtrip() {
        let s = Settings::default();
        let json = serde_json::to_string(&s).unwrap();
        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, s);
        assert_eq!(parsed.daily_goal_min, 120);
        assert_eq!(parsed.break_reminder_interval_min, 30);
    }

    #[test]
    fn empty_record_fills_defaults() {
        let parsed: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn get_returns_string_for_all_types() {
        let s = Settings::default();
        assert_eq!(s.get("sound_enabled").as_deref(), Some("true"));
        assert_eq!(s.get("daily_goal_min").as_deref(), Some("120"));
        assert_eq!(s.get("theme").as_deref(), Some("blue"));
        assert!(s.get("missing_key").is_none());
    }

    #[test]
    fn set_updates_bool_number_and_enum() {
        let mut s = Settings::default();
        s.set("sound_enabled", "false").unwrap();
        assert!(!s.sound_enabled);
        s.set("daily_goal_min", "90").unwrap();
        assert_eq!(s.daily_goal_min, 90);
        s.set("theme", "purple").unwrap();
        assert_eq!(s.theme, Theme::Purple);
        s.set("ambient_sound", "rain").unwrap();
        assert_eq!(s.ambient_sound, AmbientSound::Rain);
    }

    #[test]
    fn set_rejects_unknown_key_and_bad_values() {
        let mut s = Settings::default();
        assert!(matches!(
            s.set("volume", "50"),
            Err(SettingsError::UnknownKey(_))
        ));
        assert!(s.set("theme", "chartreuse").is_err());
        assert!(s.set("sound_enabled", "maybe").is_err());
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn reminder_interval_range_enforced() {
        let mut s = Settings::default();
        assert!(s.set("break_reminder_interval_min", "10").is_err());
        assert!(s.set("break_reminder_interval_min", "62").is_err());
        assert!(s.set("break_reminder_interval_min", "33").is_err());
        s.set("break_reminder_interval_min", "45").unwrap();
        assert_eq!(s.break_reminder_interval_min, 45);
    }

    #[test]
    fn zero_goal_rejected() {
        let mut s = Settings::default();
        assert!(s.set("daily_goal_min", "0").is_err());
        assert_eq!(s.daily_goal_min, 120);
    }
}
