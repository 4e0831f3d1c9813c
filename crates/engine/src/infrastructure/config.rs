//! Engine configuration from environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use classquest_domain::LocalCalendar;

pub const DATA_DIR_VAR: &str = "CLASSQUEST_DATA_DIR";
pub const UTC_OFFSET_VAR: &str = "CLASSQUEST_UTC_OFFSET_MINUTES";
pub const DAILY_XP_VAR: &str = "CLASSQUEST_DAILY_XP";
pub const DAILY_GOLD_VAR: &str = "CLASSQUEST_DAILY_GOLD";
pub const ATTENDANCE_XP_VAR: &str = "CLASSQUEST_ATTENDANCE_XP";

const DEFAULT_DATA_DIR: &str = "./classquest-data";

/// Fixed reward amounts for check-ins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardSettings {
    pub daily_xp: i32,
    pub daily_gold: i32,
    pub attendance_xp: i32,
}

impl Default for RewardSettings {
    fn default() -> Self {
        Self {
            daily_xp: 10,
            daily_gold: 5,
            attendance_xp: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding one JSON file per collection.
    pub data_dir: PathBuf,
    /// Classroom timezone for day boundaries and attendance dates.
    pub calendar: LocalCalendar,
    pub rewards: RewardSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            calendar: LocalCalendar::utc(),
            rewards: RewardSettings::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset or unparseable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let data_dir = lookup(DATA_DIR_VAR)
            .map(|dir| dir.trim().to_string())
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let offset_minutes: i32 = parse_or(&lookup, UTC_OFFSET_VAR, 0);
        let calendar = match LocalCalendar::from_offset_minutes(offset_minutes) {
            Ok(calendar) => calendar,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring {UTC_OFFSET_VAR}, using UTC");
                defaults.calendar
            }
        };

        let reward_defaults = defaults.rewards;
        let rewards = RewardSettings {
            daily_xp: parse_or(&lookup, DAILY_XP_VAR, reward_defaults.daily_xp),
            daily_gold: parse_or(&lookup, DAILY_GOLD_VAR, reward_defaults.daily_gold),
            attendance_xp: parse_or(&lookup, ATTENDANCE_XP_VAR, reward_defaults.attendance_xp),
        };

        Self {
            data_dir,
            calendar,
            rewards,
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(
                key,
                value = %raw,
                default = %default,
                "Invalid config value, using default"
            );
            default
        }
    }
}
