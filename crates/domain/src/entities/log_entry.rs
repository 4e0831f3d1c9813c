//! Action log entries - the audit trail of every reward and penalty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Hero;
use crate::ids::{HeroId, LogEntryId};
use crate::value_objects::StatKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogKind {
    Xp,
    Gold,
    Hp,
    Item,
    Attendance,
}

impl From<StatKind> for LogKind {
    fn from(kind: StatKind) -> Self {
        match kind {
            StatKind::Xp => LogKind::Xp,
            StatKind::Gold => LogKind::Gold,
            StatKind::Hp => LogKind::Hp,
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogKind::Xp => "XP",
            LogKind::Gold => "GOLD",
            LogKind::Hp => "HP",
            LogKind::Item => "ITEM",
            LogKind::Attendance => "ATTENDANCE",
        };
        f.pad(label)
    }
}

/// A log entry before it has been assigned an id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLogEntry {
    pub student_id: HeroId,
    pub student_name: String,
    pub kind: LogKind,
    pub amount: i32,
    pub reason: String,
}

impl NewLogEntry {
    /// Snapshot the hero's id and current name.
    pub fn for_hero(hero: &Hero, kind: LogKind, amount: i32, reason: impl Into<String>) -> Self {
        Self {
            student_id: hero.id().clone(),
            student_name: hero.name().to_string(),
            kind,
            amount,
            reason: reason.into(),
        }
    }

    pub fn stamp(self, id: LogEntryId, timestamp: DateTime<Utc>) -> LogEntry {
        LogEntry {
            id,
            student_id: self.student_id,
            student_name: self.student_name,
            kind: self.kind,
            amount: self.amount,
            reason: self.reason,
            timestamp,
        }
    }
}

/// Immutable record of one change. `student_name` is a point-in-time copy and
/// is not updated when the hero is renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    id: LogEntryId,
    student_id: HeroId,
    student_name: String,
    #[serde(rename = "type")]
    kind: LogKind,
    amount: i32,
    reason: String,
    timestamp: DateTime<Utc>,
}

impl LogEntry {
    pub fn id(&self) -> LogEntryId {
        self.id
    }

    pub fn student_id(&self) -> &HeroId {
        &self.student_id
    }

    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    pub fn kind(&self) -> LogKind {
        self.kind
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::hero;
    use crate::value_objects::HeroClass;
    use chrono::TimeZone;
    use uuid::Uuid;

    #[test]
    fn for_hero_snapshots_identity() {
        let h = hero(HeroClass::Warrior);
        let entry = NewLogEntry::for_hero(&h, LogKind::Hp, -15, "Late to class");
        assert_eq!(&entry.student_id, h.id());
        assert_eq!(entry.student_name, h.name().as_str());
    }

    #[test]
    fn stamped_entry_serializes_type_field() {
        let h = hero(HeroClass::Mage);
        let at = Utc.with_ymd_and_hms(2026, 2, 1, 10, 0, 0).unwrap();
        let entry = NewLogEntry::for_hero(&h, LogKind::Attendance, 20, "Present")
            .stamp(LogEntryId::from_uuid(Uuid::nil()), at);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "ATTENDANCE");
        assert_eq!(json["studentId"], h.id().as_str());
        assert_eq!(json["amount"], 20);
    }

    #[test]
    fn stat_kinds_map_to_log_kinds() {
        assert_eq!(LogKind::from(StatKind::Gold), LogKind::Gold);
        assert_eq!(LogKind::from(StatKind::Hp).to_string(), "HP");
    }
}
