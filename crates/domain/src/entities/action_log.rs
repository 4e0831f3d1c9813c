//! The bounded, newest-first action log.

use serde::{Deserialize, Serialize};

use super::LogEntry;
use crate::ids::HeroId;

/// Entries kept after each append; older entries are dropped.
pub const ACTION_LOG_CAPACITY: usize = 50;

/// Newest-first history of log entries, capped at [`ACTION_LOG_CAPACITY`].
///
/// Persisted as a plain JSON array. Loading an over-long array keeps only
/// the newest entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LogEntry>", into = "Vec<LogEntry>")]
pub struct ActionLog {
    entries: Vec<LogEntry>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `entry`, evicting the oldest entries beyond capacity.
    pub fn record(&mut self, entry: LogEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(ACTION_LOG_CAPACITY);
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn for_hero<'a>(&'a self, hero_id: &'a HeroId) -> impl Iterator<Item = &'a LogEntry> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.student_id() == hero_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<LogEntry>> for ActionLog {
    fn from(mut entries: Vec<LogEntry>) -> Self {
        entries.truncate(ACTION_LOG_CAPACITY);
        Self { entries }
    }
}

impl From<ActionLog> for Vec<LogEntry> {
    fn from(log: ActionLog) -> Self {
        log.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{LogKind, NewLogEntry};
    use crate::ids::LogEntryId;
    use crate::test_support::hero;
    use crate::value_objects::HeroClass;
    use chrono::{Duration, TimeZone, Utc};

    fn entry(hero_class: HeroClass, n: i64) -> LogEntry {
        let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(n);
        NewLogEntry::for_hero(&hero(hero_class), LogKind::Xp, n as i32, format!("entry {n}"))
            .stamp(LogEntryId::new(), at)
    }

    #[test]
    fn newest_entry_comes_first() {
        let mut log = ActionLog::new();
        log.record(entry(HeroClass::Mage, 1));
        log.record(entry(HeroClass::Mage, 2));
        assert_eq!(log.entries()[0].reason(), "entry 2");
        assert_eq!(log.entries()[1].reason(), "entry 1");
    }

    #[test]
    fn never_exceeds_capacity_and_evicts_oldest() {
        let mut log = ActionLog::new();
        for n in 0..(ACTION_LOG_CAPACITY as i64 + 7) {
            log.record(entry(HeroClass::Mage, n));
            assert!(log.len() <= ACTION_LOG_CAPACITY);
        }
        assert_eq!(log.len(), ACTION_LOG_CAPACITY);
        assert_eq!(log.entries()[0].reason(), "entry 56");
        // entries 0..=6 were evicted
        assert_eq!(log.entries().last().unwrap().reason(), "entry 7");
    }

    #[test]
    fn filters_by_hero() {
        let mut log = ActionLog::new();
        log.record(entry(HeroClass::Mage, 1));
        let warrior_entry = entry(HeroClass::Warrior, 2);
        let warrior_id = warrior_entry.student_id().clone();
        log.record(warrior_entry);

        let hits: Vec<_> = log.for_hero(&warrior_id).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].reason(), "entry 2");
    }

    #[test]
    fn loading_truncates_oversized_history() {
        let entries: Vec<_> = (0..60).map(|n| entry(HeroClass::Healer, n)).collect();
        let json = serde_json::to_string(&entries).unwrap();
        let log: ActionLog = serde_json::from_str(&json).unwrap();
        assert_eq!(log.len(), ACTION_LOG_CAPACITY);
        assert_eq!(log.entries()[0].reason(), "entry 0");
    }
}
