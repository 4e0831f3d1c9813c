//! Quest templates and a hero's running quest.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::QuestId;

/// A timed classroom task from the quest catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: QuestId,
    pub title: String,
    pub reward_xp: i32,
    pub reward_gold: i32,
    #[serde(default)]
    pub description: String,
    pub duration_minutes: u32,
    #[serde(default)]
    pub icon: String,
}

impl Quest {
    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.duration_minutes))
    }
}

/// The quest a hero is currently working on.
///
/// Completion is never stored: it is derived by comparing `end_time` to the
/// clock whenever someone asks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveQuest {
    quest_id: QuestId,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    #[serde(default)]
    claimed: bool,
}

impl ActiveQuest {
    /// Start `quest` at `now`.
    pub fn begin(quest: &Quest, now: DateTime<Utc>) -> Self {
        Self {
            quest_id: quest.id.clone(),
            start_time: now,
            end_time: now + quest.duration(),
            claimed: false,
        }
    }

    pub fn quest_id(&self) -> &QuestId {
        &self.quest_id
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    pub fn is_complete(&self, now: DateTime<Utc>) -> bool {
        now >= self.end_time
    }

    /// Time left until the reward can be claimed (zero once complete).
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        if self.is_complete(now) {
            Duration::zero()
        } else {
            self.end_time - now
        }
    }

    /// Elapsed share of the quest duration, 0..=100.
    pub fn progress_percent(&self, now: DateTime<Utc>) -> u8 {
        let total = (self.end_time - self.start_time).num_milliseconds();
        if total <= 0 || self.is_complete(now) {
            return 100;
        }
        let elapsed = (now - self.start_time).num_milliseconds().clamp(0, total);
        // elapsed <= total, so the quotient fits in 0..=100
        u8::try_from(elapsed * 100 / total).unwrap_or(100)
    }

    pub fn status(&self, now: DateTime<Utc>) -> QuestStatus {
        if self.is_complete(now) {
            QuestStatus::Completable
        } else {
            QuestStatus::InProgress {
                remaining: self.remaining(now),
            }
        }
    }
}

/// Read-time view of a hero's quest slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestStatus {
    /// No quest running; a new one may be started.
    Idle,
    InProgress { remaining: Duration },
    /// The duration has elapsed and the reward is waiting.
    Completable,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reading_quest() -> Quest {
        Quest {
            id: QuestId::new("q2").unwrap(),
            title: "Silent Reader".to_string(),
            reward_xp: 40,
            reward_gold: 15,
            description: String::new(),
            duration_minutes: 20,
            icon: "fa-book-open".to_string(),
        }
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap()
    }

    #[test]
    fn end_time_is_start_plus_duration() {
        let active = ActiveQuest::begin(&reading_quest(), start());
        assert_eq!(active.end_time() - active.start_time(), Duration::minutes(20));
        assert!(!active.is_claimed());
    }

    #[test]
    fn completes_exactly_at_end_time() {
        let active = ActiveQuest::begin(&reading_quest(), start());
        let end = start() + Duration::minutes(20);
        assert!(!active.is_complete(end - Duration::milliseconds(1)));
        assert!(active.is_complete(end));
        assert_eq!(active.status(end), QuestStatus::Completable);
    }

    #[test]
    fn status_reports_remaining_time() {
        let active = ActiveQuest::begin(&reading_quest(), start());
        let now = start() + Duration::minutes(5);
        assert_eq!(
            active.status(now),
            QuestStatus::InProgress {
                remaining: Duration::minutes(15)
            }
        );
        // Asking again does not change anything
        assert_eq!(active.status(now), active.status(now));
    }

    #[test]
    fn progress_is_clamped() {
        let active = ActiveQuest::begin(&reading_quest(), start());
        assert_eq!(active.progress_percent(start() - Duration::minutes(1)), 0);
        assert_eq!(active.progress_percent(start() + Duration::minutes(10)), 50);
        assert_eq!(active.progress_percent(start() + Duration::hours(2)), 100);
    }

    #[test]
    fn zero_minute_quest_is_immediately_complete() {
        let mut quest = reading_quest();
        quest.duration_minutes = 0;
        let active = ActiveQuest::begin(&quest, start());
        assert!(active.is_complete(start()));
        assert_eq!(active.progress_percent(start()), 100);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let active = ActiveQuest::begin(&reading_quest(), start());
        let json = serde_json::to_value(&active).unwrap();
        assert_eq!(json["questId"], "q2");
        assert!(json.get("endTime").is_some());
        assert_eq!(json["claimed"], false);
    }
}
