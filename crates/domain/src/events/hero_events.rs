//! Hero-related domain events
//!
//! These types describe what happened when a hero action ran, including the
//! idempotent no-op cases, so callers can log and report without re-deriving
//! the rules.

use chrono::{Duration, NaiveDate};

use crate::entities::HeroStats;
use crate::ids::QuestId;

/// Before/after snapshot of one resolver pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatChange {
    pub before: HeroStats,
    pub after: HeroStats,
}

impl StatChange {
    pub fn levels_gained(&self) -> u32 {
        self.after.level.saturating_sub(self.before.level)
    }

    pub fn leveled_up(&self) -> bool {
        self.levels_gained() > 0
    }

    pub fn hp_delta(&self) -> i32 {
        self.after.hp.saturating_sub(self.before.hp)
    }

    pub fn gold_delta(&self) -> i32 {
        self.after.gold.saturating_sub(self.before.gold)
    }

    /// Hero dropped to zero hp in this change.
    pub fn fainted(&self) -> bool {
        self.before.hp > 0 && self.after.hp <= 0
    }
}

/// Outcome of a student's daily check-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DailyRewardOutcome {
    /// Reward granted for today
    Claimed { xp: i32, gold: i32, change: StatChange },
    /// Already claimed since the last local midnight, nothing changed
    AlreadyClaimed,
}

/// Outcome of marking a hero present
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceOutcome {
    Marked {
        date: NaiveDate,
        xp: i32,
        change: StatChange,
    },
    /// Already marked for this date, nothing changed
    AlreadyMarked { date: NaiveDate },
}

impl AttendanceOutcome {
    pub fn is_marked(&self) -> bool {
        matches!(self, Self::Marked { .. })
    }
}

/// Outcome of claiming a quest reward
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestClaimOutcome {
    Claimed {
        quest_id: QuestId,
        xp: i32,
        gold: i32,
        change: StatChange,
    },
    /// No unclaimed quest to collect
    NotStarted,
    /// Quest still running
    NotFinished { remaining: Duration },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(level: u32, hp: i32, gold: i32) -> HeroStats {
        HeroStats {
            level,
            hp,
            max_hp: 120,
            xp: 0,
            gold,
        }
    }

    #[test]
    fn stat_change_deltas() {
        let change = StatChange {
            before: stats(1, 100, 50),
            after: stats(3, 80, 20),
        };
        assert_eq!(change.levels_gained(), 2);
        assert!(change.leveled_up());
        assert_eq!(change.hp_delta(), -20);
        assert_eq!(change.gold_delta(), -30);
        assert!(!change.fainted());
    }

    #[test]
    fn fainting_needs_a_transition_to_zero() {
        let knocked_out = StatChange {
            before: stats(1, 10, 50),
            after: stats(1, 0, 50),
        };
        assert!(knocked_out.fainted());

        let still_down = StatChange {
            before: stats(1, 0, 50),
            after: stats(1, 0, 60),
        };
        assert!(!still_down.fainted());
    }
}
