//! ClassQuest domain: heroes, progression rules, quests and the action log.
//!
//! Pure types and rules only. Time and ids are passed in by the caller.

pub mod common;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod insights;
pub mod progression;
pub mod value_objects;

pub use common::LocalCalendar;
pub use entities::{
    ActionLog, ActiveQuest, Hero, HeroProfile, HeroStats, LogEntry, LogKind, NewLogEntry, Quest,
    QuestStatus, ShopItem, ACTION_LOG_CAPACITY, DEFAULT_ITEM_ICON, STARTING_GOLD, STARTING_LEVEL,
};
pub use error::DomainError;
pub use events::{AttendanceOutcome, DailyRewardOutcome, QuestClaimOutcome, StatChange};
pub use ids::{HeroId, LogEntryId, QuestId, ShopItemId};
pub use insights::{leaderboard, ClassInsights, RosterFilter, LEADERBOARD_SIZE};
pub use progression::{levels_gained, resolve, xp_to_next_level, MAX_HP_PER_LEVEL, XP_PER_LEVEL};
pub use value_objects::{
    find_preset, BehaviorPreset, Classroom, Grade, HeroClass, HeroName, ItemName, Room, StatKind,
    StatUpdate, BEHAVIOR_PRESETS,
};
