//! Domain entities - Core business objects with identity

mod action_log;
mod hero;
mod log_entry;
mod quest;
mod shop_item;

pub use action_log::{ActionLog, ACTION_LOG_CAPACITY};
pub use hero::{Hero, HeroProfile, HeroStats, STARTING_GOLD, STARTING_LEVEL};
pub use log_entry::{LogEntry, LogKind, NewLogEntry};
pub use quest::{ActiveQuest, Quest, QuestStatus};
pub use shop_item::{ShopItem, DEFAULT_ITEM_ICON};
