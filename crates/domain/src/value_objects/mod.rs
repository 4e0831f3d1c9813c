//! Value objects - Immutable objects defined by their attributes

mod behavior_preset;
mod classroom;
mod hero_class;
mod names;
mod stat_update;

pub use behavior_preset::{find_preset, BehaviorPreset, BEHAVIOR_PRESETS};
pub use classroom::{Classroom, Grade, Room, MAX_GRADE, MAX_ROOM, MIN_GRADE, MIN_ROOM};
pub use hero_class::{ClassPassives, HeroClass, LevelUpHeal};
pub use names::{HeroName, ItemName};
pub use stat_update::{StatKind, StatUpdate};
