//! Stat mutation resolver.
//!
//! Every change to a hero's stats goes through [`resolve`]: it merges a
//! proposed [`StatUpdate`] into the hero, applies class passives, resolves
//! level-ups and clamps the result. It is a pure function and has no failure
//! mode; callers check preconditions (enough gold, no running quest, ...)
//! before building the update.
//!
//! Order of application:
//!
//! 1. merge the proposed fields
//! 2. gold gain bonus (gains only, rounded up)
//! 3. level-up loop (one iteration per `XP_PER_LEVEL` crossed)
//! 4. hp loss mitigation, measured from the hero's hp before the update
//! 5. clamp `hp` to `0..=max_hp`, `xp` and `gold` to `>= 0`
//!
//! When step 4 fires it replaces whatever hp step 3 produced.

use crate::entities::Hero;
use crate::value_objects::{LevelUpHeal, StatUpdate};

/// XP needed to gain one level. Resolved xp always ends below this.
pub const XP_PER_LEVEL: i32 = 100;

/// Max hp added per level gained.
pub const MAX_HP_PER_LEVEL: i32 = 10;

/// Apply `update` to `current` and return the resolved hero.
///
/// Passives are looked up from `current`'s class; class never changes here.
pub fn resolve(current: &Hero, update: &StatUpdate) -> Hero {
    let passives = current.hero_class.passives();
    let mut next = merge(current, update);

    if let (Some(proposed), Some(percent)) = (update.gold(), passives.gold_gain_percent) {
        if proposed > current.gold {
            let gain = i64::from(proposed) - i64::from(current.gold);
            next.gold = saturate(i64::from(current.gold) + amplify_gain(gain, percent));
        }
    }

    while next.xp >= XP_PER_LEVEL {
        next.xp -= XP_PER_LEVEL;
        next.level = next.level.saturating_add(1);
        next.max_hp = next.max_hp.saturating_add(MAX_HP_PER_LEVEL);
        next.hp = match passives.level_up_heal {
            LevelUpHeal::Full => next.max_hp,
            LevelUpHeal::Flat(amount) => next.max_hp.min(next.hp.saturating_add(amount)),
        };
    }

    if let (Some(proposed), Some(percent)) = (update.hp(), passives.damage_taken_percent) {
        if proposed < current.hp {
            let damage = i64::from(current.hp) - i64::from(proposed);
            next.hp = saturate(i64::from(current.hp) - reduce_loss(damage, percent));
        }
    }

    next.hp = next.max_hp.min(next.hp.max(0));
    next.xp = next.xp.max(0);
    next.gold = next.gold.max(0);
    next
}

/// Levels gained between two snapshots of the same hero.
pub fn levels_gained(before: &Hero, after: &Hero) -> u32 {
    after.level.saturating_sub(before.level)
}

/// XP still missing before the next level.
pub fn xp_to_next_level(hero: &Hero) -> i32 {
    (XP_PER_LEVEL - hero.xp).max(0)
}

fn merge(current: &Hero, update: &StatUpdate) -> Hero {
    let mut next = current.clone();
    if let Some(hp) = update.hp() {
        next.hp = hp;
    }
    if let Some(xp) = update.xp() {
        next.xp = xp;
    }
    if let Some(gold) = update.gold() {
        next.gold = gold;
    }
    if let Some(quest) = update.active_quest() {
        next.active_quest = quest.cloned();
    }
    if let Some(day_start) = update.last_daily_claim() {
        next.last_daily_claim = Some(day_start);
    }
    if let Some(date) = update.last_attendance() {
        next.last_attendance = Some(date);
    }
    next
}

/// `ceil(gain * percent / 100)` for a positive gain.
fn amplify_gain(gain: i64, percent: i64) -> i64 {
    (gain * percent + 99) / 100
}

/// `floor(damage * percent / 100)` for positive damage.
fn reduce_loss(damage: i64, percent: i64) -> i64 {
    damage * percent / 100
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
