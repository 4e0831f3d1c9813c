//! Proposed partial updates to a hero, fed into the progression resolver.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entities::{ActiveQuest, Hero};
use crate::error::DomainError;

/// The stats a teacher can adjust directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatKind {
    Xp,
    Gold,
    Hp,
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StatKind::Xp => "XP",
            StatKind::Gold => "GOLD",
            StatKind::Hp => "HP",
        };
        f.pad(label)
    }
}

impl FromStr for StatKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xp" => Ok(StatKind::Xp),
            "gold" => Ok(StatKind::Gold),
            "hp" => Ok(StatKind::Hp),
            other => Err(DomainError::parse(format!("Unknown stat: {other}"))),
        }
    }
}

/// A subset of hero fields to overwrite.
///
/// Values are absolute targets (e.g. "gold becomes 150"), not deltas; the
/// resolver compares them against the current hero to find gains and losses.
/// Fields left as `None` are untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatUpdate {
    hp: Option<i32>,
    xp: Option<i32>,
    gold: Option<i32>,
    /// `Some(None)` clears the active quest.
    active_quest: Option<Option<ActiveQuest>>,
    last_daily_claim: Option<DateTime<Utc>>,
    last_attendance: Option<NaiveDate>,
}

impl StatUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Propose `current + amount` for a single stat.
    pub fn adjust(hero: &Hero, kind: StatKind, amount: i32) -> Self {
        match kind {
            StatKind::Xp => Self::new().with_xp(hero.xp().saturating_add(amount)),
            StatKind::Gold => Self::new().with_gold(hero.gold().saturating_add(amount)),
            StatKind::Hp => Self::new().with_hp(hero.hp().saturating_add(amount)),
        }
    }

    /// Propose xp and gold gains together (quest and daily rewards).
    pub fn reward(hero: &Hero, xp: i32, gold: i32) -> Self {
        Self::new()
            .with_xp(hero.xp().saturating_add(xp))
            .with_gold(hero.gold().saturating_add(gold))
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Builder-style methods
    // ──────────────────────────────────────────────────────────────────────────

    pub fn with_hp(mut self, hp: i32) -> Self {
        self.hp = Some(hp);
        self
    }

    pub fn with_xp(mut self, xp: i32) -> Self {
        self.xp = Some(xp);
        self
    }

    pub fn with_gold(mut self, gold: i32) -> Self {
        self.gold = Some(gold);
        self
    }

    pub fn with_active_quest(mut self, quest: ActiveQuest) -> Self {
        self.active_quest = Some(Some(quest));
        self
    }

    pub fn clearing_active_quest(mut self) -> Self {
        self.active_quest = Some(None);
        self
    }

    pub fn with_last_daily_claim(mut self, day_start: DateTime<Utc>) -> Self {
        self.last_daily_claim = Some(day_start);
        self
    }

    pub fn with_last_attendance(mut self, date: NaiveDate) -> Self {
        self.last_attendance = Some(date);
        self
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Read accessors
    // ──────────────────────────────────────────────────────────────────────────

    pub fn hp(&self) -> Option<i32> {
        self.hp
    }

    pub fn xp(&self) -> Option<i32> {
        self.xp
    }

    pub fn gold(&self) -> Option<i32> {
        self.gold
    }

    pub fn active_quest(&self) -> Option<Option<&ActiveQuest>> {
        self.active_quest.as_ref().map(Option::as_ref)
    }

    pub fn last_daily_claim(&self) -> Option<DateTime<Utc>> {
        self.last_daily_claim
    }

    pub fn last_attendance(&self) -> Option<NaiveDate> {
        self.last_attendance
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
