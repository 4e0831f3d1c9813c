//! Hero classes and their passive skills.
//!
//! Passives are plain data: the resolver looks them up by class and applies
//! them uniformly, so adding a class means adding a row, not a code path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The class a hero picks at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HeroClass {
    Warrior,
    Mage,
    Healer,
}

/// What happens to hp on each level gained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelUpHeal {
    /// Restore hp to the new maximum.
    Full,
    /// Heal a fixed amount, capped at the new maximum.
    Flat(i32),
}

/// Passive modifiers for one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassPassives {
    /// Max hp (and starting hp) at registration.
    pub base_max_hp: i32,
    /// Percentage of raw hp loss actually taken, rounded down. `None` = full damage.
    pub damage_taken_percent: Option<i64>,
    /// Percentage applied to gold gains, rounded up. `None` = no bonus.
    pub gold_gain_percent: Option<i64>,
    pub level_up_heal: LevelUpHeal,
}

const WARRIOR: ClassPassives = ClassPassives {
    base_max_hp: 120,
    damage_taken_percent: Some(80),
    gold_gain_percent: None,
    level_up_heal: LevelUpHeal::Flat(20),
};

const MAGE: ClassPassives = ClassPassives {
    base_max_hp: 70,
    damage_taken_percent: None,
    gold_gain_percent: Some(120),
    level_up_heal: LevelUpHeal::Flat(20),
};

const HEALER: ClassPassives = ClassPassives {
    base_max_hp: 90,
    damage_taken_percent: None,
    gold_gain_percent: None,
    level_up_heal: LevelUpHeal::Full,
};

impl HeroClass {
    pub const ALL: [HeroClass; 3] = [HeroClass::Warrior, HeroClass::Mage, HeroClass::Healer];

    pub const fn passives(self) -> ClassPassives {
        match self {
            HeroClass::Warrior => WARRIOR,
            HeroClass::Mage => MAGE,
            HeroClass::Healer => HEALER,
        }
    }

    pub const fn base_max_hp(self) -> i32 {
        self.passives().base_max_hp
    }

    /// One-line description of the class passive, for listings.
    pub fn passive_summary(self) -> &'static str {
        match self {
            HeroClass::Warrior => "Iron Body: takes 20% less hp loss",
            HeroClass::Mage => "Arcane Greed: gains 20% more gold",
            HeroClass::Healer => "Renewal: fully restores hp on level up",
        }
    }
}

impl fmt::Display for HeroClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeroClass::Warrior => "Warrior",
            HeroClass::Mage => "Mage",
            HeroClass::Healer => "Healer",
        };
        f.pad(name)
    }
}

impl FromStr for HeroClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warrior" => Ok(HeroClass::Warrior),
            "mage" => Ok(HeroClass::Mage),
            "healer" => Ok(HeroClass::Healer),
            other => Err(DomainError::parse(format!("Unknown hero class: {other}"))),
        }
    }
}
