//! Roster queries: filtering, class insights and the leaderboard.

use serde::{Deserialize, Serialize};

use crate::entities::Hero;
use crate::value_objects::{Grade, Room};

/// Number of heroes shown on the leaderboard.
pub const LEADERBOARD_SIZE: usize = 5;

/// Narrow a roster by classroom and name. Empty filters match everyone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterFilter {
    pub grade: Option<Grade>,
    pub room: Option<Room>,
    /// Case-insensitive substring of the hero name.
    pub search: Option<String>,
}

impl RosterFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_grade(mut self, grade: Grade) -> Self {
        self.grade = Some(grade);
        self
    }

    pub fn with_room(mut self, room: Room) -> Self {
        self.room = Some(room);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = (!search.trim().is_empty()).then_some(search);
        self
    }

    pub fn matches(&self, hero: &Hero) -> bool {
        if self.grade.is_some_and(|grade| hero.grade() != grade) {
            return false;
        }
        if self.room.is_some_and(|room| hero.room() != room) {
            return false;
        }
        match &self.search {
            Some(needle) => hero
                .name()
                .as_str()
                .to_lowercase()
                .contains(&needle.trim().to_lowercase()),
            None => true,
        }
    }

    pub fn apply<'a>(&'a self, heroes: &'a [Hero]) -> impl Iterator<Item = &'a Hero> + 'a {
        heroes.iter().filter(move |hero| self.matches(hero))
    }
}

/// Summary numbers for a group of heroes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInsights {
    pub hero_count: usize,
    pub average_level: f64,
    pub total_gold: i64,
    pub fainted_count: usize,
    /// Name of the highest-level hero, ties broken by xp.
    pub top_hero: Option<String>,
}

impl ClassInsights {
    pub fn from_heroes<'a>(heroes: impl IntoIterator<Item = &'a Hero>) -> Self {
        let heroes: Vec<&Hero> = heroes.into_iter().collect();
        let hero_count = heroes.len();
        let level_sum: u64 = heroes.iter().map(|h| u64::from(h.level())).sum();
        let average_level = if hero_count == 0 {
            0.0
        } else {
            level_sum as f64 / hero_count as f64
        };

        Self {
            hero_count,
            average_level,
            total_gold: heroes.iter().map(|h| i64::from(h.gold())).sum(),
            fainted_count: heroes.iter().filter(|h| h.is_fainted()).count(),
            top_hero: ranked(heroes).first().map(|h| h.name().to_string()),
        }
    }
}

/// The top [`LEADERBOARD_SIZE`] heroes by level, then xp.
pub fn leaderboard<'a>(heroes: impl IntoIterator<Item = &'a Hero>) -> Vec<&'a Hero> {
    let mut ranked = ranked(heroes.into_iter().collect());
    ranked.truncate(LEADERBOARD_SIZE);
    ranked
}

/// Stable sort: equal heroes keep roster order.
fn ranked(mut heroes: Vec<&Hero>) -> Vec<&Hero> {
    heroes.sort_by(|a, b| b.level().cmp(&a.level()).then(b.xp().cmp(&a.xp())));
    heroes
}
