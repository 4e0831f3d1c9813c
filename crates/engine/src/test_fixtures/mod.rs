//! Common test helpers for use case tests.
//!
//! Stateful mock repositories keep whatever was saved last, so a test can run
//! a use case and then inspect the stored roster and log.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use classquest_domain::{
    ActionLog, Grade, Hero, HeroClass, HeroId, HeroName, HeroProfile, HeroStats, ItemName, Quest,
    QuestId, Room, ShopItem, ShopItemId,
};

use crate::infrastructure::clock::{FixedClock, SequentialRandom};
use crate::infrastructure::ports::{
    ClockPort, MockActionLogRepo, MockQuestCatalogRepo, MockRosterRepo, MockShopCatalogRepo,
    RepoError,
};
use crate::repositories::{Chronicle, Roster};

/// Monday 2026-10-19, 09:00 UTC.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap()
}

pub fn clock_at(at: DateTime<Utc>) -> Arc<dyn ClockPort> {
    Arc::new(FixedClock(at))
}

pub fn hero_id(id: &str) -> HeroId {
    HeroId::new(id).unwrap()
}

pub fn profile(name: &str, hero_class: HeroClass) -> HeroProfile {
    HeroProfile {
        name: HeroName::new(name).unwrap(),
        hero_class,
        grade: Grade::new(1).unwrap(),
        room: Room::new(1).unwrap(),
        avatar: String::new(),
    }
}

/// Freshly registered hero.
pub fn hero(id: &str, hero_class: HeroClass) -> Hero {
    Hero::register(hero_id(id), profile(&format!("Hero {id}"), hero_class))
}

/// Hero at arbitrary stats.
pub fn hero_with(id: &str, hero_class: HeroClass, stats: HeroStats) -> Hero {
    Hero::from_storage(hero_id(id), profile(&format!("Hero {id}"), hero_class), stats)
}

pub fn quest(id: &str, reward_xp: i32, reward_gold: i32, duration_minutes: u32) -> Quest {
    Quest {
        id: QuestId::new(id).unwrap(),
        title: format!("Quest {id}"),
        reward_xp,
        reward_gold,
        description: String::new(),
        duration_minutes,
        icon: String::new(),
    }
}

pub fn shop_item(id: &str, name: &str, price: i32) -> ShopItem {
    ShopItem::new(
        ShopItemId::new(id).unwrap(),
        ItemName::new(name).unwrap(),
        price,
    )
    .unwrap()
}

// =============================================================================
// Stateful mocks
// =============================================================================

pub type Shared<T> = Arc<Mutex<T>>;

pub fn roster_with(heroes: Vec<Hero>) -> (Arc<Roster>, Shared<Vec<Hero>>) {
    let state = Arc::new(Mutex::new(heroes));
    let mut repo = MockRosterRepo::new();
    let load_state = state.clone();
    repo.expect_load()
        .returning(move || Ok(load_state.lock().unwrap().clone()));
    let save_state = state.clone();
    repo.expect_save().returning(move |heroes| {
        *save_state.lock().unwrap() = heroes.to_vec();
        Ok(())
    });
    (Arc::new(Roster::new(Arc::new(repo))), state)
}

/// Roster whose load fails.
pub fn broken_roster() -> Arc<Roster> {
    let mut repo = MockRosterRepo::new();
    repo.expect_load()
        .returning(|| Err(RepoError::storage("get", "disk unavailable")));
    repo.expect_save().never();
    Arc::new(Roster::new(Arc::new(repo)))
}

pub fn chronicle() -> (Arc<Chronicle>, Shared<ActionLog>) {
    chronicle_at(now())
}

pub fn chronicle_at(at: DateTime<Utc>) -> (Arc<Chronicle>, Shared<ActionLog>) {
    let state = Arc::new(Mutex::new(ActionLog::new()));
    let mut repo = MockActionLogRepo::new();
    let load_state = state.clone();
    repo.expect_load()
        .returning(move || Ok(load_state.lock().unwrap().clone()));
    let save_state = state.clone();
    repo.expect_save().returning(move |log| {
        *save_state.lock().unwrap() = log.clone();
        Ok(())
    });
    let chronicle = Chronicle::new(
        Arc::new(repo),
        clock_at(at),
        Arc::new(SequentialRandom::new()),
    );
    (Arc::new(chronicle), state)
}

pub fn quest_catalog(quests: Vec<Quest>) -> MockQuestCatalogRepo {
    let mut repo = MockQuestCatalogRepo::new();
    repo.expect_load().returning(move || Ok(quests.clone()));
    repo
}

pub fn shop_catalog(items: Vec<ShopItem>) -> (MockShopCatalogRepo, Shared<Vec<ShopItem>>) {
    let state = Arc::new(Mutex::new(items));
    let mut repo = MockShopCatalogRepo::new();
    let load_state = state.clone();
    repo.expect_load()
        .returning(move || Ok(load_state.lock().unwrap().clone()));
    let save_state = state.clone();
    repo.expect_save().returning(move |items| {
        *save_state.lock().unwrap() = items.to_vec();
        Ok(())
    });
    (repo, state)
}

pub fn stored_hero(state: &Shared<Vec<Hero>>, id: &str) -> Hero {
    state
        .lock()
        .unwrap()
        .iter()
        .find(|h| h.id().as_str() == id)
        .cloned()
        .unwrap_or_else(|| panic!("hero {id} not in stored roster"))
}
