//! Hero entity - a student on the roster with RPG-style stats
//!
//! # Invariants
//!
//! - `0 <= hp <= max_hp`
//! - `0 <= xp < XP_PER_LEVEL` once resolved
//! - `gold >= 0`
//! - `max_hp` never decreases
//!
//! Stats are only changed through [`crate::progression::resolve`]. The action
//! methods below build a [`StatUpdate`] and hand it to the resolver; they
//! return an outcome from [`crate::events`] describing what happened.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::quest::{ActiveQuest, Quest, QuestStatus};
use super::shop_item::ShopItem;
use crate::error::DomainError;
use crate::events::{AttendanceOutcome, DailyRewardOutcome, QuestClaimOutcome, StatChange};
use crate::ids::HeroId;
use crate::progression::resolve;
use crate::value_objects::{Classroom, Grade, HeroClass, HeroName, Room, StatKind, StatUpdate};

pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_GOLD: i32 = 50;

/// Identity fields a teacher (or the student at sign-up) chooses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroProfile {
    pub name: HeroName,
    pub hero_class: HeroClass,
    pub grade: Grade,
    pub room: Room,
    pub avatar: String,
}

/// Raw stat values, used when hydrating seed data or stored heroes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroStats {
    pub level: u32,
    pub hp: i32,
    pub max_hp: i32,
    pub xp: i32,
    pub gold: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub(crate) id: HeroId,
    pub(crate) name: HeroName,
    pub(crate) hero_class: HeroClass,
    pub(crate) grade: Grade,
    pub(crate) room: Room,
    pub(crate) level: u32,
    pub(crate) hp: i32,
    pub(crate) max_hp: i32,
    pub(crate) xp: i32,
    pub(crate) gold: i32,
    #[serde(default)]
    pub(crate) avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) active_quest: Option<ActiveQuest>,
    /// Start of the local day the daily reward was last claimed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) last_daily_claim: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) last_attendance: Option<NaiveDate>,
}

impl Hero {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// A freshly registered level 1 hero with class-based hp.
    pub fn register(id: HeroId, profile: HeroProfile) -> Self {
        let max_hp = profile.hero_class.base_max_hp();
        Self::from_storage(
            id,
            profile,
            HeroStats {
                level: STARTING_LEVEL,
                hp: max_hp,
                max_hp,
                xp: 0,
                gold: STARTING_GOLD,
            },
        )
    }

    /// Reconstruct a hero from stored values (seed rosters, imports).
    pub fn from_storage(id: HeroId, profile: HeroProfile, stats: HeroStats) -> Self {
        Self {
            id,
            name: profile.name,
            hero_class: profile.hero_class,
            grade: profile.grade,
            room: profile.room,
            level: stats.level,
            hp: stats.hp,
            max_hp: stats.max_hp,
            xp: stats.xp,
            gold: stats.gold,
            avatar: profile.avatar,
            active_quest: None,
            last_daily_claim: None,
            last_attendance: None,
        }
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    pub fn id(&self) -> &HeroId {
        &self.id
    }

    pub fn name(&self) -> &HeroName {
        &self.name
    }

    pub fn hero_class(&self) -> HeroClass {
        self.hero_class
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn room(&self) -> Room {
        self.room
    }

    pub fn classroom(&self) -> Classroom {
        Classroom {
            grade: self.grade,
            room: self.room,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    pub fn xp(&self) -> i32 {
        self.xp
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    pub fn active_quest(&self) -> Option<&ActiveQuest> {
        self.active_quest.as_ref()
    }

    pub fn last_daily_claim(&self) -> Option<DateTime<Utc>> {
        self.last_daily_claim
    }

    pub fn last_attendance(&self) -> Option<NaiveDate> {
        self.last_attendance
    }

    pub fn stats(&self) -> HeroStats {
        HeroStats {
            level: self.level,
            hp: self.hp,
            max_hp: self.max_hp,
            xp: self.xp,
            gold: self.gold,
        }
    }

    pub fn profile(&self) -> HeroProfile {
        HeroProfile {
            name: self.name.clone(),
            hero_class: self.hero_class,
            grade: self.grade,
            room: self.room,
            avatar: self.avatar.clone(),
        }
    }

    // =========================================================================
    // Derived state
    // =========================================================================

    /// Out of hp. Fainted heroes stay on the roster and keep earning.
    pub fn is_fainted(&self) -> bool {
        self.hp <= 0
    }

    /// Blocks starting another quest.
    pub fn has_unclaimed_quest(&self) -> bool {
        self.active_quest.as_ref().is_some_and(|q| !q.is_claimed())
    }

    pub fn quest_status(&self, now: DateTime<Utc>) -> QuestStatus {
        match &self.active_quest {
            Some(quest) if !quest.is_claimed() => quest.status(now),
            _ => QuestStatus::Idle,
        }
    }

    pub fn attended_on(&self, date: NaiveDate) -> bool {
        self.last_attendance == Some(date)
    }

    /// Whether the daily reward was claimed for the day starting at `day_start`.
    pub fn claimed_daily_for(&self, day_start: DateTime<Utc>) -> bool {
        self.last_daily_claim == Some(day_start)
    }

    // =========================================================================
    // Actions (every stat change goes through the resolver)
    // =========================================================================

    /// Resolve `update` against this hero and replace it with the result.
    pub fn apply(&mut self, update: &StatUpdate) -> StatChange {
        let before = self.stats();
        *self = resolve(self, update);
        StatChange {
            before,
            after: self.stats(),
        }
    }

    /// Bring stats loaded from outside back within bounds: banked XP becomes
    /// levels, hp is held to `0..=max_hp`, and negative XP and gold become 0.
    pub fn normalize(&mut self) -> StatChange {
        self.apply(&StatUpdate::new())
    }

    /// Teacher action: add a signed `amount` to one stat.
    pub fn adjust_stat(&mut self, kind: StatKind, amount: i32) -> StatChange {
        let update = StatUpdate::adjust(self, kind, amount);
        self.apply(&update)
    }

    /// Student daily check-in, at most once per local day.
    ///
    /// `day_start` is the instant of the current day's local midnight.
    pub fn claim_daily_reward(
        &mut self,
        day_start: DateTime<Utc>,
        xp: i32,
        gold: i32,
    ) -> DailyRewardOutcome {
        if self.claimed_daily_for(day_start) {
            return DailyRewardOutcome::AlreadyClaimed;
        }
        let update = StatUpdate::reward(self, xp, gold).with_last_daily_claim(day_start);
        let change = self.apply(&update);
        DailyRewardOutcome::Claimed { xp, gold, change }
    }

    /// Teacher attendance check-in, at most once per calendar date.
    pub fn mark_attendance(&mut self, date: NaiveDate, xp: i32) -> AttendanceOutcome {
        if self.attended_on(date) {
            return AttendanceOutcome::AlreadyMarked { date };
        }
        let update = StatUpdate::adjust(self, StatKind::Xp, xp).with_last_attendance(date);
        let change = self.apply(&update);
        AttendanceOutcome::Marked { date, xp, change }
    }

    /// # Errors
    ///
    /// Returns `DomainError::InvalidStateTransition` while another quest is
    /// still unclaimed.
    pub fn start_quest(
        &mut self,
        quest: &Quest,
        now: DateTime<Utc>,
    ) -> Result<ActiveQuest, DomainError> {
        if let Some(running) = self.active_quest.as_ref().filter(|q| !q.is_claimed()) {
            return Err(DomainError::invalid_state_transition(format!(
                "{} is already on quest {}",
                self.name,
                running.quest_id()
            )));
        }
        let active = ActiveQuest::begin(quest, now);
        self.apply(&StatUpdate::new().with_active_quest(active.clone()));
        Ok(active)
    }

    /// Collect the reward for `quest` and clear the quest slot.
    ///
    /// Does nothing unless `quest` is this hero's unclaimed quest and its
    /// duration has elapsed at `now`.
    pub fn claim_quest_reward(&mut self, quest: &Quest, now: DateTime<Utc>) -> QuestClaimOutcome {
        let Some(active) = self
            .active_quest
            .as_ref()
            .filter(|q| !q.is_claimed() && q.quest_id() == &quest.id)
        else {
            return QuestClaimOutcome::NotStarted;
        };
        if !active.is_complete(now) {
            return QuestClaimOutcome::NotFinished {
                remaining: active.remaining(now),
            };
        }

        let update =
            StatUpdate::reward(self, quest.reward_xp, quest.reward_gold).clearing_active_quest();
        let change = self.apply(&update);
        QuestClaimOutcome::Claimed {
            quest_id: quest.id.clone(),
            xp: quest.reward_xp,
            gold: quest.reward_gold,
            change,
        }
    }

    pub fn can_afford(&self, price: i32) -> bool {
        self.gold >= price
    }

    /// # Errors
    ///
    /// Returns `DomainError::Constraint` when the hero cannot afford `item`.
    pub fn purchase(&mut self, item: &ShopItem) -> Result<StatChange, DomainError> {
        if !self.can_afford(item.price()) {
            return Err(DomainError::constraint(format!(
                "{} needs {} gold for {} but has {}",
                self.name,
                item.price(),
                item.name(),
                self.gold
            )));
        }
        let update = StatUpdate::new().with_gold(self.gold - item.price());
        Ok(self.apply(&update))
    }

    // =========================================================================
    // Identity edits (administrative, never touch stats)
    // =========================================================================

    pub fn update_profile(&mut self, profile: HeroProfile) {
        self.name = profile.name;
        self.hero_class = profile.hero_class;
        self.grade = profile.grade;
        self.room = profile.room;
        self.avatar = profile.avatar;
    }

    /// Test helper to place a hero at arbitrary stats.
    #[cfg(test)]
    pub(crate) fn with_stats(mut self, level: u32, hp: i32, max_hp: i32, xp: i32, gold: i32) -> Self {
        self.level = level;
        self.hp = hp;
        self.max_hp = max_hp;
        self.xp = xp;
        self.gold = gold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{QuestId, ShopItemId};
    use crate::test_support::{hero, profile};
    use crate::value_objects::ItemName;
    use chrono::{Duration, TimeZone};

    fn explore_quest() -> Quest {
        Quest {
            id: QuestId::new("q5").unwrap(),
            title: "Explore".to_string(),
            reward_xp: 20,
            reward_gold: 5,
            description: String::new(),
            duration_minutes: 5,
            icon: String::new(),
        }
    }

    fn monday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).unwrap()
    }

    #[test]
    fn registration_uses_class_base_hp() {
        let warrior = hero(HeroClass::Warrior);
        assert_eq!(warrior.level(), 1);
        assert_eq!(warrior.max_hp(), 120);
        assert_eq!(warrior.hp(), 120);
        assert_eq!(warrior.xp(), 0);
        assert_eq!(warrior.gold(), STARTING_GOLD);

        let mage = hero(HeroClass::Mage);
        assert_eq!(mage.max_hp(), 70);
        assert_eq!(hero(HeroClass::Healer).max_hp(), 90);
    }

    #[test]
    fn update_profile_keeps_stats() {
        let mut h = hero(HeroClass::Warrior).with_stats(4, 33, 150, 12, 999);
        let mut new_profile = profile(HeroClass::Healer);
        new_profile.name = HeroName::new("Renamed").unwrap();
        h.update_profile(new_profile);

        assert_eq!(h.name().as_str(), "Renamed");
        assert_eq!(h.hero_class(), HeroClass::Healer);
        assert_eq!(h.stats().gold, 999);
        assert_eq!(h.stats().max_hp, 150);
    }

    #[test]
    fn quest_status_is_idle_without_quest() {
        let now = Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).unwrap();
        assert_eq!(hero(HeroClass::Mage).quest_status(now), QuestStatus::Idle);
        assert!(!hero(HeroClass::Mage).has_unclaimed_quest());
    }

    #[test]
    fn quest_status_follows_active_quest() {
        let now = monday();
        let mut h = hero(HeroClass::Mage);
        h.active_quest = Some(ActiveQuest::begin(&explore_quest(), now));

        assert!(h.has_unclaimed_quest());
        assert!(matches!(h.quest_status(now), QuestStatus::InProgress { .. }));
        assert_eq!(
            h.quest_status(now + Duration::minutes(5)),
            QuestStatus::Completable
        );
    }

    #[test]
    fn serde_uses_camel_case_and_omits_empty_optionals() {
        let json = serde_json::to_value(hero(HeroClass::Healer)).unwrap();
        assert_eq!(json["heroClass"], "HEALER");
        assert_eq!(json["maxHp"], 90);
        assert!(json.get("activeQuest").is_none());
        assert!(json.get("lastAttendance").is_none());

        let back: Hero = serde_json::from_value(json).unwrap();
        assert_eq!(back, hero(HeroClass::Healer));
    }

    #[test]
    fn attendance_date_serializes_as_calendar_string() {
        let mut h = hero(HeroClass::Warrior);
        h.last_attendance = NaiveDate::from_ymd_opt(2026, 10, 19);
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json["lastAttendance"], "2026-10-19");
    }

    #[test]
    fn daily_reward_is_granted_once_per_day() {
        let day_start = Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap();
        let mut h = hero(HeroClass::Warrior);

        let first = h.claim_daily_reward(day_start, 10, 5);
        assert!(matches!(first, DailyRewardOutcome::Claimed { xp: 10, gold: 5, .. }));
        assert_eq!(h.xp(), 10);
        assert_eq!(h.gold(), 55);
        assert_eq!(h.last_daily_claim(), Some(day_start));

        let second = h.claim_daily_reward(day_start, 10, 5);
        assert_eq!(second, DailyRewardOutcome::AlreadyClaimed);
        assert_eq!(h.xp(), 10);
        assert_eq!(h.gold(), 55);

        let next_day = day_start + Duration::days(1);
        assert!(matches!(
            h.claim_daily_reward(next_day, 10, 5),
            DailyRewardOutcome::Claimed { .. }
        ));
        assert_eq!(h.xp(), 20);
    }

    #[test]
    fn daily_reward_gold_gets_mage_bonus() {
        let day_start = Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap();
        let mut mage = hero(HeroClass::Mage);
        mage.claim_daily_reward(day_start, 10, 5);
        assert_eq!(mage.gold(), 56);
    }

    #[test]
    fn attendance_is_marked_once_per_date() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let mut h = hero(HeroClass::Healer).with_stats(1, 40, 90, 90, 50);

        let outcome = h.mark_attendance(date, 20);
        assert!(outcome.is_marked());
        // 90 + 20 crosses the threshold and the healer restores fully
        assert_eq!(h.level(), 2);
        assert_eq!(h.xp(), 10);
        assert_eq!(h.hp(), 100);
        assert_eq!(h.last_attendance(), Some(date));

        assert_eq!(
            h.mark_attendance(date, 20),
            AttendanceOutcome::AlreadyMarked { date }
        );
        assert_eq!(h.xp(), 10);
    }

    #[test]
    fn cannot_start_a_second_quest() {
        let mut h = hero(HeroClass::Mage);
        h.start_quest(&explore_quest(), monday()).unwrap();
        let err = h.start_quest(&explore_quest(), monday()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidStateTransition(_)));
    }

    #[test]
    fn normalize_repairs_out_of_bounds_stats() {
        let mut h = hero(HeroClass::Mage).with_stats(1, 500, 70, 250, -5);
        let change = h.normalize();
        assert_eq!(change.levels_gained(), 2);
        assert_eq!((h.level(), h.hp(), h.max_hp()), (3, 90, 90));
        assert_eq!((h.xp(), h.gold()), (50, 0));

        let again = h.normalize();
        assert_eq!(again.before, again.after);
    }

    #[test]
    fn started_quest_is_the_one_recorded() {
        let mut h = hero(HeroClass::Healer);
        let active = h.start_quest(&explore_quest(), monday()).unwrap();
        assert_eq!(h.active_quest(), Some(&active));
        assert!(!active.is_claimed());
    }

    #[test]
    fn claiming_early_or_without_quest_changes_nothing() {
        let quest = explore_quest();
        let mut h = hero(HeroClass::Warrior);
        assert_eq!(
            h.claim_quest_reward(&quest, monday()),
            QuestClaimOutcome::NotStarted
        );

        h.start_quest(&quest, monday()).unwrap();
        let before = h.clone();
        let early = h.claim_quest_reward(&quest, monday() + Duration::minutes(2));
        assert_eq!(
            early,
            QuestClaimOutcome::NotFinished {
                remaining: Duration::minutes(3)
            }
        );
        assert_eq!(h, before);
    }

    #[test]
    fn claiming_a_finished_quest_rewards_and_clears() {
        let quest = explore_quest();
        let mut h = hero(HeroClass::Warrior);
        h.start_quest(&quest, monday()).unwrap();

        let outcome = h.claim_quest_reward(&quest, monday() + Duration::minutes(5));
        assert!(matches!(outcome, QuestClaimOutcome::Claimed { xp: 20, gold: 5, .. }));
        assert_eq!(h.xp(), 20);
        assert_eq!(h.gold(), 55);
        assert!(h.active_quest().is_none());
        assert_eq!(h.quest_status(monday()), QuestStatus::Idle);

        // a second claim is a no-op
        assert_eq!(
            h.claim_quest_reward(&quest, monday() + Duration::hours(1)),
            QuestClaimOutcome::NotStarted
        );
        assert_eq!(h.xp(), 20);
    }

    #[test]
    fn purchase_spends_gold_without_mage_bonus() {
        let item = ShopItem::new(
            ShopItemId::new("3").unwrap(),
            ItemName::new("Class DJ").unwrap(),
            80,
        )
        .unwrap();
        let mut mage = hero(HeroClass::Mage).with_stats(1, 70, 70, 0, 100);

        let change = mage.purchase(&item).unwrap();
        assert_eq!(change.gold_delta(), -80);
        assert_eq!(mage.gold(), 20);

        let err = mage.purchase(&item).unwrap_err();
        assert!(matches!(err, DomainError::Constraint(_)));
        assert_eq!(mage.gold(), 20);
    }

    #[test]
    fn adjust_stat_reports_level_ups() {
        let mut h = hero(HeroClass::Warrior).with_stats(1, 100, 120, 95, 50);
        let change = h.adjust_stat(StatKind::Xp, 25);
        assert_eq!(change.levels_gained(), 1);
        assert_eq!(h.max_hp(), 130);
        assert_eq!(h.hp(), 120);
    }
}
