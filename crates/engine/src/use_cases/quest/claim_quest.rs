//! Claim quest reward use case.
//!
//! Claiming before the quest is finished, or without a running quest, is a
//! no-op outcome rather than an error.

use std::sync::Arc;

use classquest_domain::{HeroId, LogKind, NewLogEntry, QuestClaimOutcome};

use super::error::QuestError;
use super::start_quest::find_quest;
use crate::infrastructure::ports::{ClockPort, QuestCatalogRepo};
use crate::repositories::{hero_mut, Chronicle, Roster};

pub struct ClaimQuest {
    roster: Arc<Roster>,
    quests: Arc<dyn QuestCatalogRepo>,
    chronicle: Arc<Chronicle>,
    clock: Arc<dyn ClockPort>,
}

impl ClaimQuest {
    pub fn new(
        roster: Arc<Roster>,
        quests: Arc<dyn QuestCatalogRepo>,
        chronicle: Arc<Chronicle>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            roster,
            quests,
            chronicle,
            clock,
        }
    }

    pub async fn execute(&self, hero_id: &HeroId) -> Result<QuestClaimOutcome, QuestError> {
        let mut heroes = self.roster.load().await?;
        let hero = hero_mut(&mut heroes, hero_id)
            .ok_or_else(|| QuestError::HeroNotFound(hero_id.clone()))?;

        let Some(active) = hero.active_quest().filter(|q| !q.is_claimed()) else {
            tracing::debug!(hero_id = %hero_id, "No quest to claim");
            return Ok(QuestClaimOutcome::NotStarted);
        };
        let quest = find_quest(self.quests.as_ref(), active.quest_id()).await?;

        let outcome = hero.claim_quest_reward(&quest, self.clock.now());
        if let QuestClaimOutcome::Claimed { xp, .. } = &outcome {
            let entry = NewLogEntry::for_hero(
                hero,
                LogKind::Xp,
                *xp,
                format!("Quest complete: {}", quest.title),
            );
            self.roster.save(&heroes).await?;
            self.chronicle.append(entry).await?;
            tracing::info!(hero_id = %hero_id, quest_id = %quest.id, "Quest reward claimed");
        } else {
            tracing::debug!(hero_id = %hero_id, quest_id = %quest.id, "Quest not finished yet");
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{
        chronicle, clock_at, hero, hero_id, now, quest, quest_catalog, roster_with, stored_hero,
        Shared,
    };
    use chrono::{DateTime, Duration, Utc};
    use classquest_domain::{ActionLog, Hero, HeroClass, Quest};

    fn explore() -> Quest {
        quest("q5", 150, 30, 60)
    }

    fn hero_on_quest(started: DateTime<Utc>) -> Hero {
        let mut hero = hero("101", HeroClass::Mage);
        hero.start_quest(&explore(), started).unwrap();
        hero
    }

    fn use_case(
        heroes: Vec<Hero>,
        at: DateTime<Utc>,
    ) -> (ClaimQuest, Shared<Vec<Hero>>, Shared<ActionLog>) {
        let (roster, stored) = roster_with(heroes);
        let (chronicle, log) = chronicle();
        let claim = ClaimQuest::new(
            roster,
            Arc::new(quest_catalog(vec![explore()])),
            chronicle,
            clock_at(at),
        );
        (claim, stored, log)
    }

    #[tokio::test]
    async fn finished_quest_pays_out_and_clears_slot() {
        let started = now() - Duration::minutes(61);
        let (claim, stored, log) = use_case(vec![hero_on_quest(started)], now());

        let outcome = claim.execute(&hero_id("101")).await.unwrap();

        let QuestClaimOutcome::Claimed { xp, gold, change, .. } = outcome else {
            panic!("expected a claim, got {outcome:?}");
        };
        assert_eq!((xp, gold), (150, 30));
        assert_eq!(change.levels_gained(), 1);

        let saved = stored_hero(&stored, "101");
        assert!(saved.active_quest().is_none());
        assert_eq!(saved.level(), 2);
        assert_eq!(saved.xp(), 50);
        // mage bonus on 30 gold
        assert_eq!(saved.gold(), 86);

        let log = log.lock().unwrap();
        assert_eq!(log.entries()[0].kind(), LogKind::Xp);
        assert_eq!(log.entries()[0].amount(), 150);
        assert_eq!(log.entries()[0].reason(), "Quest complete: Quest q5");
    }

    #[tokio::test]
    async fn early_claim_is_a_no_op() {
        let started = now() - Duration::minutes(20);
        let (claim, stored, log) = use_case(vec![hero_on_quest(started)], now());

        let outcome = claim.execute(&hero_id("101")).await.unwrap();

        assert_eq!(
            outcome,
            QuestClaimOutcome::NotFinished {
                remaining: Duration::minutes(40)
            }
        );
        assert!(stored_hero(&stored, "101").active_quest().is_some());
        assert!(log.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn idle_hero_has_nothing_to_claim() {
        let (claim, stored, _) = use_case(vec![hero("101", HeroClass::Mage)], now());
        let before = stored_hero(&stored, "101");

        let outcome = claim.execute(&hero_id("101")).await.unwrap();

        assert_eq!(outcome, QuestClaimOutcome::NotStarted);
        assert_eq!(stored_hero(&stored, "101"), before);
    }

    #[tokio::test]
    async fn second_claim_finds_nothing() {
        let started = now() - Duration::hours(2);
        let (claim, _, log) = use_case(vec![hero_on_quest(started)], now());

        claim.execute(&hero_id("101")).await.unwrap();
        let again = claim.execute(&hero_id("101")).await.unwrap();

        assert_eq!(again, QuestClaimOutcome::NotStarted);
        assert_eq!(log.lock().unwrap().len(), 1);
    }
}
