//! Start quest use case.

use std::sync::Arc;

use classquest_domain::{ActiveQuest, DomainError, HeroId, Quest, QuestId};

use super::error::QuestError;
use crate::infrastructure::ports::{ClockPort, QuestCatalogRepo};
use crate::repositories::{hero_mut, Roster};

pub struct StartQuest {
    roster: Arc<Roster>,
    quests: Arc<dyn QuestCatalogRepo>,
    clock: Arc<dyn ClockPort>,
}

impl StartQuest {
    pub fn new(
        roster: Arc<Roster>,
        quests: Arc<dyn QuestCatalogRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            roster,
            quests,
            clock,
        }
    }

    /// Begin `quest_id` for the hero now. Only one unclaimed quest per hero.
    pub async fn execute(
        &self,
        hero_id: &HeroId,
        quest_id: &QuestId,
    ) -> Result<(Quest, ActiveQuest), QuestError> {
        let quest = find_quest(self.quests.as_ref(), quest_id).await?;
        let mut heroes = self.roster.load().await?;
        let hero = hero_mut(&mut heroes, hero_id)
            .ok_or_else(|| QuestError::HeroNotFound(hero_id.clone()))?;

        let active = match hero.start_quest(&quest, self.clock.now()) {
            Ok(active) => active,
            Err(e) => {
                tracing::warn!(hero_id = %hero_id, quest_id = %quest_id, "Quest start rejected");
                return Err(match e {
                    DomainError::InvalidStateTransition(reason) => {
                        QuestError::AlreadyActive(reason)
                    }
                    other => QuestError::Rule(other),
                });
            }
        };

        self.roster.save(&heroes).await?;
        tracing::info!(
            hero_id = %hero_id,
            quest_id = %quest_id,
            ends_at = %active.end_time(),
            "Quest started"
        );
        Ok((quest, active))
    }
}

pub(super) async fn find_quest(
    quests: &dyn QuestCatalogRepo,
    quest_id: &QuestId,
) -> Result<Quest, QuestError> {
    quests
        .load()
        .await?
        .into_iter()
        .find(|quest| &quest.id == quest_id)
        .ok_or_else(|| QuestError::QuestNotFound(quest_id.clone()))
}
