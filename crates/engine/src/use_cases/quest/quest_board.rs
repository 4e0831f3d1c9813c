//! Read-only quest views: the catalog and a hero's quest progress.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use classquest_domain::{HeroId, Quest, QuestStatus};

use super::error::QuestError;
use super::start_quest::find_quest;
use crate::infrastructure::ports::{ClockPort, QuestCatalogRepo};
use crate::repositories::Roster;

/// A hero's quest slot as seen at one instant.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestProgress {
    Idle,
    Running {
        quest: Quest,
        status: QuestStatus,
        progress_percent: u8,
        ends_at: DateTime<Utc>,
    },
}

impl QuestProgress {
    pub fn remaining(&self) -> Duration {
        match self {
            Self::Running {
                status: QuestStatus::InProgress { remaining },
                ..
            } => *remaining,
            _ => Duration::zero(),
        }
    }
}

pub struct QuestBoard {
    roster: Arc<Roster>,
    quests: Arc<dyn QuestCatalogRepo>,
    clock: Arc<dyn ClockPort>,
}

impl QuestBoard {
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

    pub async fn catalog(&self) -> Result<Vec<Quest>, QuestError> {
        Ok(self.quests.load().await?)
    }

    /// Derived from the clock on every call; nothing is stored.
    pub async fn progress(&self, hero_id: &HeroId) -> Result<QuestProgress, QuestError> {
        let hero = self
            .roster
            .get(hero_id)
            .await?
            .ok_or_else(|| QuestError::HeroNotFound(hero_id.clone()))?;
        let Some(active) = hero.active_quest().filter(|q| !q.is_claimed()) else {
            return Ok(QuestProgress::Idle);
        };

        let now = self.clock.now();
        let quest = find_quest(self.quests.as_ref(), active.quest_id()).await?;
        Ok(QuestProgress::Running {
            quest,
            status: active.status(now),
            progress_percent: active.progress_percent(now),
            ends_at: active.end_time(),
        })
    }
}
