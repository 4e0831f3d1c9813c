//! Student daily check-in: a small XP and gold grant once per local day.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use classquest_domain::{DailyRewardOutcome, HeroId, LocalCalendar, LogKind, NewLogEntry};

use super::error::CheckInError;
use crate::infrastructure::config::RewardSettings;
use crate::infrastructure::ports::ClockPort;
use crate::repositories::{hero_mut, Chronicle, Roster};

const DAILY_REASON: &str = "Daily reward: ready for adventure";

#[derive(Debug, Clone, PartialEq)]
pub struct DailyCheckInResult {
    pub outcome: DailyRewardOutcome,
    /// Next local midnight, when the reward becomes claimable again.
    pub next_reset: DateTime<Utc>,
}

pub struct DailyCheckIn {
    roster: Arc<Roster>,
    chronicle: Arc<Chronicle>,
    clock: Arc<dyn ClockPort>,
    calendar: LocalCalendar,
    rewards: RewardSettings,
}

impl DailyCheckIn {
    pub fn new(
        roster: Arc<Roster>,
        chronicle: Arc<Chronicle>,
        clock: Arc<dyn ClockPort>,
        calendar: LocalCalendar,
        rewards: RewardSettings,
    ) -> Self {
        Self {
            roster,
            chronicle,
            clock,
            calendar,
            rewards,
        }
    }

    pub async fn execute(&self, hero_id: &HeroId) -> Result<DailyCheckInResult, CheckInError> {
        let now = self.clock.now();
        let next_reset = self.calendar.next_reset(now);

        let mut heroes = self.roster.load().await?;
        let hero = hero_mut(&mut heroes, hero_id)
            .ok_or_else(|| CheckInError::HeroNotFound(hero_id.clone()))?;

        let outcome = hero.claim_daily_reward(
            self.calendar.start_of_day(now),
            self.rewards.daily_xp,
            self.rewards.daily_gold,
        );
        match &outcome {
            DailyRewardOutcome::Claimed { xp, .. } => {
                let entry = NewLogEntry::for_hero(hero, LogKind::Xp, *xp, DAILY_REASON);
                self.roster.save(&heroes).await?;
                self.chronicle.append(entry).await?;
                tracing::info!(hero_id = %hero_id, "Daily reward claimed");
            }
            DailyRewardOutcome::AlreadyClaimed => {
                tracing::debug!(
                    hero_id = %hero_id,
                    next_reset = %next_reset,
                    "Daily reward already claimed"
                );
            }
        }

        Ok(DailyCheckInResult {
            outcome,
            next_reset,
        })
    }
}
