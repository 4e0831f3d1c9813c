//! Apply action use case.
//!
//! A teacher adds or removes XP, gold or HP from one hero. The change goes
//! through the resolver, so class passives and level-ups apply.

use std::sync::Arc;

use classquest_domain::{find_preset, Hero, HeroId, NewLogEntry, StatChange, StatKind};

use super::error::ProgressionError;
use crate::repositories::{hero_mut, Chronicle, Roster};

/// Result of a single-hero action.
#[derive(Debug, Clone)]
pub struct ActionResult {
    pub hero: Hero,
    pub change: StatChange,
}

pub struct ApplyAction {
    roster: Arc<Roster>,
    chronicle: Arc<Chronicle>,
}

impl ApplyAction {
    pub fn new(roster: Arc<Roster>, chronicle: Arc<Chronicle>) -> Self {
        Self { roster, chronicle }
    }

    /// Propose `stat = current + amount`, persist the resolved hero and log
    /// the raw `amount` with `reason`.
    pub async fn execute(
        &self,
        hero_id: &HeroId,
        kind: StatKind,
        amount: i32,
        reason: &str,
    ) -> Result<ActionResult, ProgressionError> {
        let mut heroes = self.roster.load().await?;
        let hero = hero_mut(&mut heroes, hero_id)
            .ok_or_else(|| ProgressionError::HeroNotFound(hero_id.clone()))?;

        let change = hero.adjust_stat(kind, amount);
        let entry = NewLogEntry::for_hero(hero, kind.into(), amount, reason);
        let hero = hero.clone();

        self.roster.save(&heroes).await?;
        self.chronicle.append(entry).await?;

        tracing::info!(
            hero_id = %hero_id,
            stat = %kind,
            amount,
            levels_gained = change.levels_gained(),
            "Stat action applied"
        );
        if change.fainted() {
            tracing::warn!(hero_id = %hero_id, "Hero fainted");
        }
        Ok(ActionResult { hero, change })
    }

    /// Apply one of the fixed behavior presets by key.
    pub async fn execute_preset(
        &self,
        hero_id: &HeroId,
        preset_key: &str,
    ) -> Result<ActionResult, ProgressionError> {
        let preset = find_preset(preset_key)
            .ok_or_else(|| ProgressionError::UnknownPreset(preset_key.to_string()))?;
        self.execute(hero_id, preset.kind, preset.amount, preset.label)
            .await
    }
}
