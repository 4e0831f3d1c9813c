//! Group rewards: the same XP or gold grant to many heroes at once.

use std::sync::Arc;

use classquest_domain::{Hero, HeroId, NewLogEntry, RosterFilter, StatKind};

use super::error::ProgressionError;
use crate::repositories::{Chronicle, Roster};

/// Who receives a group reward.
#[derive(Debug, Clone)]
pub enum MassAwardTargets {
    /// An explicit selection. Ids not on the roster are reported, not fatal.
    Heroes(Vec<HeroId>),
    /// Everyone the filter matches.
    Filter(RosterFilter),
}

#[derive(Debug, Clone)]
pub struct MassAwardReport {
    pub awarded: Vec<Hero>,
    pub missing: Vec<HeroId>,
}

impl MassAwardReport {
    pub fn awarded_count(&self) -> usize {
        self.awarded.len()
    }
}

pub struct MassAward {
    roster: Arc<Roster>,
    chronicle: Arc<Chronicle>,
}

impl MassAward {
    pub fn new(roster: Arc<Roster>, chronicle: Arc<Chronicle>) -> Self {
        Self { roster, chronicle }
    }

    /// Grant `amount` of XP or gold to every target with one roster write
    /// and one log write. Each hero resolves independently, so class
    /// bonuses and level-ups still apply per hero.
    pub async fn execute(
        &self,
        targets: MassAwardTargets,
        kind: StatKind,
        amount: i32,
        reason: &str,
    ) -> Result<MassAwardReport, ProgressionError> {
        if kind == StatKind::Hp {
            return Err(ProgressionError::UnsupportedGroupStat(kind));
        }
        if let MassAwardTargets::Heroes(ids) = &targets {
            if ids.is_empty() {
                return Err(ProgressionError::NoTargets);
            }
        }

        let mut heroes = self.roster.load().await?;
        let (selected, missing) = select(&heroes, &targets);
        if selected.is_empty() {
            tracing::warn!(missing = missing.len(), "Group reward matched no heroes");
            return Err(ProgressionError::NoTargets);
        }

        let reason = format!("[Group reward] {reason}");
        let mut entries = Vec::with_capacity(selected.len());
        let mut awarded = Vec::with_capacity(selected.len());
        for index in selected {
            let hero = &mut heroes[index];
            hero.adjust_stat(kind, amount);
            entries.push(NewLogEntry::for_hero(hero, kind.into(), amount, reason.as_str()));
            awarded.push(hero.clone());
        }

        self.roster.save(&heroes).await?;
        self.chronicle.append_all(entries).await?;

        tracing::info!(
            stat = %kind,
            amount,
            awarded = awarded.len(),
            missing = missing.len(),
            "Group reward granted"
        );
        Ok(MassAwardReport { awarded, missing })
    }
}

/// Roster positions to award, in roster order, plus unknown explicit ids.
fn select(heroes: &[Hero], targets: &MassAwardTargets) -> (Vec<usize>, Vec<HeroId>) {
    match targets {
        MassAwardTargets::Filter(filter) => {
            let selected = heroes
                .iter()
                .enumerate()
                .filter(|(_, hero)| filter.matches(hero))
                .map(|(index, _)| index)
                .collect();
            (selected, Vec::new())
        }
        MassAwardTargets::Heroes(ids) => {
            let mut missing = Vec::new();
            let mut selected = Vec::new();
            for id in ids {
                match heroes.iter().position(|hero| hero.id() == id) {
                    Some(index) if !selected.contains(&index) => selected.push(index),
                    Some(_) => {}
                    None => missing.push(id.clone()),
                }
            }
            selected.sort_unstable();
            (selected, missing)
        }
    }
}
