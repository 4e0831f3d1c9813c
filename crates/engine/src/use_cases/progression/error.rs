//! Errors for stat actions and group rewards.

use classquest_domain::{HeroId, StatKind};

use crate::infrastructure::ports::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum ProgressionError {
    #[error("Hero not found: {0}")]
    HeroNotFound(HeroId),
    #[error("Unknown behavior preset: {0}")]
    UnknownPreset(String),
    #[error("No heroes selected for the group reward")]
    NoTargets,
    #[error("Group rewards grant XP or GOLD, not {0}")]
    UnsupportedGroupStat(StatKind),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
