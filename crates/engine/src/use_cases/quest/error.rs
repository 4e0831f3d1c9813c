//! Quest lifecycle errors.

use classquest_domain::{DomainError, HeroId, QuestId};

use crate::infrastructure::ports::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum QuestError {
    #[error("Hero not found: {0}")]
    HeroNotFound(HeroId),
    #[error("Quest not found: {0}")]
    QuestNotFound(QuestId),
    /// Starting while another quest is unclaimed.
    #[error("Quest already active: {0}")]
    AlreadyActive(String),
    #[error("Quest rule violated: {0}")]
    Rule(DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
