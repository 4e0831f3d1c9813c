use classquest_domain::HeroId;

use crate::infrastructure::ports::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum CheckInError {
    #[error("Hero not found: {0}")]
    HeroNotFound(HeroId),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
