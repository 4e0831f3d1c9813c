//! Roster administration errors.

use classquest_domain::{DomainError, HeroId};

use crate::infrastructure::ports::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("A hero with id {0} is already registered")]
    DuplicateId(HeroId),
    #[error("Hero not found: {0}")]
    HeroNotFound(HeroId),
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
