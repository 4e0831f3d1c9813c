//! Shop errors: purchases and catalog administration.

use classquest_domain::{DomainError, HeroId, ShopItemId};

use crate::infrastructure::ports::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum ShopError {
    #[error("Hero not found: {0}")]
    HeroNotFound(HeroId),
    #[error("Shop item not found: {0}")]
    ItemNotFound(ShopItemId),
    #[error("Not enough gold: needs {needed}, has {available}")]
    InsufficientGold { needed: i32, available: i32 },
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Shop item not found: {0}")]
    ItemNotFound(ShopItemId),
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
