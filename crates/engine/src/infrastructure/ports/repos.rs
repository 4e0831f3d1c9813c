//! Repository port traits for persisted collections.
//!
//! Every collection is read and replaced wholesale. There is one active editor,
//! so no locking or version tokens are involved.

use std::fmt;

use async_trait::async_trait;
use classquest_domain::{ActionLog, Hero, Quest, ShopItem};

use super::error::RepoError;

// =============================================================================
// Raw Collection Storage
// =============================================================================

/// Logical collections kept by a [`CollectionStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Roster,
    ShopCatalog,
    QuestCatalog,
    ActionLog,
}

impl Collection {
    /// Storage key for this collection.
    pub fn name(self) -> &'static str {
        match self {
            Collection::Roster => "roster",
            Collection::ShopCatalog => "shop_catalog",
            Collection::QuestCatalog => "quest_catalog",
            Collection::ActionLog => "action_log",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Key-value storage of serialized collections.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// `None` when the collection was never written.
    async fn get(&self, collection: Collection) -> Result<Option<String>, RepoError>;
    async fn set(&self, collection: Collection, contents: String) -> Result<(), RepoError>;
}

// =============================================================================
// Typed Collection Ports (one per collection)
// =============================================================================

/// `load` on any of these seeds and persists the default value when the
/// collection is absent.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterRepo: Send + Sync {
    async fn load(&self) -> Result<Vec<Hero>, RepoError>;
    async fn save(&self, heroes: &[Hero]) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShopCatalogRepo: Send + Sync {
    async fn load(&self) -> Result<Vec<ShopItem>, RepoError>;
    async fn save(&self, items: &[ShopItem]) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestCatalogRepo: Send + Sync {
    async fn load(&self) -> Result<Vec<Quest>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActionLogRepo: Send + Sync {
    async fn load(&self) -> Result<ActionLog, RepoError>;
    async fn save(&self, log: &ActionLog) -> Result<(), RepoError>;
}
