//! Typed collection repositories over any [`CollectionStore`].

use std::sync::Arc;

use async_trait::async_trait;
use classquest_domain::{ActionLog, DomainError, Hero, Quest, ShopItem};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::seed;
use crate::infrastructure::ports::{
    ActionLogRepo, Collection, CollectionStore, QuestCatalogRepo, RepoError, RosterRepo,
    ShopCatalogRepo,
};

/// Read `collection`, or write and return the seed value if it was never stored.
async fn load_or_seed<T>(
    store: &dyn CollectionStore,
    collection: Collection,
    seed: impl FnOnce() -> Result<T, DomainError>,
) -> Result<T, RepoError>
where
    T: Serialize + DeserializeOwned,
{
    if let Some(raw) = store.get(collection).await? {
        return serde_json::from_str(&raw)
            .map_err(|e| RepoError::serialization(format!("{collection}: {e}")));
    }

    let value = seed().map_err(RepoError::constraint)?;
    write(store, collection, &value).await?;
    tracing::info!(collection = %collection, "Seeded collection with defaults");
    Ok(value)
}

async fn write<T>(
    store: &dyn CollectionStore,
    collection: Collection,
    value: &T,
) -> Result<(), RepoError>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string_pretty(value)?;
    store.set(collection, raw).await
}

// =============================================================================
// Repositories
// =============================================================================

pub struct StoreRosterRepo {
    store: Arc<dyn CollectionStore>,
}

impl StoreRosterRepo {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RosterRepo for StoreRosterRepo {
    /// Heroes edited outside the app are normalized on the way in.
    async fn load(&self) -> Result<Vec<Hero>, RepoError> {
        let mut heroes =
            load_or_seed(self.store.as_ref(), Collection::Roster, seed::default_roster).await?;
        for hero in &mut heroes {
            let change = hero.normalize();
            if change.before != change.after {
                tracing::warn!(
                    hero_id = %hero.id(),
                    before = ?change.before,
                    after = ?change.after,
                    "Stored hero stats were out of bounds"
                );
            }
        }
        Ok(heroes)
    }

    async fn save(&self, heroes: &[Hero]) -> Result<(), RepoError> {
        write(self.store.as_ref(), Collection::Roster, heroes).await
    }
}

pub struct StoreShopCatalogRepo {
    store: Arc<dyn CollectionStore>,
}

impl StoreShopCatalogRepo {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ShopCatalogRepo for StoreShopCatalogRepo {
    async fn load(&self) -> Result<Vec<ShopItem>, RepoError> {
        load_or_seed(self.store.as_ref(), Collection::ShopCatalog, seed::default_shop).await
    }

    async fn save(&self, items: &[ShopItem]) -> Result<(), RepoError> {
        write(self.store.as_ref(), Collection::ShopCatalog, items).await
    }
}

pub struct StoreQuestCatalogRepo {
    store: Arc<dyn CollectionStore>,
}

impl StoreQuestCatalogRepo {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl QuestCatalogRepo for StoreQuestCatalogRepo {
    async fn load(&self) -> Result<Vec<Quest>, RepoError> {
        load_or_seed(self.store.as_ref(), Collection::QuestCatalog, seed::default_quests).await
    }
}

pub struct StoreActionLogRepo {
    store: Arc<dyn CollectionStore>,
}

impl StoreActionLogRepo {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ActionLogRepo for StoreActionLogRepo {
    async fn load(&self) -> Result<ActionLog, RepoError> {
        load_or_seed(self.store.as_ref(), Collection::ActionLog, || Ok(ActionLog::new())).await
    }

    async fn save(&self, log: &ActionLog) -> Result<(), RepoError> {
        write(self.store.as_ref(), Collection::ActionLog, log).await
    }
}

/// All collection repositories backed by one store.
pub struct StoreRepositories {
    pub roster: Arc<StoreRosterRepo>,
    pub shop: Arc<StoreShopCatalogRepo>,
    pub quests: Arc<StoreQuestCatalogRepo>,
    pub action_log: Arc<StoreActionLogRepo>,
}

impl StoreRepositories {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self {
            roster: Arc::new(StoreRosterRepo::new(store.clone())),
            shop: Arc::new(StoreShopCatalogRepo::new(store.clone())),
            quests: Arc::new(StoreQuestCatalogRepo::new(store.clone())),
            action_log: Arc::new(StoreActionLogRepo::new(store)),
        }
    }
}
