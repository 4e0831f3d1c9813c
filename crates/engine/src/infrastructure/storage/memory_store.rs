//! In-memory collection store for tests and throwaway sessions.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::infrastructure::ports::{Collection, CollectionStore, RepoError};

#[derive(Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<Collection, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CollectionStore for InMemoryStore {
    async fn get(&self, collection: Collection) -> Result<Option<String>, RepoError> {
        Ok(self.collections.read().await.get(&collection).cloned())
    }

    async fn set(&self, collection: Collection, contents: String) -> Result<(), RepoError> {
        self.collections.write().await.insert(collection, contents);
        Ok(())
    }
}
