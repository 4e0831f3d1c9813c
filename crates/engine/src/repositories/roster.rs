//! Roster access.

use std::sync::Arc;

use classquest_domain::{Hero, HeroId};

use crate::infrastructure::ports::{RepoError, RosterRepo};

/// The hero roster, read and replaced as a whole.
pub struct Roster {
    repo: Arc<dyn RosterRepo>,
}

impl Roster {
    pub fn new(repo: Arc<dyn RosterRepo>) -> Self {
        Self { repo }
    }

    pub async fn load(&self) -> Result<Vec<Hero>, RepoError> {
        self.repo.load().await
    }

    pub async fn save(&self, heroes: &[Hero]) -> Result<(), RepoError> {
        self.repo.save(heroes).await
    }

    pub async fn get(&self, id: &HeroId) -> Result<Option<Hero>, RepoError> {
        let heroes = self.repo.load().await?;
        Ok(heroes.into_iter().find(|hero| hero.id() == id))
    }
}

/// Locate a hero inside a loaded roster for in-place mutation.
pub fn hero_mut<'a>(heroes: &'a mut [Hero], id: &HeroId) -> Option<&'a mut Hero> {
    heroes.iter_mut().find(|hero| hero.id() == id)
}
