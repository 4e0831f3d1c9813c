//! Remove a hero from the roster.
//!
//! Log entries about the hero stay; they carry a copy of the name.

use std::sync::Arc;

use classquest_domain::{Hero, HeroId};

use super::error::RegistrationError;
use crate::repositories::Roster;

pub struct RemoveHero {
    roster: Arc<Roster>,
}

impl RemoveHero {
    pub fn new(roster: Arc<Roster>) -> Self {
        Self { roster }
    }

    pub async fn execute(&self, id: &HeroId) -> Result<Hero, RegistrationError> {
        let mut heroes = self.roster.load().await?;
        let position = heroes
            .iter()
            .position(|hero| hero.id() == id)
            .ok_or_else(|| RegistrationError::HeroNotFound(id.clone()))?;
        let removed = heroes.remove(position);

        self.roster.save(&heroes).await?;
        tracing::info!(hero_id = %id, "Hero removed from roster");
        Ok(removed)
    }
}
