//! Purchase use case.

use std::sync::Arc;

use classquest_domain::{Hero, HeroId, LogKind, NewLogEntry, ShopItem, ShopItemId};

use super::error::ShopError;
use crate::infrastructure::ports::ShopCatalogRepo;
use crate::repositories::{hero_mut, Chronicle, Roster};

#[derive(Debug, Clone)]
pub struct Receipt {
    pub hero: Hero,
    pub item: ShopItem,
}

pub struct Purchase {
    roster: Arc<Roster>,
    catalog: Arc<dyn ShopCatalogRepo>,
    chronicle: Arc<Chronicle>,
}

impl Purchase {
    pub fn new(
        roster: Arc<Roster>,
        catalog: Arc<dyn ShopCatalogRepo>,
        chronicle: Arc<Chronicle>,
    ) -> Self {
        Self {
            roster,
            catalog,
            chronicle,
        }
    }

    /// Spend gold on a catalog item. Nothing is written when the hero cannot
    /// afford it.
    pub async fn execute(
        &self,
        hero_id: &HeroId,
        item_id: &ShopItemId,
    ) -> Result<Receipt, ShopError> {
        let item = self
            .catalog
            .load()
            .await?
            .into_iter()
            .find(|item| item.id() == item_id)
            .ok_or_else(|| ShopError::ItemNotFound(item_id.clone()))?;

        let mut heroes = self.roster.load().await?;
        let hero = hero_mut(&mut heroes, hero_id)
            .ok_or_else(|| ShopError::HeroNotFound(hero_id.clone()))?;

        let available = hero.gold();
        if let Err(e) = hero.purchase(&item) {
            tracing::warn!(hero_id = %hero_id, item_id = %item_id, error = %e, "Purchase rejected");
            return Err(ShopError::InsufficientGold {
                needed: item.price(),
                available,
            });
        }
        let entry = NewLogEntry::for_hero(
            hero,
            LogKind::Item,
            -item.price(),
            format!("Bought: {}", item.name()),
        );
        let hero = hero.clone();

        self.roster.save(&heroes).await?;
        self.chronicle.append(entry).await?;
        tracing::info!(
            hero_id = %hero_id,
            item_id = %item_id,
            price = item.price(),
            "Item purchased"
        );
        Ok(Receipt { hero, item })
    }
}
