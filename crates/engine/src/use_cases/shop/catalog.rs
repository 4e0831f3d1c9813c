//! Shop catalog administration.

use std::sync::Arc;

use classquest_domain::{ItemName, ShopItem, ShopItemId};

use super::error::CatalogError;
use crate::infrastructure::ports::{RandomPort, ShopCatalogRepo};

#[derive(Debug, Clone, Default)]
pub struct NewShopItem {
    pub name: String,
    pub price: i32,
    pub description: String,
    /// Blank keeps the default icon.
    pub icon: String,
}

/// Fields to change on an existing item. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct ShopItemPatch {
    pub name: Option<String>,
    pub price: Option<i32>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

pub struct ShopCatalog {
    repo: Arc<dyn ShopCatalogRepo>,
    random: Arc<dyn RandomPort>,
}

impl ShopCatalog {
    pub fn new(repo: Arc<dyn ShopCatalogRepo>, random: Arc<dyn RandomPort>) -> Self {
        Self { repo, random }
    }

    pub async fn list(&self) -> Result<Vec<ShopItem>, CatalogError> {
        Ok(self.repo.load().await?)
    }

    pub async fn create(&self, input: NewShopItem) -> Result<ShopItem, CatalogError> {
        let id = ShopItemId::new(self.random.gen_uuid().to_string())?;
        let item = ShopItem::new(id, ItemName::new(input.name)?, input.price)?
            .with_description(input.description)
            .with_icon(input.icon);

        let mut items = self.repo.load().await?;
        items.push(item.clone());
        self.repo.save(&items).await?;
        tracing::info!(item_id = %item.id(), name = %item.name(), "Shop item created");
        Ok(item)
    }

    /// Validate every field before touching the stored catalog.
    pub async fn update(
        &self,
        id: &ShopItemId,
        patch: ShopItemPatch,
    ) -> Result<ShopItem, CatalogError> {
        let name = patch.name.map(ItemName::new).transpose()?;

        let mut items = self.repo.load().await?;
        let item = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| CatalogError::ItemNotFound(id.clone()))?;
        if let Some(price) = patch.price {
            item.set_price(price)?;
        }
        if let Some(name) = name {
            item.rename(name);
        }
        if let Some(description) = patch.description {
            item.set_description(description);
        }
        if let Some(icon) = patch.icon {
            item.set_icon(icon);
        }
        let updated = item.clone();

        self.repo.save(&items).await?;
        tracing::info!(item_id = %id, "Shop item updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: &ShopItemId) -> Result<ShopItem, CatalogError> {
        let mut items = self.repo.load().await?;
        let position = items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| CatalogError::ItemNotFound(id.clone()))?;
        let removed = items.remove(position);

        self.repo.save(&items).await?;
        tracing::info!(item_id = %id, "Shop item deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::SequentialRandom;
    use crate::test_fixtures::{shop_catalog, shop_item, Shared};
    use classquest_domain::DEFAULT_ITEM_ICON;
    use uuid::Uuid;

    fn catalog(items: Vec<ShopItem>) -> (ShopCatalog, Shared<Vec<ShopItem>>) {
        let (repo, stored) = shop_catalog(items);
        let catalog = ShopCatalog::new(Arc::new(repo), Arc::new(SequentialRandom::new()));
        (catalog, stored)
    }

    fn id(raw: &str) -> ShopItemId {
        ShopItemId::new(raw).unwrap()
    }

    #[tokio::test]
    async fn create_assigns_generated_id_and_default_icon() {
        let (catalog, stored) = catalog(Vec::new());

        let item = catalog
            .create(NewShopItem {
                name: "Extra Recess".to_string(),
                price: 120,
                ..NewShopItem::default()
            })
            .await
            .unwrap();

        assert_eq!(item.id().as_str(), Uuid::from_u128(1).to_string());
        assert_eq!(item.icon(), DEFAULT_ITEM_ICON);
        assert_eq!(stored.lock().unwrap().as_slice(), &[item]);
    }

    #[tokio::test]
    async fn create_rejects_free_items_and_blank_names() {
        let (catalog, stored) = catalog(Vec::new());

        let free = catalog
            .create(NewShopItem {
                name: "Sticker".to_string(),
                price: 0,
                ..NewShopItem::default()
            })
            .await;
        let nameless = catalog
            .create(NewShopItem {
                name: "  ".to_string(),
                price: 10,
                ..NewShopItem::default()
            })
            .await;

        assert!(matches!(free, Err(CatalogError::Validation(_))));
        assert!(matches!(nameless, Err(CatalogError::Validation(_))));
        assert!(stored.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_changes_only_given_fields() {
        let (catalog, stored) = catalog(vec![shop_item("2", "Seat Swap Pass", 100)]);

        let updated = catalog
            .update(
                &id("2"),
                ShopItemPatch {
                    price: Some(90),
                    icon: Some("fa-chair".to_string()),
                    ..ShopItemPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name().as_str(), "Seat Swap Pass");
        assert_eq!(updated.price(), 90);
        assert_eq!(updated.icon(), "fa-chair");
        assert_eq!(stored.lock().unwrap()[0], updated);
    }

    #[tokio::test]
    async fn invalid_update_leaves_item_untouched() {
        let (catalog, stored) = catalog(vec![shop_item("2", "Seat Swap Pass", 100)]);

        let result = catalog
            .update(
                &id("2"),
                ShopItemPatch {
                    price: Some(-1),
                    ..ShopItemPatch::default()
                },
            )
            .await;

        assert!(matches!(result, Err(CatalogError::Validation(_))));
        assert_eq!(stored.lock().unwrap()[0].price(), 100);
    }

    #[tokio::test]
    async fn delete_removes_item() {
        let (catalog, stored) = catalog(vec![
            shop_item("1", "Homework Skip Pass", 150),
            shop_item("4", "Health Potion", 50),
        ]);

        let removed = catalog.delete(&id("1")).await.unwrap();

        assert_eq!(removed.name().as_str(), "Homework Skip Pass");
        assert_eq!(stored.lock().unwrap().len(), 1);
        assert!(matches!(
            catalog.delete(&id("1")).await,
            Err(CatalogError::ItemNotFound(_))
        ));
    }
}
