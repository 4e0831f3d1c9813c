//! Shop catalog entries heroes can buy with gold.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::ShopItemId;
use crate::value_objects::ItemName;

pub const DEFAULT_ITEM_ICON: &str = "fa-gem";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredShopItem")]
pub struct ShopItem {
    id: ShopItemId,
    name: ItemName,
    price: i32,
    description: String,
    icon: String,
}

/// Catalog entry as written on disk, checked before it becomes a [`ShopItem`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredShopItem {
    id: ShopItemId,
    name: ItemName,
    price: i32,
    #[serde(default)]
    description: String,
    #[serde(default = "default_icon")]
    icon: String,
}

impl TryFrom<StoredShopItem> for ShopItem {
    type Error = DomainError;

    fn try_from(stored: StoredShopItem) -> Result<Self, Self::Error> {
        Ok(Self::new(stored.id, stored.name, stored.price)?
            .with_description(stored.description)
            .with_icon(stored.icon))
    }
}

fn default_icon() -> String {
    DEFAULT_ITEM_ICON.to_string()
}

fn validate_price(price: i32) -> Result<i32, DomainError> {
    if price <= 0 {
        return Err(DomainError::validation(format!(
            "Item price must be positive, got {price}"
        )));
    }
    Ok(price)
}

impl ShopItem {
    pub fn new(id: ShopItemId, name: ItemName, price: i32) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name,
            price: validate_price(price)?,
            description: String::new(),
            icon: default_icon(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.set_icon(icon);
        self
    }

    pub fn id(&self) -> &ShopItemId {
        &self.id
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn price(&self) -> i32 {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn rename(&mut self, name: ItemName) {
        self.name = name;
    }

    pub fn set_price(&mut self, price: i32) -> Result<(), DomainError> {
        self.price = validate_price(price)?;
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Blank icons are ignored.
    pub fn set_icon(&mut self, icon: impl Into<String>) {
        let icon = icon.into();
        if !icon.trim().is_empty() {
            self.icon = icon;
        }
    }
}
