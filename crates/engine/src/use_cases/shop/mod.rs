//! The reward shop: buying items with gold and managing the catalog.

mod catalog;
mod error;
mod purchase;

use std::sync::Arc;

pub use catalog::{NewShopItem, ShopCatalog, ShopItemPatch};
pub use error::{CatalogError, ShopError};
pub use purchase::{Purchase, Receipt};

/// Container for shop use cases.
pub struct ShopUseCases {
    pub purchase: Arc<Purchase>,
    pub catalog: Arc<ShopCatalog>,
}

impl ShopUseCases {
    pub fn new(purchase: Arc<Purchase>, catalog: Arc<ShopCatalog>) -> Self {
        Self { purchase, catalog }
    }
}
