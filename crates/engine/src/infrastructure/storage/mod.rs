//! Collection storage adapters and default seed data.

mod file_store;
mod memory_store;
mod repos;
pub mod seed;

pub use file_store::JsonFileStore;
pub use memory_store::InMemoryStore;
pub use repos::{
    StoreActionLogRepo, StoreQuestCatalogRepo, StoreRepositories, StoreRosterRepo,
    StoreShopCatalogRepo,
};
