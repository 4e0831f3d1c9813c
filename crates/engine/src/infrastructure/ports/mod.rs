//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Collection storage (could swap JSON files -> SQLite or a browser store)
//! - Clock/Random (for testing)

mod error;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use error::RepoError;
pub use repos::{
    ActionLogRepo, Collection, CollectionStore, QuestCatalogRepo, RosterRepo, ShopCatalogRepo,
};

// =============================================================================
// Test-Only Mock Repositories (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{
    MockActionLogRepo, MockCollectionStore, MockQuestCatalogRepo, MockRosterRepo,
    MockShopCatalogRepo,
};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::{ClockPort, RandomPort};
