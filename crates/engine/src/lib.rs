//! ClassQuest engine library.
//!
//! Everything around the pure domain crate: storage, use cases and the
//! composition root used by the `classquest` binary.
//!
//! ## Structure
//!
//! - `infrastructure/` - Ports, storage adapters, configuration, clock
//! - `repositories/` - Roster and action log access shared by use cases
//! - `use_cases/` - Classroom actions and queries
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod repositories;
pub mod use_cases;

/// Shared fixtures for use case tests.
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use app::App;
