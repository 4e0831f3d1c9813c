//! Use cases - classroom story orchestration.
//!
//! Each module holds the use cases for one area. Use cases load the roster,
//! call a domain method on the hero, persist, and record a log entry.

pub mod check_in;
pub mod insights;
pub mod progression;
pub mod quest;
pub mod registration;
pub mod shop;

pub use check_in::CheckInUseCases;
pub use insights::RosterQueries;
pub use progression::ProgressionUseCases;
pub use quest::QuestUseCases;
pub use registration::RegistrationUseCases;
pub use shop::ShopUseCases;
