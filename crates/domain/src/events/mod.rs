//! Domain Events
//!
//! Return types from hero actions, communicating what happened when state was
//! modified (or why nothing was).

pub mod hero_events;

pub use hero_events::*;
