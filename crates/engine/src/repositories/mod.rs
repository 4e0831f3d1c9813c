//! Repository modules - Data access wrappers around port traits.
//!
//! Only collections with logic beyond load/save get a wrapper here; the
//! catalog ports are injected into use cases directly.

pub mod chronicle;
pub mod roster;

pub use chronicle::Chronicle;
pub use roster::{hero_mut, Roster};
