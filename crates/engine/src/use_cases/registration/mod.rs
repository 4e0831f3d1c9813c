//! Roster administration use cases: registration, profile edits, removal.

mod error;
mod register;
mod remove_hero;
mod update_profile;

use std::sync::Arc;

pub use error::RegistrationError;
pub use register::{RegisterHero, RegisterHeroInput};
pub use remove_hero::RemoveHero;
pub use update_profile::{ProfileInput, UpdateProfile};

/// Container for roster administration use cases.
pub struct RegistrationUseCases {
    pub register: Arc<RegisterHero>,
    pub update_profile: Arc<UpdateProfile>,
    pub remove: Arc<RemoveHero>,
}

impl RegistrationUseCases {
    pub fn new(
        register: Arc<RegisterHero>,
        update_profile: Arc<UpdateProfile>,
        remove: Arc<RemoveHero>,
    ) -> Self {
        Self {
            register,
            update_profile,
            remove,
        }
    }
}
