//! Teacher-driven stat changes: single actions, behavior presets and group
//! rewards.

mod apply_action;
mod error;
mod mass_award;

use std::sync::Arc;

pub use apply_action::{ActionResult, ApplyAction};
pub use error::ProgressionError;
pub use mass_award::{MassAward, MassAwardReport, MassAwardTargets};

/// Container for stat-changing use cases.
pub struct ProgressionUseCases {
    pub apply: Arc<ApplyAction>,
    pub mass_award: Arc<MassAward>,
}

impl ProgressionUseCases {
    pub fn new(apply: Arc<ApplyAction>, mass_award: Arc<MassAward>) -> Self {
        Self { apply, mass_award }
    }
}
