//! Quest lifecycle: start, claim and progress views.
//!
//! Completion is derived from the clock at read time; there is no timer.

mod claim_quest;
mod error;
mod quest_board;
mod start_quest;

use std::sync::Arc;

pub use claim_quest::ClaimQuest;
pub use error::QuestError;
pub use quest_board::{QuestBoard, QuestProgress};
pub use start_quest::StartQuest;

/// Container for quest use cases.
pub struct QuestUseCases {
    pub start: Arc<StartQuest>,
    pub claim: Arc<ClaimQuest>,
    pub board: Arc<QuestBoard>,
}

impl QuestUseCases {
    pub fn new(start: Arc<StartQuest>, claim: Arc<ClaimQuest>, board: Arc<QuestBoard>) -> Self {
        Self {
            start,
            claim,
            board,
        }
    }
}
