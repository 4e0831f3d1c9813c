//! Read-only roster queries: listings, leaderboard, class summary, history.

use std::sync::Arc;

use classquest_domain::{leaderboard, ClassInsights, Hero, HeroId, LogEntry, RosterFilter};

use crate::infrastructure::ports::RepoError;
use crate::repositories::{Chronicle, Roster};

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Hero not found: {0}")]
    HeroNotFound(HeroId),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

pub struct RosterQueries {
    roster: Arc<Roster>,
    chronicle: Arc<Chronicle>,
}

impl RosterQueries {
    pub fn new(roster: Arc<Roster>, chronicle: Arc<Chronicle>) -> Self {
        Self { roster, chronicle }
    }

    /// Heroes matching `filter`, in roster order.
    pub async fn list(&self, filter: &RosterFilter) -> Result<Vec<Hero>, QueryError> {
        let heroes = self.roster.load().await?;
        Ok(filter.apply(&heroes).cloned().collect())
    }

    pub async fn hero(&self, id: &HeroId) -> Result<Hero, QueryError> {
        self.roster
            .get(id)
            .await?
            .ok_or_else(|| QueryError::HeroNotFound(id.clone()))
    }

    pub async fn leaderboard(&self, filter: &RosterFilter) -> Result<Vec<Hero>, QueryError> {
        let heroes = self.roster.load().await?;
        Ok(leaderboard(filter.apply(&heroes))
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn insights(&self, filter: &RosterFilter) -> Result<ClassInsights, QueryError> {
        let heroes = self.roster.load().await?;
        Ok(ClassInsights::from_heroes(filter.apply(&heroes)))
    }

    /// Log entries newest first, optionally for one hero.
    pub async fn history(&self, hero_id: Option<&HeroId>) -> Result<Vec<LogEntry>, QueryError> {
        Ok(self.chronicle.history(hero_id).await?)
    }
}
