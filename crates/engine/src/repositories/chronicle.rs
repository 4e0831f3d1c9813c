//! Action log access: stamping and appending entries.

use std::sync::Arc;

use classquest_domain::{ActionLog, HeroId, LogEntry, LogEntryId, NewLogEntry};

use crate::infrastructure::ports::{ActionLogRepo, ClockPort, RandomPort, RepoError};

/// Appends log entries with a fresh id and the current time.
///
/// The log keeps the newest [`classquest_domain::ACTION_LOG_CAPACITY`] entries.
pub struct Chronicle {
    repo: Arc<dyn ActionLogRepo>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
}

impl Chronicle {
    pub fn new(
        repo: Arc<dyn ActionLogRepo>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            repo,
            clock,
            random,
        }
    }

    pub async fn append(&self, entry: NewLogEntry) -> Result<LogEntry, RepoError> {
        let mut stamped = self.append_all(vec![entry]).await?;
        stamped
            .pop()
            .ok_or_else(|| RepoError::constraint("log entry was not recorded"))
    }

    /// Append several entries with one read and one write of the log.
    ///
    /// Entries are recorded in order, so the last one ends up newest.
    pub async fn append_all(&self, entries: Vec<NewLogEntry>) -> Result<Vec<LogEntry>, RepoError> {
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let mut log = self.repo.load().await?;
        let now = self.clock.now();
        let stamped: Vec<LogEntry> = entries
            .into_iter()
            .map(|entry| entry.stamp(LogEntryId::from_uuid(self.random.gen_uuid()), now))
            .collect();
        for entry in &stamped {
            log.record(entry.clone());
        }
        self.repo.save(&log).await?;

        tracing::debug!(count = stamped.len(), size = log.len(), "Appended to action log");
        Ok(stamped)
    }

    /// Newest-first entries, optionally for one hero only.
    pub async fn history(&self, hero_id: Option<&HeroId>) -> Result<Vec<LogEntry>, RepoError> {
        let log: ActionLog = self.repo.load().await?;
        let entries = match hero_id {
            Some(id) => log.for_hero(id).cloned().collect(),
            None => log.entries().to_vec(),
        };
        Ok(entries)
    }
}
