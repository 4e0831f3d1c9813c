//! Classroom-local calendar days.
//!
//! Daily rewards reset at local midnight and attendance is keyed by the local
//! calendar date. The classroom's UTC offset is configuration, so both rules
//! take an explicit [`LocalCalendar`] instead of reading the host timezone.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Offset, Utc};

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalCalendar {
    offset: FixedOffset,
}

impl LocalCalendar {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    /// Offset in minutes east of UTC, e.g. `420` for UTC+7.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the offset is a day or more.
    pub fn from_offset_minutes(minutes: i32) -> Result<Self, DomainError> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(Self::new)
            .ok_or_else(|| {
                DomainError::validation(format!("UTC offset out of range: {minutes} minutes"))
            })
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// The local calendar date at `now`.
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.offset).date_naive()
    }

    /// Instant of the most recent local midnight at or before `now`.
    pub fn start_of_day(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.midnight_of(self.today(now))
    }

    /// Instant of the next local midnight after `now`.
    pub fn next_reset(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.start_of_day(now) + Duration::days(1)
    }

    pub fn until_next_reset(&self, now: DateTime<Utc>) -> Duration {
        self.next_reset(now) - now
    }

    fn midnight_of(&self, date: NaiveDate) -> DateTime<Utc> {
        let local_midnight = date.and_time(NaiveTime::MIN);
        local_midnight.and_utc() - Duration::seconds(i64::from(self.offset.local_minus_utc()))
    }
}

impl Default for LocalCalendar {
    fn default() -> Self {
        Self::utc()
    }
}
