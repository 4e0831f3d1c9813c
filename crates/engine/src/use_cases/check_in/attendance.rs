//! Teacher attendance check-in, single hero or a whole classroom.
//!
//! Keyed by the local calendar date: a hero marked once on a date is
//! skipped for the rest of that date.

use std::sync::Arc;

use chrono::NaiveDate;
use classquest_domain::{
    AttendanceOutcome, Hero, HeroId, LocalCalendar, LogKind, NewLogEntry, RosterFilter,
};

use super::error::CheckInError;
use crate::infrastructure::config::RewardSettings;
use crate::infrastructure::ports::ClockPort;
use crate::repositories::{hero_mut, Chronicle, Roster};

const SINGLE_REASON: &str = "Checked in (attendance)";
const BULK_REASON: &str = "On time for class (group check-in)";

/// Result of a classroom-wide attendance pass.
#[derive(Debug, Clone)]
pub struct AttendanceReport {
    pub date: NaiveDate,
    pub marked: Vec<Hero>,
    /// Heroes in the filter who were already present today.
    pub already_present: Vec<HeroId>,
}

pub struct MarkAttendance {
    roster: Arc<Roster>,
    chronicle: Arc<Chronicle>,
    clock: Arc<dyn ClockPort>,
    calendar: LocalCalendar,
    rewards: RewardSettings,
}

impl MarkAttendance {
    pub fn new(
        roster: Arc<Roster>,
        chronicle: Arc<Chronicle>,
        clock: Arc<dyn ClockPort>,
        calendar: LocalCalendar,
        rewards: RewardSettings,
    ) -> Self {
        Self {
            roster,
            chronicle,
            clock,
            calendar,
            rewards,
        }
    }

    pub async fn execute(&self, hero_id: &HeroId) -> Result<AttendanceOutcome, CheckInError> {
        let today = self.calendar.today(self.clock.now());
        let mut heroes = self.roster.load().await?;
        let hero = hero_mut(&mut heroes, hero_id)
            .ok_or_else(|| CheckInError::HeroNotFound(hero_id.clone()))?;

        let outcome = hero.mark_attendance(today, self.rewards.attendance_xp);
        if let AttendanceOutcome::Marked { xp, .. } = &outcome {
            let entry = NewLogEntry::for_hero(hero, LogKind::Attendance, *xp, SINGLE_REASON);
            self.roster.save(&heroes).await?;
            self.chronicle.append(entry).await?;
            tracing::info!(hero_id = %hero_id, date = %today, "Attendance marked");
        } else {
            tracing::debug!(hero_id = %hero_id, date = %today, "Already marked present");
        }
        Ok(outcome)
    }

    /// Mark every hero the filter matches, skipping those already present.
    /// One roster write and one log write for the whole batch.
    pub async fn execute_all(
        &self,
        filter: &RosterFilter,
    ) -> Result<AttendanceReport, CheckInError> {
        let today = self.calendar.today(self.clock.now());
        let mut heroes = self.roster.load().await?;

        let mut report = AttendanceReport {
            date: today,
            marked: Vec::new(),
            already_present: Vec::new(),
        };
        let mut entries = Vec::new();
        for hero in heroes.iter_mut().filter(|hero| filter.matches(hero)) {
            match hero.mark_attendance(today, self.rewards.attendance_xp) {
                AttendanceOutcome::Marked { xp, .. } => {
                    entries.push(NewLogEntry::for_hero(
                        hero,
                        LogKind::Attendance,
                        xp,
                        BULK_REASON,
                    ));
                    report.marked.push(hero.clone());
                }
                AttendanceOutcome::AlreadyMarked { .. } => {
                    report.already_present.push(hero.id().clone());
                }
            }
        }

        if report.marked.is_empty() {
            tracing::debug!(date = %today, "Nobody left to mark present");
            return Ok(report);
        }
        self.roster.save(&heroes).await?;
        self.chronicle.append_all(entries).await?;
        tracing::info!(
            date = %today,
            marked = report.marked.len(),
            already_present = report.already_present.len(),
            "Group attendance marked"
        );
        Ok(report)
    }
}
