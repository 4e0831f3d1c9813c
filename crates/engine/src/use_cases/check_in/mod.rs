//! Idempotent check-ins: the student's daily reward and teacher attendance.

mod attendance;
mod daily;
mod error;

use std::sync::Arc;

pub use attendance::{AttendanceReport, MarkAttendance};
pub use daily::{DailyCheckIn, DailyCheckInResult};
pub use error::CheckInError;

/// Container for check-in use cases.
pub struct CheckInUseCases {
    pub daily: Arc<DailyCheckIn>,
    pub attendance: Arc<MarkAttendance>,
}

impl CheckInUseCases {
    pub fn new(daily: Arc<DailyCheckIn>, attendance: Arc<MarkAttendance>) -> Self {
        Self { daily, attendance }
    }
}
