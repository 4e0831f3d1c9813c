//! Pure helpers shared by the domain rules.

pub mod calendar;

pub use calendar::LocalCalendar;
