//! Grade and room numbers for placing a hero in a classroom.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

pub const MIN_GRADE: u8 = 1;
pub const MAX_GRADE: u8 = 6;
pub const MIN_ROOM: u8 = 1;
pub const MAX_ROOM: u8 = 4;

/// School grade (1-6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Grade(u8);

impl Grade {
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if !(MIN_GRADE..=MAX_GRADE).contains(&value) {
            return Err(DomainError::validation(format!(
                "Grade must be between {MIN_GRADE} and {MAX_GRADE}, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Grade {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> u8 {
        grade.0
    }
}

/// Room within a grade (1-4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Room(u8);

impl Room {
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if !(MIN_ROOM..=MAX_ROOM).contains(&value) {
            return Err(DomainError::validation(format!(
                "Room must be between {MIN_ROOM} and {MAX_ROOM}, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Room {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Room> for u8 {
    fn from(room: Room) -> u8 {
        room.0
    }
}

/// A "grade/room" pair, e.g. `3/2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classroom {
    pub grade: Grade,
    pub room: Room,
}

impl fmt::Display for Classroom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.grade.0, self.room.0)
    }
}
