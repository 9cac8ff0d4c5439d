//! Session request types: weekdays, minute-resolution times, and admission.
//!
//! A [`SessionRequest`] only comes into existence through
//! [`SessionRequest::admit`], which enforces `start < end`. Fields stay public
//! so stored rows can be rebuilt as they were written.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Minutes in one day; valid times are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Day of the week a session is requested for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in scheduling order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// 0 = Monday ... 6 = Sunday
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = ValidationError;

    /// Accepts full English names or their three-letter prefix, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| {
                let name = day.as_str().to_ascii_lowercase();
                needle == name || (needle.len() == 3 && name.starts_with(&needle))
            })
            .ok_or_else(|| ValidationError::InvalidWeekday {
                value: s.to_string(),
            })
    }
}

/// Time of day at minute resolution, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Returns `None` when `minutes` is outside `0..1440`.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour >= 24 || minute >= 60 {
            return None;
        }
        Some(Self(hour * 60 + minute))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        // hour < 24 and minute < 60 always hold for NaiveTime
        Self((time.hour() * 60 + time.minute()) as u16)
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(TimeOfDay::from)
            .map_err(|_| ValidationError::InvalidTime {
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Admission gate: a session interval is valid only when `start < end`.
pub fn validate_interval(start: TimeOfDay, end: TimeOfDay) -> Result<(), ValidationError> {
    if start < end {
        Ok(())
    } else {
        Err(ValidationError::InvalidInterval { start, end })
    }
}

/// A candidate session as submitted, before it has an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDraft {
    pub name: String,
    pub day: Weekday,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl SessionDraft {
    pub fn new(name: impl Into<String>, day: Weekday, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            name: name.into(),
            day,
            start,
            end,
        }
    }

    /// Parse the textual form fields (`day`, `HH:MM`, `HH:MM`).
    pub fn parse(name: &str, day: &str, start: &str, end: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(name, day.parse()?, start.parse()?, end.parse()?))
    }

    /// Checks the name is non-blank and the interval is valid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        validate_interval(self.start, self.end)
    }
}

/// A requested study session admitted to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRequest {
    pub id: String,
    pub name: String,
    pub day: Weekday,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub created_at: DateTime<Utc>,
}

impl SessionRequest {
    /// Validate a draft and give it a fresh id.
    pub fn admit(draft: SessionDraft) -> Result<Self, ValidationError> {
        draft.validate()?;
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: draft.name.trim().to_string(),
            day: draft.day,
            start: draft.start,
            end: draft.end,
            created_at: Utc::now(),
        })
    }

    /// True when `start < end`. Only rows built outside [`admit`](Self::admit)
    /// can fail this.
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Half-open overlap on the same day. Abutting sessions do not overlap.
    pub fn overlaps(&self, other: &SessionRequest) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}
