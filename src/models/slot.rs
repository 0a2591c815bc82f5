use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A bookable half-hour position on the clock. Only :00 and :30 starts exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    hour: u32,
    minute: u32,
}

impl TimeSlot {
    pub fn new(hour: u32, minute: u32) -> anyhow::Result<Self> {
        if hour > 23 {
            return Err(anyhow::anyhow!("hour out of range: {hour}"));
        }
        if minute != 0 && minute != 30 {
            return Err(anyhow::anyhow!("minute must be 00 or 30, got: {minute}"));
        }
        Ok(Self { hour, minute })
    }

    pub fn parse(s: &str) -> anyhow::Result<Self> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.len() != 2 {
            return Err(anyhow::anyhow!("invalid time format: {s}"));
        }
        let hour: u32 = parts[0]
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid hour in: {s}"))?;
        let minute: u32 = parts[1]
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid minute in: {s}"))?;
        Self::new(hour, minute)
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("invalid date format: {s}"))
}
