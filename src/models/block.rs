use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::slot::TimeSlot;

/// An owner-declared closure. `time: None` blocks the whole day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub date: NaiveDate,
    pub time: Option<TimeSlot>,
}

impl Block {
    pub fn covers(&self, date: NaiveDate, time: TimeSlot) -> bool {
        self.date == date && self.time.map_or(true, |t| t == time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_whole_day_block_covers_every_slot() {
        let block = Block { date: d("2024-03-04"), time: None };
        assert!(block.covers(d("2024-03-04"), TimeSlot::parse("07:00").unwrap()));
        assert!(block.covers(d("2024-03-04"), TimeSlot::parse("17:30").unwrap()));
        assert!(!block.covers(d("2024-03-05"), TimeSlot::parse("07:00").unwrap()));
    }

    #[test]
    fn test_timed_block_covers_single_slot() {
        let block = Block {
            date: d("2024-03-04"),
            time: Some(TimeSlot::parse("09:00").unwrap()),
        };
        assert!(block.covers(d("2024-03-04"), TimeSlot::parse("09:00").unwrap()));
        assert!(!block.covers(d("2024-03-04"), TimeSlot::parse("09:30").unwrap()));
    }

    #[test]
    fn test_serde_whole_day_uses_null_time() {
        let block = Block { date: d("2024-03-04"), time: None };
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, r#"{"date":"2024-03-04","time":null}"#);
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }
}
