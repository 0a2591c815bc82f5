use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::TimeSlot;

const OPENING_HOUR: u32 = 7;
const WEEKDAY_CLOSING_HOUR: u32 = 18;
const SATURDAY_CLOSING_HOUR: u32 = 13;
const LUNCH_HOUR: u32 = 12;

/// Every slot the shop offers on the given date, in clock order.
/// Sundays are closed and the lunch hour is never offered.
pub fn slots_for(date: NaiveDate) -> Vec<TimeSlot> {
    let closing = match date.weekday() {
        Weekday::Sun => return vec![],
        Weekday::Sat => SATURDAY_CLOSING_HOUR,
        _ => WEEKDAY_CLOSING_HOUR,
    };

    let mut slots = Vec::new();
    for hour in OPENING_HOUR..closing {
        if hour == LUNCH_HOUR {
            continue;
        }
        for minute in [0, 30] {
            if let Ok(slot) = TimeSlot::new(hour, minute) {
                slots.push(slot);
            }
        }
    }
    slots
}
