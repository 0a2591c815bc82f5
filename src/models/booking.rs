use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::money::Money;
use crate::models::slot::TimeSlot;

/// Staff name recorded when a customer books without picking anyone.
pub const UNASSIGNED_STAFF: &str = "Unassigned";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub service: String,
    pub price_cents: i64,
    // date and time stay optional: records written by earlier versions may
    // lack them, and such records must still load and count toward totals.
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub staff_name: String,
    pub status: BookingStatus,
    #[serde(default)]
    pub paid: bool,
    pub created_at: NaiveDateTime,
}

impl Booking {
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        let date = self.date?;
        let time = self.time?;
        date.and_hms_opt(time.hour(), time.minute(), 0)
    }

    /// Whether this booking holds the given slot against new bookings.
    pub fn occupies(&self, date: NaiveDate, time: TimeSlot) -> bool {
        self.status == BookingStatus::Scheduled
            && self.date == Some(date)
            && self.time == Some(time)
    }
}

/// Raw request fields for a new booking. Everything arrives as text and is
/// validated when the booking is created.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub service: String,
    pub price: String,
    pub date: String,
    pub time: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub staff_name: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Scheduled,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Scheduled => "scheduled",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "cancelled" => BookingStatus::Cancelled,
            _ => BookingStatus::Scheduled,
        }
    }
}

impl From<String> for BookingStatus {
    fn from(s: String) -> Self {
        BookingStatus::from_str(&s)
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        status.as_str().to_string()
    }
}
