pub mod availability;
pub mod booking;
pub mod clock;
pub mod finance;
pub mod schedule;
pub mod staff;
