use crate::models::{Booking, Money};

/// Totals over every booking ever taken. Cancelled bookings still count:
/// the ledger tracks money owed and received, not attendance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinanceSummary {
    pub total: Money,
    pub paid: Money,
    pub pending: Money,
}

pub fn summarize(bookings: &[Booking]) -> FinanceSummary {
    let total: Money = bookings.iter().map(Booking::price).sum();
    let paid: Money = bookings.iter().filter(|b| b.paid).map(Booking::price).sum();
    FinanceSummary { total, paid, pending: total - paid }
}
