use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use uuid::Uuid;

use crate::db::storage;
use crate::errors::AppError;
use crate::models::{
    parse_date, Booking, BookingStatus, Money, NewBooking, TimeSlot, UNASSIGNED_STAFF,
};
use crate::services::clock::Clock;

/// Owns the booking collection. Every mutation loads, checks and saves
/// under one lock acquisition, so two requests can never both see a slot
/// as free and both take it.
pub struct BookingStore {
    db: Arc<Mutex<Connection>>,
    clock: Arc<dyn Clock>,
}

impl BookingStore {
    pub fn new(db: Arc<Mutex<Connection>>, clock: Arc<dyn Clock>) -> Self {
        Self { db, clock }
    }

    pub fn create(&self, new: NewBooking) -> Result<Booking, AppError> {
        let service = new.service.trim().to_string();
        if service.is_empty() {
            return Err(AppError::InvalidInput("service must not be empty".to_string()));
        }
        let customer_name = new.customer_name.trim().to_string();
        if customer_name.is_empty() {
            return Err(AppError::InvalidInput("customer name must not be empty".to_string()));
        }
        let date = parse_date(&new.date).map_err(|e| AppError::InvalidInput(e.to_string()))?;
        let time = TimeSlot::parse(&new.time).map_err(|e| AppError::InvalidInput(e.to_string()))?;
        let price = Money::parse(&new.price).map_err(|e| AppError::InvalidInput(e.to_string()))?;
        let staff_name = new
            .staff_name
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNASSIGNED_STAFF.to_string());
        let customer_email = new
            .customer_email
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let conn = self.db.lock().unwrap();
        let mut bookings: Vec<Booking> =
            storage::load_collection(&conn, storage::BOOKINGS_KEY)?;
        if bookings.iter().any(|b| b.occupies(date, time)) {
            return Err(AppError::SlotConflict(format!("{date} {time} is already booked")));
        }

        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            service,
            price_cents: price.cents(),
            date: Some(date),
            time: Some(time),
            customer_name,
            customer_email,
            staff_name,
            status: BookingStatus::Scheduled,
            paid: false,
            created_at: self.clock.now(),
        };
        bookings.push(booking.clone());
        storage::save_collection(&conn, storage::BOOKINGS_KEY, &bookings)?;

        tracing::info!("booking {} created for {} {}", booking.id, date, time);
        Ok(booking)
    }

    /// Cancelling releases the slot but keeps the record. Cancelling an
    /// already cancelled booking is a no-op.
    pub fn cancel(&self, id: &str) -> Result<Booking, AppError> {
        let conn = self.db.lock().unwrap();
        let mut bookings: Vec<Booking> =
            storage::load_collection(&conn, storage::BOOKINGS_KEY)?;
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("booking {id} not found")))?;

        if booking.status != BookingStatus::Cancelled {
            booking.status = BookingStatus::Cancelled;
            let cancelled = booking.clone();
            storage::save_collection(&conn, storage::BOOKINGS_KEY, &bookings)?;
            tracing::info!("booking {id} cancelled");
            return Ok(cancelled);
        }
        Ok(booking.clone())
    }

    pub fn toggle_paid(&self, id: &str) -> Result<Booking, AppError> {
        let conn = self.db.lock().unwrap();
        let mut bookings: Vec<Booking> =
            storage::load_collection(&conn, storage::BOOKINGS_KEY)?;
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("booking {id} not found")))?;

        booking.paid = !booking.paid;
        let updated = booking.clone();
        storage::save_collection(&conn, storage::BOOKINGS_KEY, &bookings)?;
        Ok(updated)
    }

    /// All bookings in insertion order, regardless of status. Cancelled
    /// records stay visible; nothing is ever deleted.
    pub fn list(&self, date: Option<NaiveDate>) -> Result<Vec<Booking>, AppError> {
        let conn = self.db.lock().unwrap();
        let bookings: Vec<Booking> = storage::load_collection(&conn, storage::BOOKINGS_KEY)?;
        Ok(match date {
            Some(date) => bookings.into_iter().filter(|b| b.date == Some(date)).collect(),
            None => bookings,
        })
    }

    /// Splits bookings into (upcoming, past) relative to `now`. A booking
    /// starting exactly at `now` counts as upcoming. Records without a
    /// usable date and time are left out of both halves.
    pub fn partition(&self, now: NaiveDateTime) -> Result<(Vec<Booking>, Vec<Booking>), AppError> {
        let bookings = self.list(None)?;
        let mut upcoming = Vec::new();
        let mut past = Vec::new();
        for booking in bookings {
            match booking.starts_at() {
                Some(starts) if starts >= now => upcoming.push(booking),
                Some(_) => past.push(booking),
                None => {}
            }
        }
        Ok((upcoming, past))
    }
}
