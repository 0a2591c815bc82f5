use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{parse_date, Booking, NewBooking, TimeSlot};
use crate::services::availability;
use crate::state::AppState;

#[derive(Serialize)]
pub struct BookingResponse {
    pub id: String,
    pub service: String,
    pub price: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub staff_name: String,
    pub status: String,
    pub paid: bool,
    pub created_at: String,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        let price = b.price().to_string();
        BookingResponse {
            id: b.id,
            service: b.service,
            price,
            date: b.date.map(|d| d.to_string()),
            time: b.time.map(|t| t.to_string()),
            customer_name: b.customer_name,
            customer_email: b.customer_email,
            staff_name: b.staff_name,
            status: b.status.as_str().to_string(),
            paid: b.paid,
            created_at: b.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

// POST /api/bookings
#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub service: String,
    pub price: String,
    pub date: String,
    pub time: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateBookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let date = parse_date(&body.date).map_err(|e| AppError::InvalidInput(e.to_string()))?;
    let time = TimeSlot::parse(&body.time).map_err(|e| AppError::InvalidInput(e.to_string()))?;

    // The shop must actually offer this slot, and the owner must not have
    // closed it. Double booking is caught separately, inside the store.
    let blocks = state.blocks.list()?;
    let offered = availability::available_slots(date, &blocks);
    match offered.iter().find(|slot| slot.time == time) {
        None => {
            return Err(AppError::InvalidInput(format!(
                "{} is not a bookable time on {}",
                body.time, body.date
            )))
        }
        Some(slot) if slot.blocked => {
            return Err(AppError::SlotConflict(format!(
                "{} on {} is unavailable",
                body.time, body.date
            )))
        }
        Some(_) => {}
    }

    let booking = state.bookings.create(NewBooking {
        service: body.service,
        price: body.price,
        date: body.date,
        time: body.time,
        customer_name: body.customer_name,
        customer_email: body.customer_email,
        staff_name: None,
    })?;

    Ok(Json(booking.into()))
}

// GET /api/bookings
#[derive(Serialize)]
pub struct PartitionResponse {
    pub upcoming: Vec<BookingResponse>,
    pub past: Vec<BookingResponse>,
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PartitionResponse>, AppError> {
    let now = state.clock.now();
    let (upcoming, past) = state.bookings.partition(now)?;

    Ok(Json(PartitionResponse {
        upcoming: upcoming.into_iter().map(Into::into).collect(),
        past: past.into_iter().map(Into::into).collect(),
    }))
}

// POST /api/bookings/:id/cancel
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.bookings.cancel(&id)?;
    Ok(Json(serde_json::json!({"ok": true})))
}
