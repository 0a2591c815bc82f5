use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::handlers::bookings::BookingResponse;
use crate::models::{parse_date, NewBooking};
use crate::services::finance;
use crate::state::AppState;

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// GET /api/admin/bookings
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub date: Option<String>,
}

pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let date = match query.date.as_deref() {
        Some(raw) => Some(parse_date(raw).map_err(|e| AppError::InvalidInput(e.to_string()))?),
        None => None,
    };

    let bookings = state.bookings.list(date)?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

// POST /api/admin/bookings
#[derive(Deserialize)]
pub struct ManualBookingRequest {
    pub customer_name: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub staff_id: String,
}

/// Walk-ins the owner records by hand. They carry no price and are pinned
/// to a staff member picked from the registry.
pub async fn create_manual_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<ManualBookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let staff = state.staff.get(&body.staff_id)?;

    let booking = state.bookings.create(NewBooking {
        service: body.service,
        price: "0".to_string(),
        date: body.date,
        time: body.time,
        customer_name: body.customer_name,
        customer_email: None,
        staff_name: Some(staff.name),
    })?;

    Ok(Json(booking.into()))
}

// POST /api/admin/bookings/:id/toggle-paid
pub async fn toggle_paid(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let updated = state.bookings.toggle_paid(&id)?;
    Ok(Json(serde_json::json!({"ok": true, "paid": updated.paid})))
}

// GET /api/admin/finance
#[derive(Serialize)]
pub struct FinanceSummaryResponse {
    total: String,
    paid: String,
    pending: String,
}

#[derive(Serialize)]
pub struct FinanceRowResponse {
    id: String,
    date: Option<String>,
    service: String,
    price: String,
    payment_state: String,
}

#[derive(Serialize)]
pub struct FinanceResponse {
    summary: FinanceSummaryResponse,
    rows: Vec<FinanceRowResponse>,
}

pub async fn get_finance(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<FinanceResponse>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let bookings = state.bookings.list(None)?;
    let summary = finance::summarize(&bookings);

    let rows = bookings
        .into_iter()
        .map(|b| {
            let price = b.price().to_string();
            let payment_state = if b.paid { "Paid" } else { "Pending" }.to_string();
            FinanceRowResponse {
                id: b.id,
                date: b.date.map(|d| d.to_string()),
                service: b.service,
                price,
                payment_state,
            }
        })
        .collect();

    Ok(Json(FinanceResponse {
        summary: FinanceSummaryResponse {
            total: summary.total.to_string(),
            paid: summary.paid.to_string(),
            pending: summary.pending.to_string(),
        },
        rows,
    }))
}

// GET /api/admin/blocks
#[derive(Serialize)]
pub struct BlockResponse {
    index: usize,
    date: String,
    time: Option<String>,
}

pub async fn get_blocks(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<BlockResponse>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let blocks = state.blocks.list()?;
    let response = blocks
        .into_iter()
        .enumerate()
        .map(|(index, block)| BlockResponse {
            index,
            date: block.date.to_string(),
            time: block.time.map(|t| t.to_string()),
        })
        .collect();

    Ok(Json(response))
}

// POST /api/admin/blocks
#[derive(Deserialize)]
pub struct AddBlockRequest {
    pub date: String,
    pub time: Option<String>,
}

pub async fn add_block(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<AddBlockRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    state.blocks.add(&body.date, body.time.as_deref())?;
    Ok(Json(serde_json::json!({"ok": true})))
}

// DELETE /api/admin/blocks/:index
pub async fn remove_block(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(index): Path<usize>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    state.blocks.remove(index)?;
    Ok(Json(serde_json::json!({"ok": true})))
}

// GET /api/admin/staff
#[derive(Serialize)]
pub struct StaffResponse {
    id: String,
    name: String,
}

pub async fn get_staff(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<StaffResponse>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let staff = state.staff.list()?;
    let response = staff
        .into_iter()
        .map(|s| StaffResponse { id: s.id, name: s.name })
        .collect();

    Ok(Json(response))
}

// POST /api/admin/staff
#[derive(Deserialize)]
pub struct AddStaffRequest {
    pub name: String,
}

pub async fn add_staff(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<AddStaffRequest>,
) -> Result<Json<StaffResponse>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let member = state.staff.add(&body.name)?;
    Ok(Json(StaffResponse { id: member.id, name: member.name }))
}
