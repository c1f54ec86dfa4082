use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::{Deserialize, Serialize};

use super::render;
use crate::errors::AppError;
use crate::models::{RecordId, Route};
use crate::services::booking_list::{format_date, BookingList, DeleteOutcome};
use crate::state::AppState;

#[derive(Serialize)]
struct BookingCard {
    id: String,
    customer_name: String,
    status: String,
    service: String,
    date: String,
    time: String,
    email: String,
    phone: String,
    notes: String,
}

#[derive(Serialize)]
struct ListView<'a> {
    bookings: Vec<BookingCard>,
    error: &'a str,
}

fn render_list(state: &AppState, list: &BookingList) -> Result<Html<String>, AppError> {
    let bookings = list
        .bookings()
        .iter()
        .map(|b| BookingCard {
            id: b.id.to_string(),
            customer_name: b.customer_name.clone(),
            status: b.status.clone(),
            service: b.service.clone(),
            date: format_date(&b.date),
            time: b.time.clone(),
            email: b.email.clone(),
            phone: b.phone.clone(),
            notes: b.notes.clone(),
        })
        .collect();

    render(
        state,
        "booking_list.html",
        &ListView {
            bookings,
            error: list.error().unwrap_or_default(),
        },
    )
}

// GET /bookings
pub async fn list_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let mut list = BookingList::new();
    list.load(state.api.as_ref()).await;
    render_list(&state, &list)
}

#[derive(Deserialize)]
pub struct DeleteForm {
    /// Set by the browser's confirmation prompt.
    #[serde(default)]
    pub confirmed: bool,
}

// POST /bookings/:id/delete
pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    Form(form): Form<DeleteForm>,
) -> Result<Response, AppError> {
    let id = RecordId::from(raw_id.as_str());

    let mut list = BookingList::new();
    list.load(state.api.as_ref()).await;

    match list.delete(state.api.as_ref(), &id, form.confirmed).await {
        DeleteOutcome::Deleted | DeleteOutcome::Cancelled => {
            Ok(Redirect::to(Route::BookingList.path()).into_response())
        }
        DeleteOutcome::Failed => {
            let html = render_list(&state, &list)?;
            Ok((StatusCode::BAD_GATEWAY, html).into_response())
        }
    }
}
