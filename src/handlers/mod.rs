pub mod booking_form;
pub mod booking_list;
pub mod health;
pub mod home;

use std::sync::Arc;

use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::errors::AppError;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(home::home_page))
        .route(
            "/book",
            get(booking_form::form_page).post(booking_form::submit_booking),
        )
        .route("/api/book/field", post(booking_form::field_event))
        .route("/bookings", get(booking_list::list_page))
        .route("/bookings/:id/delete", post(booking_list::delete_booking))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Date the booking window is measured from.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn render<T: Serialize>(
    state: &AppState,
    template: &str,
    view: &T,
) -> Result<Html<String>, AppError> {
    let context = tera::Context::from_serialize(view)?;
    Ok(Html(state.templates.render(template, &context)?))
}
