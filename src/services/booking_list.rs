use chrono::NaiveDate;

use crate::models::{Booking, LoadState, RecordId};
use crate::services::api::BookingApi;

pub const LOAD_FAILED_MESSAGE: &str =
    "Failed to load bookings. Please make sure the backend is running.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete booking. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation prompt.
    Cancelled,
    Deleted,
    Failed,
}

/// Controller behind the booking list page.
#[derive(Debug, Default)]
pub struct BookingList {
    bookings: LoadState<Vec<Booking>>,
    error: Option<String>,
}

impl BookingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_state(&self) -> &LoadState<Vec<Booking>> {
        &self.bookings
    }

    pub fn bookings(&self) -> &[Booking] {
        self.bookings.ready().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn load(&mut self, api: &dyn BookingApi) {
        self.bookings = LoadState::Loading;
        match api.list_bookings().await {
            Ok(bookings) => {
                self.bookings = LoadState::Ready(bookings);
                self.error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load bookings");
                self.bookings = LoadState::Failed(LOAD_FAILED_MESSAGE.to_string());
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Deletes a booking once the user has confirmed. The local list only
    /// changes when the backend accepted the delete.
    pub async fn delete(
        &mut self,
        api: &dyn BookingApi,
        id: &RecordId,
        confirmed: bool,
    ) -> DeleteOutcome {
        if !confirmed {
            return DeleteOutcome::Cancelled;
        }

        match api.delete_booking(id).await {
            Ok(_) => {
                tracing::info!(%id, "booking deleted");
                if let LoadState::Ready(bookings) = &mut self.bookings {
                    bookings.retain(|b| &b.id != id);
                }
                DeleteOutcome::Deleted
            }
            Err(e) => {
                tracing::error!(%id, error = %e, "failed to delete booking");
                self.error = Some(DELETE_FAILED_MESSAGE.to_string());
                DeleteOutcome::Failed
            }
        }
    }
}

/// Long display form of a stored `YYYY-MM-DD` date, e.g. `December 15, 2025`.
/// Anything else is shown as stored.
pub fn format_date(date: &str) -> String {
    let date_part = date.get(..10).unwrap_or(date);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(d) => d.format("%B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}
