pub mod http;
#[cfg(test)]
pub mod mock;

use std::fmt;

use async_trait::async_trait;

use crate::models::{Booking, BookingDraft, RecordId, Service, TimeSlot};

/// Backend call a [`GatewayError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListBookings,
    GetBooking,
    CreateBooking,
    UpdateBooking,
    DeleteBooking,
    ListServices,
    ListTimeSlots,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::ListBookings => "fetch bookings",
            Operation::GetBooking => "fetch booking",
            Operation::CreateBooking => "create booking",
            Operation::UpdateBooking => "update booking",
            Operation::DeleteBooking => "delete booking",
            Operation::ListServices => "fetch services",
            Operation::ListTimeSlots => "fetch time slots",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any failed backend call. Status codes and bodies are not interpreted.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    #[error("Failed to {operation}")]
    RequestFailed { operation: Operation, reason: String },
}

impl GatewayError {
    pub fn request_failed(operation: Operation, reason: impl fmt::Display) -> Self {
        GatewayError::RequestFailed {
            operation,
            reason: reason.to_string(),
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            GatewayError::RequestFailed { operation, .. } => *operation,
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// The bookings backend: booking CRUD plus the reference lists for the form.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn list_bookings(&self) -> GatewayResult<Vec<Booking>>;
    async fn get_booking(&self, id: &RecordId) -> GatewayResult<Booking>;
    async fn create_booking(&self, draft: &BookingDraft) -> GatewayResult<Booking>;
    async fn update_booking(&self, id: &RecordId, draft: &BookingDraft) -> GatewayResult<Booking>;
    /// Returns whatever body the backend answers with.
    async fn delete_booking(&self, id: &RecordId) -> GatewayResult<serde_json::Value>;
    async fn list_services(&self) -> GatewayResult<Vec<Service>>;
    async fn list_time_slots(&self) -> GatewayResult<Vec<TimeSlot>>;
}
