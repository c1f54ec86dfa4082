use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use super::{BookingApi, GatewayError, GatewayResult, Operation};
use crate::models::{Booking, BookingDraft, RecordId, Service, TimeSlot};

/// [`BookingApi`] over the backend's JSON REST endpoints.
pub struct HttpBookingApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBookingApi {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a request to `base_url` followed by `segments`. Each segment is
    /// percent-encoded, so ids containing `/`, `?` or `#` stay one segment.
    fn request(
        &self,
        operation: Operation,
        method: Method,
        segments: &[&str],
    ) -> GatewayResult<RequestBuilder> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| failed(operation, format!("invalid backend url: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| failed(operation, "backend url cannot take a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(self.client.request(method, url))
    }

    async fn send(&self, operation: Operation, request: RequestBuilder) -> GatewayResult<Response> {
        let resp = request
            .send()
            .await
            .map_err(|e| failed(operation, e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(failed(operation, format!("backend responded {status}")));
        }
        Ok(resp)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> GatewayResult<T> {
        self.send(operation, request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| failed(operation, format!("unreadable response body: {e}")))
    }
}

fn failed(operation: Operation, reason: String) -> GatewayError {
    tracing::warn!(operation = operation.as_str(), %reason, "backend request failed");
    GatewayError::request_failed(operation, reason)
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn list_bookings(&self) -> GatewayResult<Vec<Booking>> {
        let op = Operation::ListBookings;
        let req = self.request(op, Method::GET, &["bookings"])?;
        self.execute(op, req).await
    }

    async fn get_booking(&self, id: &RecordId) -> GatewayResult<Booking> {
        let op = Operation::GetBooking;
        let req = self.request(op, Method::GET, &["bookings", &id.to_string()])?;
        self.execute(op, req).await
    }

    async fn create_booking(&self, draft: &BookingDraft) -> GatewayResult<Booking> {
        let op = Operation::CreateBooking;
        let req = self.request(op, Method::POST, &["bookings"])?.json(draft);
        self.execute(op, req).await
    }

    async fn update_booking(&self, id: &RecordId, draft: &BookingDraft) -> GatewayResult<Booking> {
        let op = Operation::UpdateBooking;
        let req = self
            .request(op, Method::PUT, &["bookings", &id.to_string()])?
            .json(draft);
        self.execute(op, req).await
    }

    async fn delete_booking(&self, id: &RecordId) -> GatewayResult<serde_json::Value> {
        let op = Operation::DeleteBooking;
        let req = self.request(op, Method::DELETE, &["bookings", &id.to_string()])?;
        let body = self
            .send(op, req)
            .await?
            .bytes()
            .await
            .map_err(|e| failed(op, e.to_string()))?;

        // Some stores answer 204 with no body.
        if body.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_slice(&body)
            .map_err(|e| failed(op, format!("unreadable response body: {e}")))
    }

    async fn list_services(&self) -> GatewayResult<Vec<Service>> {
        let op = Operation::ListServices;
        let req = self.request(op, Method::GET, &["services"])?;
        self.execute(op, req).await
    }

    async fn list_time_slots(&self) -> GatewayResult<Vec<TimeSlot>> {
        let op = Operation::ListTimeSlots;
        let req = self.request(op, Method::GET, &["timeSlots"])?;
        self.execute(op, req).await
    }
}
