use std::sync::Mutex;

use async_trait::async_trait;

use super::{BookingApi, GatewayError, GatewayResult, Operation};
use crate::models::{Booking, BookingDraft, RecordId, Service, TimeSlot};

/// In-memory backend for controller tests.
#[derive(Default)]
pub struct MockApi {
    pub services: Vec<Service>,
    pub time_slots: Vec<TimeSlot>,
    pub bookings: Mutex<Vec<Booking>>,
    pub failing: Vec<Operation>,
    pub created: Mutex<Vec<BookingDraft>>,
    pub deleted: Mutex<Vec<RecordId>>,
}

impl MockApi {
    pub fn with_reference_data() -> Self {
        Self {
            services: vec![
                Service {
                    id: RecordId::Number(1),
                    name: "Haircut".to_string(),
                    price: 50.0,
                    duration: 30,
                },
                Service {
                    id: RecordId::Number(2),
                    name: "Massage".to_string(),
                    price: 80.0,
                    duration: 60,
                },
            ],
            time_slots: vec![TimeSlot("09:00".to_string()), TimeSlot("10:00".to_string())],
            ..Default::default()
        }
    }

    pub fn failing(mut self, operation: Operation) -> Self {
        self.failing.push(operation);
        self
    }

    pub fn create_calls(&self) -> usize {
        self.created.lock().unwrap().len()
    }

    fn check(&self, operation: Operation) -> GatewayResult<()> {
        if self.failing.contains(&operation) {
            return Err(GatewayError::request_failed(operation, "backend responded 500"));
        }
        Ok(())
    }
}

pub fn booking(id: u64, name: &str, date: &str) -> Booking {
    Booking {
        id: RecordId::Number(id),
        customer_name: name.to_string(),
        email: "john@example.com".to_string(),
        phone: "555-123-4567".to_string(),
        service: "Haircut".to_string(),
        date: date.to_string(),
        time: "10:00".to_string(),
        notes: String::new(),
        status: "confirmed".to_string(),
    }
}

#[async_trait]
impl BookingApi for MockApi {
    async fn list_bookings(&self) -> GatewayResult<Vec<Booking>> {
        self.check(Operation::ListBookings)?;
        Ok(self.bookings.lock().unwrap().clone())
    }

    async fn get_booking(&self, id: &RecordId) -> GatewayResult<Booking> {
        self.check(Operation::GetBooking)?;
        self.bookings
            .lock()
            .unwrap()
            .iter()
            .find(|b| &b.id == id)
            .cloned()
            .ok_or_else(|| GatewayError::request_failed(Operation::GetBooking, "404"))
    }

    async fn create_booking(&self, draft: &BookingDraft) -> GatewayResult<Booking> {
        self.created.lock().unwrap().push(draft.clone());
        self.check(Operation::CreateBooking)?;
        let mut bookings = self.bookings.lock().unwrap();
        let booking = Booking {
            id: RecordId::Number(bookings.len() as u64 + 1),
            customer_name: draft.customer_name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            service: draft.service.clone(),
            date: draft.date.clone(),
            time: draft.time.clone(),
            notes: draft.notes.clone(),
            status: draft.status.clone(),
        };
        bookings.push(booking.clone());
        Ok(booking)
    }

    async fn update_booking(&self, id: &RecordId, draft: &BookingDraft) -> GatewayResult<Booking> {
        self.check(Operation::UpdateBooking)?;
        let mut existing = self.get_booking(id).await?;
        existing.status = draft.status.clone();
        Ok(existing)
    }

    async fn delete_booking(&self, id: &RecordId) -> GatewayResult<serde_json::Value> {
        self.check(Operation::DeleteBooking)?;
        self.deleted.lock().unwrap().push(id.clone());
        self.bookings.lock().unwrap().retain(|b| &b.id != id);
        Ok(serde_json::json!({}))
    }

    async fn list_services(&self) -> GatewayResult<Vec<Service>> {
        self.check(Operation::ListServices)?;
        Ok(self.services.clone())
    }

    async fn list_time_slots(&self) -> GatewayResult<Vec<TimeSlot>> {
        self.check(Operation::ListTimeSlots)?;
        Ok(self.time_slots.clone())
    }
}
