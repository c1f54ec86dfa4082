pub mod booking;
pub mod field;
pub mod page;
pub mod service;

pub use booking::{Booking, BookingDraft, RecordId, DEFAULT_STATUS};
pub use field::Field;
pub use page::{LoadState, Route};
pub use service::{Service, TimeSlot};
