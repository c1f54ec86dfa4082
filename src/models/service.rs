use serde::{Deserialize, Serialize};

use super::RecordId;

/// Bookable service offered by the business. Reference data, never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: RecordId,
    pub name: String,
    pub price: f64,
    /// Minutes.
    pub duration: u32,
}

impl Service {
    /// Option label shown in the service select, e.g. `Haircut - $50 (30 mins)`.
    pub fn option_label(&self) -> String {
        format!("{} - ${} ({} mins)", self.name, format_price(self.price), self.duration)
    }
}

fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        format!("{price:.2}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSlot(pub String);

impl TimeSlot {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
