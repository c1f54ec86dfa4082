use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::Field;

/// Status every new booking is created with. Only the backend changes it afterwards.
pub const DEFAULT_STATUS: &str = "confirmed";

/// Identifier assigned by the backend. Generic REST stores hand out either
/// numbers or strings, so both are accepted. Two ids are equal when they
/// print the same, so `7` and `"7"` name the same record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RecordId::Number(a), RecordId::Number(b)) => a == b,
            (RecordId::Text(a), RecordId::Text(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl Eq for RecordId {}

impl Hash for RecordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

/// Parses a path segment. Only canonical integers become `Number`, so
/// `"007"` stays the text it was given.
impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        match s.parse::<u64>() {
            Ok(n) if n.to_string() == s => RecordId::Number(n),
            _ => RecordId::Text(s.to_string()),
        }
    }
}

/// A booking as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: RecordId,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "default_status")]
    pub status: String,
}

/// Client-held booking under construction in the form. Values are kept
/// exactly as typed; validation trims all but notes, the create request
/// does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingDraft {
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub notes: String,
    pub status: String,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            email: String::new(),
            phone: String::new(),
            service: String::new(),
            date: String::new(),
            time: String::new(),
            notes: String::new(),
            status: default_status(),
        }
    }
}

impl BookingDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::CustomerName => &self.customer_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Service => &self.service,
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Notes => &self.notes,
            Field::Status => &self.status,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::CustomerName => &mut self.customer_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Service => &mut self.service,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Notes => &mut self.notes,
            Field::Status => &mut self.status,
        };
        *slot = value.into();
    }
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}
