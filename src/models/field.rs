use serde::{Deserialize, Serialize};

/// Booking form fields, in the order they appear on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    CustomerName,
    Email,
    Phone,
    Service,
    Date,
    Time,
    Notes,
    Status,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::CustomerName,
        Field::Email,
        Field::Phone,
        Field::Service,
        Field::Date,
        Field::Time,
        Field::Notes,
        Field::Status,
    ];

    /// Fields swept on submit. Notes are optional and status is not user-editable.
    pub const REQUIRED: [Field; 6] = [
        Field::CustomerName,
        Field::Email,
        Field::Phone,
        Field::Service,
        Field::Date,
        Field::Time,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CustomerName => "customerName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Service => "service",
            Field::Date => "date",
            Field::Time => "time",
            Field::Notes => "notes",
            Field::Status => "status",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.as_str() == s)
    }
}
