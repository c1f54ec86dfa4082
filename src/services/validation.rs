use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::{Months, NaiveDate};
use regex::Regex;

use crate::models::{BookingDraft, Field};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 254;
pub const PHONE_MIN_DIGITS: usize = 10;
pub const PHONE_MAX_DIGITS: usize = 15;
pub const NOTES_MAX_CHARS: usize = 500;
pub const BOOKING_HORIZON_MONTHS: u32 = 6;

/// Failing fields and their messages, ordered as the fields appear on the form.
pub type FieldErrors = BTreeMap<Field, String>;

/// Checks a single field value. Returns the message of the first failing rule.
/// Notes are measured as typed since they are sent as typed; every other
/// rule sees the trimmed value.
pub fn validate(field: Field, value: &str, today: NaiveDate) -> Option<String> {
    if field == Field::Notes {
        return (value.chars().count() > NOTES_MAX_CHARS)
            .then(|| format!("Notes must be at most {NOTES_MAX_CHARS} characters"));
    }

    let value = value.trim();
    match field {
        Field::CustomerName => validate_name(value),
        Field::Email => validate_email(value),
        Field::Phone => validate_phone(value),
        Field::Service => required(value, "Please select a service"),
        Field::Date => validate_date(value, today),
        Field::Time => required(value, "Please select a time"),
        Field::Notes | Field::Status => None,
    }
}

/// Runs every required field of the draft through [`validate`].
pub fn validate_draft(draft: &BookingDraft, today: NaiveDate) -> FieldErrors {
    Field::REQUIRED
        .into_iter()
        .filter_map(|field| validate(field, draft.get(field), today).map(|e| (field, e)))
        .collect()
}

/// Last day a booking may be made for.
pub fn latest_bookable_date(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_months(Months::new(BOOKING_HORIZON_MONTHS))
        .unwrap_or(NaiveDate::MAX)
}

fn required(value: &str, message: &str) -> Option<String> {
    value.is_empty().then(|| message.to_string())
}

fn validate_name(value: &str) -> Option<String> {
    static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = NAME_REGEX.get_or_init(|| Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ\s'-]+$").unwrap());

    let len = value.chars().count();
    if value.is_empty() {
        Some("Name cannot be empty".to_string())
    } else if len < NAME_MIN_CHARS {
        Some(format!("Name must be at least {NAME_MIN_CHARS} characters"))
    } else if len > NAME_MAX_CHARS {
        Some(format!("Name must be at most {NAME_MAX_CHARS} characters"))
    } else if !regex.is_match(value) {
        Some("Name can only contain letters, spaces, hyphens, and apostrophes".to_string())
    } else {
        None
    }
}

fn validate_email(value: &str) -> Option<String> {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

    if value.is_empty() {
        Some("Email cannot be empty".to_string())
    } else if !regex.is_match(value) {
        Some("Please enter a valid email address".to_string())
    } else if value.chars().count() > EMAIL_MAX_CHARS {
        Some(format!("Email must be at most {EMAIL_MAX_CHARS} characters"))
    } else {
        None
    }
}

fn validate_phone(value: &str) -> Option<String> {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = PHONE_REGEX.get_or_init(|| Regex::new(r"^[0-9\s()+-]+$").unwrap());

    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if value.is_empty() {
        Some("Phone number cannot be empty".to_string())
    } else if digits < PHONE_MIN_DIGITS {
        Some(format!("Phone number must have at least {PHONE_MIN_DIGITS} digits"))
    } else if digits > PHONE_MAX_DIGITS {
        Some(format!("Phone number must have at most {PHONE_MAX_DIGITS} digits"))
    } else if !regex.is_match(value) {
        Some("Phone number can only contain digits, spaces, and + - ( )".to_string())
    } else {
        None
    }
}

fn validate_date(value: &str, today: NaiveDate) -> Option<String> {
    if value.is_empty() {
        return Some("Please select a date".to_string());
    }
    let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") else {
        return Some("Please enter a valid date".to_string());
    };
    if date < today {
        Some("Date cannot be in the past".to_string())
    } else if date > latest_bookable_date(today) {
        Some(format!(
            "Date cannot be more than {BOOKING_HORIZON_MONTHS} months in the future"
        ))
    } else {
        None
    }
}
