use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{BookingDraft, Field};
use crate::services::validation::{self, FieldErrors};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldState {
    pub touched: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FieldState {
    /// An error is only shown once the field has been touched.
    pub fn visible_error(&self) -> Option<&str> {
        if self.touched {
            self.error.as_deref()
        } else {
            None
        }
    }
}

/// Values and per-field validation state of the booking form.
///
/// Every event consumes the current state and returns the next one, so
/// callers always hold a complete snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub values: BookingDraft,
    pub fields: BTreeMap<Field, FieldState>,
}

impl FormState {
    pub fn from_draft(values: BookingDraft) -> Self {
        Self {
            values,
            fields: BTreeMap::new(),
        }
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.fields.get(&field).is_some_and(|s| s.touched)
    }

    /// Stores the new value. Touched fields are re-validated right away so a
    /// corrected value clears its error without another blur.
    pub fn change(mut self, field: Field, value: impl Into<String>, today: NaiveDate) -> Self {
        self.values.set(field, value);
        if self.is_touched(field) {
            self.revalidate(field, today);
        }
        self
    }

    /// Marks the field touched and validates it.
    pub fn blur(mut self, field: Field, value: impl Into<String>, today: NaiveDate) -> Self {
        self.values.set(field, value);
        self.fields.entry(field).or_default().touched = true;
        self.revalidate(field, today);
        self
    }

    /// Validates and touches every required field, making all of their
    /// errors visible at once.
    pub fn touch_all_required(mut self, today: NaiveDate) -> Self {
        for field in Field::REQUIRED {
            self.fields.entry(field).or_default().touched = true;
            self.revalidate(field, today);
        }
        self
    }

    pub fn visible_error(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).and_then(FieldState::visible_error)
    }

    pub fn visible_errors(&self) -> FieldErrors {
        self.fields
            .iter()
            .filter_map(|(field, state)| state.visible_error().map(|e| (*field, e.to_string())))
            .collect()
    }

    fn revalidate(&mut self, field: Field, today: NaiveDate) {
        let error = validation::validate(field, self.values.get(field), today);
        self.fields.entry(field).or_default().error = error;
    }
}
