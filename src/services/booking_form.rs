use chrono::NaiveDate;

use crate::models::{Booking, BookingDraft, Field, LoadState, Route, Service, TimeSlot};
use crate::services::api::{BookingApi, GatewayError, GatewayResult};
use crate::services::form_state::FormState;
use crate::services::validation::{self, FieldErrors};

pub const LOAD_FAILED_MESSAGE: &str =
    "Failed to load form data. Please make sure the backend is running.";
pub const FIX_ERRORS_MESSAGE: &str = "Please fix the errors below before submitting";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create booking. Please try again.";

/// Select options for the form, both lists loaded together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceData {
    pub services: Vec<Service>,
    pub time_slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Validating,
    Submitting,
    Navigated,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("a booking is already being submitted")]
    InFlight,

    #[error("{} field(s) need fixing", .0.len())]
    Invalid(FieldErrors),

    #[error(transparent)]
    Remote(#[from] GatewayError),
}

/// Controller behind the booking form page.
///
/// Owns the field state, the reference data used by the selects and the
/// submission state machine:
///
/// `Idle -> Validating -> (Idle | Submitting) -> (Navigated | Idle with error)`
pub struct BookingForm {
    state: FormState,
    reference: LoadState<ReferenceData>,
    phase: SubmitPhase,
    form_error: Option<String>,
    focus: Option<Field>,
    today: NaiveDate,
}

impl BookingForm {
    pub fn new(today: NaiveDate) -> Self {
        Self::with_state(FormState::default(), today)
    }

    /// Resumes a form whose field state was kept elsewhere, e.g. posted back by the browser.
    pub fn with_state(state: FormState, today: NaiveDate) -> Self {
        Self {
            state,
            reference: LoadState::NotStarted,
            phase: SubmitPhase::Idle,
            form_error: None,
            focus: None,
            today,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn into_state(self) -> FormState {
        self.state
    }

    pub fn values(&self) -> &BookingDraft {
        &self.state.values
    }

    pub fn reference(&self) -> &LoadState<ReferenceData> {
        &self.reference
    }

    /// Loaded services, empty until reference data is ready.
    pub fn services(&self) -> &[Service] {
        self.reference
            .ready()
            .map(|r| r.services.as_slice())
            .unwrap_or_default()
    }

    pub fn time_slots(&self) -> &[TimeSlot] {
        self.reference
            .ready()
            .map(|r| r.time_slots.as_slice())
            .unwrap_or_default()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// First invalid field after a blocked submit.
    pub fn focus(&self) -> Option<Field> {
        self.focus
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn min_date(&self) -> String {
        self.today.format("%Y-%m-%d").to_string()
    }

    pub fn max_date(&self) -> String {
        validation::latest_bookable_date(self.today)
            .format("%Y-%m-%d")
            .to_string()
    }

    pub fn submit_disabled(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submit_disabled() {
            "Booking..."
        } else {
            "Book Appointment"
        }
    }

    /// Fetches services and time slots concurrently. Either failing fails
    /// the whole load; the selects then only offer their placeholder.
    pub async fn mount(&mut self, api: &dyn BookingApi) {
        self.reference = LoadState::Loading;

        match tokio::try_join!(api.list_services(), api.list_time_slots()) {
            Ok((services, time_slots)) => {
                tracing::debug!(
                    services = services.len(),
                    time_slots = time_slots.len(),
                    "booking form reference data loaded"
                );
                self.reference = LoadState::Ready(ReferenceData {
                    services,
                    time_slots,
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load booking form data");
                self.reference = LoadState::Failed(LOAD_FAILED_MESSAGE.to_string());
                self.form_error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub fn on_change(&mut self, field: Field, value: impl Into<String>) {
        self.state = std::mem::take(&mut self.state).change(field, value, self.today);
    }

    pub fn on_blur(&mut self, field: Field, value: impl Into<String>) {
        self.state = std::mem::take(&mut self.state).blur(field, value, self.today);
    }

    pub fn cancel(&self) -> Route {
        Route::Home
    }

    /// Validates every required field and, if all pass, moves to
    /// `Submitting` and hands out the draft to send.
    pub fn begin_submit(&mut self) -> Result<BookingDraft, SubmitError> {
        if self.phase == SubmitPhase::Submitting {
            return Err(SubmitError::InFlight);
        }

        self.phase = SubmitPhase::Validating;
        self.form_error = None;
        self.focus = None;
        self.state = std::mem::take(&mut self.state).touch_all_required(self.today);

        let errors = validation::validate_draft(&self.state.values, self.today);
        if let Some(first) = errors.keys().next() {
            tracing::debug!(invalid = errors.len(), first = first.as_str(), "booking submit blocked");
            self.focus = Some(*first);
            self.form_error = Some(FIX_ERRORS_MESSAGE.to_string());
            self.phase = SubmitPhase::Idle;
            return Err(SubmitError::Invalid(errors));
        }

        self.phase = SubmitPhase::Submitting;
        Ok(self.state.values.clone())
    }

    /// Applies the outcome of the create call started by [`Self::begin_submit`].
    /// On failure the entered values stay in place for a retry.
    pub fn finish_submit(&mut self, result: GatewayResult<Booking>) -> Result<Route, SubmitError> {
        match result {
            Ok(booking) => {
                tracing::info!(id = %booking.id, service = %booking.service, "booking created");
                self.phase = SubmitPhase::Navigated;
                Ok(Route::BookingList)
            }
            Err(e) => {
                self.form_error = Some(CREATE_FAILED_MESSAGE.to_string());
                self.phase = SubmitPhase::Idle;
                Err(SubmitError::Remote(e))
            }
        }
    }

    pub async fn submit(&mut self, api: &dyn BookingApi) -> Result<Route, SubmitError> {
        let draft = self.begin_submit()?;
        let result = api.create_booking(&draft).await;
        self.finish_submit(result)
    }
}
