use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use super::{render, today};
use crate::errors::AppError;
use crate::models::{BookingDraft, Field, TimeSlot, DEFAULT_STATUS};
use crate::services::booking_form::{BookingForm, SubmitError};
use crate::services::form_state::FormState;
use crate::services::validation::FieldErrors;
use crate::state::AppState;

#[derive(Serialize)]
struct ServiceOption {
    name: String,
    label: String,
}

#[derive(Serialize)]
struct FormView<'a> {
    values: &'a BookingDraft,
    /// One entry per field, empty when nothing should be shown.
    errors: BTreeMap<&'static str, String>,
    form_error: &'a str,
    focus: &'static str,
    services: Vec<ServiceOption>,
    time_slots: &'a [TimeSlot],
    min_date: String,
    max_date: String,
    submit_label: &'static str,
    submit_disabled: bool,
    cancel_path: &'static str,
    state_json: String,
}

fn render_form(state: &AppState, form: &BookingForm) -> Result<String, AppError> {
    let visible = form.state().visible_errors();
    let errors = Field::ALL
        .into_iter()
        .map(|f| (f.as_str(), visible.get(&f).cloned().unwrap_or_default()))
        .collect();

    let view = FormView {
        values: form.values(),
        errors,
        form_error: form.form_error().unwrap_or_default(),
        focus: form.focus().map(|f| f.as_str()).unwrap_or_default(),
        services: form
            .services()
            .iter()
            .map(|s| ServiceOption {
                name: s.name.clone(),
                label: s.option_label(),
            })
            .collect(),
        time_slots: form.time_slots(),
        min_date: form.min_date(),
        max_date: form.max_date(),
        submit_label: form.submit_label(),
        submit_disabled: form.submit_disabled(),
        cancel_path: form.cancel().path(),
        state_json: serde_json::to_string(form.state()).unwrap_or_else(|_| "{}".to_string()),
    };
    Ok(render(state, "booking_form.html", &view)?.0)
}

// GET /book
pub async fn form_page(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let mut form = BookingForm::new(today());
    form.mount(state.api.as_ref()).await;
    Ok(Html(render_form(&state, &form)?).into_response())
}

// POST /book
pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    Form(mut draft): Form<BookingDraft>,
) -> Result<Response, AppError> {
    draft.status = DEFAULT_STATUS.to_string();
    let mut form = BookingForm::with_state(FormState::from_draft(draft), today());

    let status = match form.submit(state.api.as_ref()).await {
        Ok(route) => return Ok(Redirect::to(route.path()).into_response()),
        Err(SubmitError::Remote(_)) => StatusCode::BAD_GATEWAY,
        Err(SubmitError::Invalid(_) | SubmitError::InFlight) => StatusCode::UNPROCESSABLE_ENTITY,
    };

    // The selects need their options again for the re-rendered form.
    form.mount(state.api.as_ref()).await;
    let html = render_form(&state, &form)?;
    Ok((status, Html(html)).into_response())
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldEventKind {
    Change,
    Blur,
}

#[derive(Deserialize)]
pub struct FieldEvent {
    #[serde(default)]
    pub state: FormState,
    pub field: String,
    #[serde(default)]
    pub value: String,
    pub event: FieldEventKind,
}

#[derive(Serialize)]
pub struct FieldEventResponse {
    pub state: FormState,
    pub errors: FieldErrors,
}

// POST /api/book/field
pub async fn field_event(
    Json(payload): Json<FieldEvent>,
) -> Result<Json<FieldEventResponse>, AppError> {
    let field = Field::parse(&payload.field)
        .filter(|f| *f != Field::Status)
        .ok_or_else(|| AppError::UnknownField(payload.field.clone()))?;

    let mut form = BookingForm::with_state(payload.state, today());
    match payload.event {
        FieldEventKind::Change => form.on_change(field, payload.value),
        FieldEventKind::Blur => form.on_blur(field, payload.value),
    }

    let state = form.into_state();
    Ok(Json(FieldEventResponse {
        errors: state.visible_errors(),
        state,
    }))
}
