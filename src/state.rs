use tera::Tera;

use crate::services::api::BookingApi;

pub struct AppState {
    pub api: Box<dyn BookingApi>,
    pub templates: Tera,
}
