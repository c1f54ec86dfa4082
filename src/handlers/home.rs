use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use serde::Serialize;

use super::render;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Serialize)]
struct CatalogueItem {
    name: &'static str,
    description: &'static str,
    price: u32,
    duration: u32,
}

const CATALOGUE: [CatalogueItem; 4] = [
    CatalogueItem {
        name: "Haircut",
        description: "Professional haircut and styling",
        price: 50,
        duration: 30,
    },
    CatalogueItem {
        name: "Massage",
        description: "Relaxing full body massage",
        price: 80,
        duration: 60,
    },
    CatalogueItem {
        name: "Facial",
        description: "Deep cleansing facial treatment",
        price: 70,
        duration: 45,
    },
    CatalogueItem {
        name: "Manicure",
        description: "Hand care and nail polish",
        price: 40,
        duration: 30,
    },
];

#[derive(Serialize)]
struct HomeView<'a> {
    catalogue: &'a [CatalogueItem],
}

pub async fn home_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    render(&state, "home.html", &HomeView { catalogue: &CATALOGUE })
}
