use serde::Serialize;

/// Pages a controller can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Route {
    Home,
    BookingList,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::BookingList => "/bookings",
        }
    }
}

/// Progress of one remote data source feeding a page.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    NotStarted,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::NotStarted
    }
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }
}
