use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    /// Base URL of the bookings backend.
    pub api_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            api_url: env::var("API_URL").unwrap_or_else(|_| "http://localhost:3001".to_string()),
        }
    }
}
