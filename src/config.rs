/// Registration-form question whose answer carries the attendee's stated gender.
pub const GENDER_QUESTION: u64 = 76;

/// Value recorded when a position has no gender answer.
pub const GENDER_UNANSWERED: &str = "--";

/// Request timeout applied to every API call (seconds).
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Number of countries shown in the top-countries chart.
pub const TOP_COUNTRIES: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the pretix API, e.g. "https://pretix.eu/api/v1" (PRETIX_API_URL)
    pub api_url: String,
    /// Organizer short name (PRETIX_ORGANIZER_ID)
    pub organizer_id: String,
    /// Event short name; also names the snapshot files (PRETIX_EVENT_ID)
    pub event_id: String,
    /// API token sent as `Authorization: Token <token>` (PRETIX_API_TOKEN)
    pub api_token: String,
    pub log_level: String,
}

impl Config {
    /// Reads configuration from the process environment, honoring a local
    /// `.env` file. The four API values default to empty strings; an empty
    /// token fails authentication on the first request rather than here.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_url: std::env::var("PRETIX_API_URL").unwrap_or_default(),
            organizer_id: std::env::var("PRETIX_ORGANIZER_ID").unwrap_or_default(),
            event_id: std::env::var("PRETIX_EVENT_ID").unwrap_or_default(),
            api_token: std::env::var("PRETIX_API_TOKEN").unwrap_or_default(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
