/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Enable automatic data refresh polling
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Polling interval in milliseconds (30 seconds)
    pub const POLLING_INTERVAL_MS: u32 = 30_000;

    /// Number of orders requested for the recent-orders table
    pub const RECENT_ORDERS_LIMIT: u32 = 50;

    /// Minimum time the refresh spinner stays visible
    pub const MIN_REFRESH_SPINNER_MS: u32 = 500;

    /// How long the refresh success indicator is shown
    pub const REFRESH_SUCCESS_MS: u32 = 1_500;

    /// Days shown on the revenue trend charts
    pub const REVENUE_CHART_DAYS: usize = 14;

    pub const DEFAULT_API_URL: &'static str = "http://localhost:5000";

    /// Backend base URL, fixed at build time via `ORDERS_API_URL`.
    pub fn api_url() -> &'static str {
        option_env!("ORDERS_API_URL").unwrap_or(Self::DEFAULT_API_URL)
    }

    /// API key sent as `X-API-Key`, fixed at build time via `ORDERS_API_KEY`.
    /// An empty value means no key.
    pub fn api_key() -> Option<&'static str> {
        option_env!("ORDERS_API_KEY").filter(|key| !key.is_empty())
    }
}
