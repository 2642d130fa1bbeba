use std::time::Duration;

/// Default wall-clock budget for any single admin API call.
///
/// Operators can override this via the `TOKEN_SYNC_TIMEOUT_SECS` env var.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// Per-request timeout applied to every admin API call.
    /// Set via TOKEN_SYNC_TIMEOUT_SECS env var. Default: 10.
    pub request_timeout: Duration,
}

pub fn load() -> Config {
    dotenvy::dotenv().ok();

    let timeout_secs = std::env::var("TOKEN_SYNC_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Config {
        request_timeout: Duration::from_secs(timeout_secs),
    }
}
