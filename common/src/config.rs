use std::time::Duration;

/// Registry endpoint queried for company data, keyed by the 14-digit CNPJ.
pub const REGISTRY_BASE_URL: &str = "https://brasilapi.com.br/api/cnpj/v1";

/// How long a single lookup may stay in flight before it is abandoned.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

pub struct Config {
    /// Upstream timeout for one lookup request.
    pub timeout: Duration,

    /// Base URL of the registry endpoint, without a trailing slash.
    pub base_url: String,

    /// Suppresses decorative output (headers, separators).
    ///
    /// The report itself and error messages are always printed.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: REQUEST_TIMEOUT,
            base_url: REGISTRY_BASE_URL.to_string(),
            quiet: 0,
        }
    }
}
