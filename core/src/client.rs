//! HTTP access to the public company registry.
//!
//! One `RegistryClient::lookup` call is exactly one outbound GET. There are
//! no retries and nothing is cached; throttling and transient failures are
//! surfaced as [`LookupError`] categories for the caller to render.

use cnpjr_common::config::Config;
use cnpjr_common::error::LookupError;
use cnpjr_common::ident::Cnpj;
use cnpjr_common::record::CompanyRecord;
use tracing::debug;

pub struct RegistryClient {
    http: reqwest::Client,
    base_url: String,
}

impl RegistryClient {
    /// Builds a client with the configured request timeout.
    pub fn new(cfg: &Config) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| LookupError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The endpoint queried for a given company number.
    pub fn lookup_url(&self, cnpj: &Cnpj) -> String {
        format!("{}/{}", self.base_url, cnpj.as_digits())
    }

    /// Fetches the registry record for a validated company number.
    pub async fn lookup(&self, cnpj: &Cnpj) -> Result<CompanyRecord, LookupError> {
        let url = self.lookup_url(cnpj);
        debug!("GET {url}");

        let response = self.http.get(&url).send().await.map_err(transport)?;

        let status = response.status().as_u16();
        if let Some(outcome) = LookupError::from_status(status) {
            debug!("registry answered {status}");
            return Err(outcome);
        }

        response
            .json::<CompanyRecord>()
            .await
            .map_err(|e| LookupError::Transport(format!("malformed registry response: {e}")))
    }
}

/// Turns a reqwest failure into a human-readable transport message.
fn transport(err: reqwest::Error) -> LookupError {
    let message = if err.is_timeout() {
        "the request timed out".to_string()
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        err.to_string()
    };
    LookupError::Transport(message)
}
