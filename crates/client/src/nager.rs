//! HTTP holiday source backed by the Nager.Date API.

use std::time::Duration;

use tracing::{debug, info_span, warn};

use crate::error::ClientError;
use crate::source::{FetchOutcome, HolidaySource, classify_response};

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://date.nager.at";

/// Path prefix of the public holidays endpoint.
const PUBLIC_HOLIDAYS_PATH: &str = "api/v2/publicholidays";

/// Configuration for [`NagerClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Scheme and host, without a trailing path.
    pub base_url: String,
    /// Overall request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: concat!("holical/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Blocking client for `GET /api/v2/publicholidays/{year}/{countryCode}`.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct NagerClient {
    agent: ureq::Agent,
    base_url: String,
}

impl NagerClient {
    /// Creates a client from `config`.
    pub fn new(config: &ClientConfig) -> Self {
        let mut builder = ureq::AgentBuilder::new().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            agent: builder.build(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the request URL for `year` and `country_code`.
    pub fn holidays_url(&self, year: i32, country_code: &str) -> String {
        holidays_url(&self.base_url, year, country_code)
    }
}

impl Default for NagerClient {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

impl HolidaySource for NagerClient {
    fn fetch(&self, year: i32, country_code: &str) -> FetchOutcome {
        let url = self.holidays_url(year, country_code);
        let _span = info_span!("fetch", year, country = country_code).entered();
        debug!(%url, "requesting holidays");

        match self.agent.get(&url).call() {
            Ok(response) => {
                let status = response.status();
                match response.into_string() {
                    Ok(body) => classify_response(status, &body),
                    Err(e) => {
                        warn!(status, error = %e, "failed to read response body");
                        FetchOutcome::Failed(ClientError::Transport {
                            reason: e.to_string(),
                        })
                    }
                }
            }
            Err(ureq::Error::Status(status, _)) => {
                debug!(status, "holiday endpoint returned error status");
                FetchOutcome::HttpError { status }
            }
            Err(ureq::Error::Transport(e)) => {
                warn!(error = %e, "holiday request failed");
                FetchOutcome::Failed(ClientError::Transport {
                    reason: e.to_string(),
                })
            }
        }
    }
}

/// Builds the endpoint URL. The country code is upper-cased.
fn holidays_url(base_url: &str, year: i32, country_code: &str) -> String {
    format!(
        "{}/{PUBLIC_HOLIDAYS_PATH}/{year}/{}",
        base_url.trim_end_matches('/'),
        country_code.trim().to_ascii_uppercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_default_host() {
        let client = NagerClient::default();
        assert_eq!(
            client.holidays_url(2024, "US"),
            "https://date.nager.at/api/v2/publicholidays/2024/US"
        );
    }

    #[test]
    fn url_normalizes_code_and_slash() {
        let client = NagerClient::new(&ClientConfig::default().with_base_url("http://localhost:8080/"));
        assert_eq!(
            client.holidays_url(1999, " de "),
            "http://localhost:8080/api/v2/publicholidays/1999/DE"
        );
    }

    #[test]
    fn url_negative_year_passes_through() {
        assert_eq!(
            holidays_url("http://h", -5, "GB"),
            "http://h/api/v2/publicholidays/-5/GB"
        );
    }

    #[test]
    fn default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, None);
        assert!(config.user_agent.starts_with("holical/"));
    }

    #[test]
    fn unreachable_host_is_failure() {
        // Port 9 (discard) on localhost is closed in test environments.
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Some(Duration::from_secs(2)));
        let outcome = NagerClient::new(&config).fetch(2024, "US");
        assert!(matches!(
            outcome,
            FetchOutcome::Failed(ClientError::Transport { .. })
        ));
    }
}
