use std::time::Duration;

use url::Url;

use crate::error::{AppError, FetchError};
use crate::utils::debug_enabled;

use super::Gateway;

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const FETCH_RETRIES: usize = 3;
const RETRY_BACKOFF_MS: u64 = 250;

/// Blocking HTTP client for one gateway
pub(crate) struct GatewayClient {
    server: String,
    agent: ureq::Agent,
}

impl GatewayClient {
    pub(crate) fn new(server: &str, timeout: Duration) -> Result<Self, AppError> {
        let server = normalize_server(server)?;
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Ok(Self { server, agent })
    }
}

impl Gateway for GatewayClient {
    fn server_address(&self) -> &str {
        &self.server
    }

    fn get_text(&self, path: &str) -> Result<String, FetchError> {
        let url = format!("{}{}", self.server, path);
        let mut attempt = 0;

        loop {
            attempt += 1;
            let result = self
                .agent
                .get(&url)
                .call()
                .and_then(|response| response.into_body().read_to_string());

            match result {
                Ok(body) => return Ok(body),
                Err(source) => {
                    if debug_enabled() {
                        eprintln!("[DEBUG] GET {url} attempt {attempt} failed: {source}");
                    }
                    if attempt >= FETCH_RETRIES || is_client_error(&source) {
                        return Err(FetchError {
                            url,
                            attempts: attempt,
                            source,
                        });
                    }
                    std::thread::sleep(Duration::from_millis(RETRY_BACKOFF_MS * attempt as u64));
                }
            }
        }
    }
}

/// 4xx answers will not change on retry
fn is_client_error(error: &ureq::Error) -> bool {
    matches!(error, ureq::Error::StatusCode(code) if (400..500).contains(code))
}

/// Validate a server address and strip trailing slashes so paths can be appended.
pub(crate) fn normalize_server(input: &str) -> Result<String, AppError> {
    let trimmed = input.trim();
    let parsed = Url::parse(trimmed).map_err(|e| AppError::InvalidServerUrl {
        input: input.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::InvalidServerUrl {
                input: input.to_string(),
                reason: format!("unsupported scheme {other}"),
            });
        }
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(AppError::InvalidServerUrl {
            input: input.to_string(),
            reason: "query strings and fragments are not allowed".to_string(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
