// src/breach/source.rs
use std::time::Duration;
use futures::future::BoxFuture;
use thiserror::Error;
use crate::core::config::Config;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Lookup service returned status {0}")]
    Status(u16),

    #[error("Lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed lookup response: {0}")]
    MalformedResponse(String),
}

/// Anything that can answer a k-anonymity range query for a hash prefix.
///
/// The response body is the raw `SUFFIX:COUNT` line list.
pub trait RangeSource: Send + Sync {
    fn fetch_range<'a>(&'a self, prefix: &'a str) -> BoxFuture<'a, Result<String, LookupError>>;
}

/// Client for the Pwned Passwords range API.
pub struct PwnedRangeClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    add_padding: bool,
}

impl PwnedRangeClient {
    pub fn new(config: &Config) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(config.hibp_timeout)
            .user_agent(config.hibp_user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url: config.hibp_api_url.clone(),
            timeout: config.hibp_timeout,
            add_padding: config.hibp_add_padding,
        })
    }

    fn range_url(&self, prefix: &str) -> String {
        if self.base_url.ends_with('/') {
            format!("{}{}", self.base_url, prefix)
        } else {
            format!("{}/{}", self.base_url, prefix)
        }
    }
}

impl RangeSource for PwnedRangeClient {
    fn fetch_range<'a>(&'a self, prefix: &'a str) -> BoxFuture<'a, Result<String, LookupError>> {
        Box::pin(async move {
            let mut request = self.client.get(self.range_url(prefix));
            if self.add_padding {
                request = request.header("Add-Padding", "true");
            }

            let response = request.send().await.map_err(|e| self.classify(e))?;
            let status = response.status();
            if !status.is_success() {
                return Err(LookupError::Status(status.as_u16()));
            }

            response.text().await.map_err(|e| self.classify(e))
        })
    }
}

impl PwnedRangeClient {
    fn classify(&self, error: reqwest::Error) -> LookupError {
        if error.is_timeout() {
            LookupError::Timeout(self.timeout)
        } else {
            LookupError::Http(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_url_joins_prefix() {
        let mut config = Config::default();
        let client = PwnedRangeClient::new(&config).unwrap();
        assert_eq!(client.range_url("5BAA6"), "https://api.pwnedpasswords.com/range/5BAA6");

        config.hibp_api_url = "http://localhost:9000/range".to_string();
        let client = PwnedRangeClient::new(&config).unwrap();
        assert_eq!(client.range_url("ABCDE"), "http://localhost:9000/range/ABCDE");
    }
}
