//! Blocking HTTP GET with fixed timeouts.

use crate::error::{FetchError, Result};
use laxjson_core::Object;
use std::io::Read;
use std::time::Duration;
use tracing::{debug, warn};

/// Connect and read timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(100);

/// Timeouts for a [`Fetcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchConfig {
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_TIMEOUT,
            read_timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP client for fetching JSON bodies.
///
/// Gzip-encoded responses are decompressed transparently. There are no
/// retries.
#[derive(Clone)]
pub struct Fetcher {
    agent: ureq::Agent,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new(FetchConfig::default())
    }
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(config.connect_timeout)
            .timeout_read(config.read_timeout)
            .build();
        Self { agent }
    }

    /// GET `url` and return the body with line terminators removed.
    pub fn try_fetch(&self, url: &str) -> Result<String> {
        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    code,
                })
            }
            Err(ureq::Error::Transport(err)) => return Err(err.into()),
        };

        let mut raw = String::new();
        response.into_reader().read_to_string(&mut raw)?;
        let body: String = raw.lines().collect();
        debug!(url, bytes = body.len(), "fetched body");
        Ok(body)
    }

    /// Like [`try_fetch`](Self::try_fetch), but logs the failure and returns
    /// `None`.
    pub fn fetch(&self, url: &str) -> Option<String> {
        match self.try_fetch(url) {
            Ok(body) => Some(body),
            Err(err) => {
                warn!(url, error = %err, "fetch failed");
                None
            }
        }
    }

    /// Fetch `url` and parse the body leniently. The parser only runs when a
    /// body was received.
    pub fn get_json(&self, url: &str) -> Option<Object> {
        let body = self.fetch(url)?;
        laxjson_core::parse(&body)
    }
}
