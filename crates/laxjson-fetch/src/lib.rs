//! # laxjson-fetch
//!
//! Fetches JSON documents over HTTP and hands them to [`laxjson_core::parse`].
//!
//! Requests are blocking GETs with 100 second connect and read timeouts
//! (see [`FetchConfig`]). Gzip-encoded bodies are decompressed transparently.
//! Failures are logged through `tracing` and surface as `None`.
//!
//! ```no_run
//! let obj = laxjson_fetch::get_json("https://example.com/status.json");
//! if let Some(obj) = obj {
//!     println!("{obj}");
//! }
//! ```

pub mod error;
pub mod fetcher;

pub use error::FetchError;
pub use fetcher::{FetchConfig, Fetcher, DEFAULT_TIMEOUT};

/// Fetch `url` with default timeouts. `None` on any failure (already logged).
pub fn fetch(url: &str) -> Option<String> {
    Fetcher::default().fetch(url)
}

/// Fetch `url` and parse the body. `None` if the fetch failed or the body
/// held no object.
pub fn get_json(url: &str) -> Option<laxjson_core::Object> {
    Fetcher::default().get_json(url)
}
