//! Error types for fetch failures.

use thiserror::Error;

/// Why a fetch produced no body. The public `fetch` functions log this and
/// return `None`; [`Fetcher::try_fetch`](crate::Fetcher::try_fetch) returns it.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("HTTP {code} from {url}")]
    Status { url: String, code: u16 },

    /// Connection, DNS, TLS or timeout failure.
    #[error("transport error: {0}")]
    Transport(#[from] ureq::Transport),

    /// The body could not be read or was not valid UTF-8.
    #[error("failed to read response body: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
