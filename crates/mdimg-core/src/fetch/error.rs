//! Per-image fetch failure.

use std::io;

/// Why a single image could not be fetched and stored.
///
/// Always local to one reference: the processor records it as a failure and
/// moves on to the next image.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connect, timeout, TLS, protocol).
    #[error("{0}")]
    Network(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Creating the run directory or writing the image failed.
    #[error("storage: {0}")]
    Storage(#[from] io::Error),
}

impl FetchError {
    /// True for failures on the network side (transport or HTTP status).
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network(_) | FetchError::Http(_))
    }
}
