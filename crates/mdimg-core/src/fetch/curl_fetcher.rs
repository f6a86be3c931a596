//! Blocking single-GET fetcher backed by libcurl.

use super::parse::parse_content_type;
use super::{FetchError, FetchedAsset, Fetcher};
use crate::config::{MdimgConfig, DEFAULT_USER_AGENT};
use std::str;
use std::time::Duration;

/// Transfer settings applied to every request.
#[derive(Debug, Clone)]
pub struct CurlOptions {
    /// Total time allowed for the request, body included.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
    pub max_redirects: u32,
}

impl Default for CurlOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(15),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: 10,
        }
    }
}

impl CurlOptions {
    pub fn from_config(cfg: &MdimgConfig) -> Self {
        Self {
            timeout: Duration::from_secs(cfg.timeout_secs),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            user_agent: cfg.user_agent.clone(),
            max_redirects: cfg.max_redirects,
        }
    }
}

/// Fetches each URL with exactly one GET; no retries.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    opts: CurlOptions,
}

impl CurlFetcher {
    pub fn new(opts: CurlOptions) -> Self {
        Self { opts }
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedAsset, FetchError> {
        let mut headers: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.opts.max_redirects)?;
        easy.useragent(&self.opts.user_agent)?;
        easy.connect_timeout(self.opts.connect_timeout)?;
        easy.timeout(self.opts.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    headers.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }

        let content_type = parse_content_type(&headers);
        tracing::debug!(
            url,
            bytes = body.len(),
            content_type = content_type.as_deref().unwrap_or("-"),
            "fetched"
        );
        Ok(FetchedAsset {
            bytes: body,
            content_type,
        })
    }
}
