//! HTTP HEAD probing.
//!
//! Uses the curl crate (libcurl) to send one HEAD request per target and
//! report the status code. Redirects are not followed, so a 301/302 is
//! observed as such.

use std::time::Duration;

use crate::config::WebenumConfig;

/// Failure of a single HEAD request (or of setting up the handle).
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// Applying a handle option failed.
    #[error("curl setup failed")]
    Setup(#[source] curl::Error),
    /// libcurl rejected the URL.
    #[error("invalid URL")]
    InvalidUrl(#[source] curl::Error),
    /// DNS, connect, TLS, timeout and friends.
    #[error("request failed")]
    Transfer(#[source] curl::Error),
    /// The transfer finished but no HTTP status line was received.
    #[error("no HTTP status received")]
    NoStatus,
}

/// Something that can answer "what status does HEAD on this URL return".
pub trait Probe {
    fn head(&mut self, url: &str) -> Result<u32, ProbeError>;
}

/// libcurl-backed probe. One easy handle is reused for the whole run.
pub struct CurlProbe {
    easy: curl::easy::Easy,
}

impl CurlProbe {
    /// Builds a handle that sends HEAD, leaves redirects alone and applies the
    /// configured timeouts (0 disables a timeout).
    pub fn new(cfg: &WebenumConfig) -> Result<Self, ProbeError> {
        let mut easy = curl::easy::Easy::new();
        easy.nobody(true).map_err(ProbeError::Setup)?; // HEAD request
        easy.follow_location(false).map_err(ProbeError::Setup)?;
        easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
            .map_err(ProbeError::Setup)?;
        easy.timeout(Duration::from_secs(cfg.request_timeout_secs))
            .map_err(ProbeError::Setup)?;
        Ok(Self { easy })
    }
}

impl Probe for CurlProbe {
    fn head(&mut self, url: &str) -> Result<u32, ProbeError> {
        self.easy.url(url).map_err(ProbeError::InvalidUrl)?;
        self.easy.perform().map_err(|e| {
            if e.is_url_malformed() || e.is_unsupported_protocol() {
                ProbeError::InvalidUrl(e)
            } else {
                ProbeError::Transfer(e)
            }
        })?;
        match self.easy.response_code().map_err(ProbeError::Transfer)? {
            0 => Err(ProbeError::NoStatus),
            code => Ok(code),
        }
    }
}
