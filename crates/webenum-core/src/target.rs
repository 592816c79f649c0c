//! Target URL construction and hit classification.
//!
//! Candidates are trusted: they are concatenated verbatim, with no percent
//! encoding and no normalization of the base URL. A base URL that already
//! ends in `/` produces a `//` in the target.

/// Status codes below this are reported as hits.
pub const HIT_STATUS_LIMIT: u32 = 400;

/// Builds `<base_url>/<candidate>`.
///
/// # Examples
///
/// - `target_url("https://example.com", "admin")` → `"https://example.com/admin"`
/// - `target_url("https://example.com/", "admin")` → `"https://example.com//admin"`
pub fn target_url(base_url: &str, candidate: &str) -> String {
    format!("{}/{}", base_url, candidate)
}

/// True for anything that is not a 4xx/5xx (redirects count as hits).
pub fn is_hit(status: u32) -> bool {
    status < HIT_STATUS_LIMIT
}
