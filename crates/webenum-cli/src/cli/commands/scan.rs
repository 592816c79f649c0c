//! `webenum <wordlist> <base_url>` – the scan itself.

use std::io;
use std::path::Path;
use webenum_core::config::WebenumConfig;
use webenum_core::ScanError;

/// Scan `wordlist` against `base_url`, writing progress and hits to stdout.
pub fn run_scan(wordlist: &Path, base_url: &str, cfg: &WebenumConfig) -> Result<(), ScanError> {
    let stdout = io::stdout();
    let summary = webenum_core::scan_wordlist(wordlist, base_url, cfg, stdout.lock())?;
    tracing::debug!("scan done: {:?}", summary);
    Ok(())
}
