//! The scan loop: one HEAD per wordlist line, strictly in order.
//!
//! For each candidate the enumerator writes `Usecase n <index>` and, when the
//! status is below 400, the candidate itself. The first failed request stops
//! the run; whatever was already written stays written.

use std::io::Write;
use std::path::Path;

use crate::config::WebenumConfig;
use crate::error::ScanError;
use crate::probe::{CurlProbe, Probe};
use crate::target::{is_hit, target_url};
use crate::wordlist::Wordlist;

/// Counts for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Candidates probed (one request each).
    pub probed: usize,
    /// Candidates that answered below 400.
    pub hits: usize,
}

pub struct Enumerator<P, W> {
    base_url: String,
    probe: P,
    out: W,
}

impl<P: Probe, W: Write> Enumerator<P, W> {
    pub fn new(base_url: impl Into<String>, probe: P, out: W) -> Self {
        Self {
            base_url: base_url.into(),
            probe,
            out,
        }
    }

    /// Probes every candidate in order. Output is flushed before returning,
    /// on success and on error alike.
    pub fn run<I>(&mut self, candidates: I) -> Result<ScanSummary, ScanError>
    where
        I: IntoIterator<Item = Result<String, ScanError>>,
    {
        let result = self.scan(candidates);
        self.out.flush().map_err(ScanError::Output)?;
        result
    }

    fn scan<I>(&mut self, candidates: I) -> Result<ScanSummary, ScanError>
    where
        I: IntoIterator<Item = Result<String, ScanError>>,
    {
        let mut summary = ScanSummary::default();
        for (index, candidate) in (1usize..).zip(candidates) {
            let candidate = candidate?;
            writeln!(self.out, "Usecase n {}", index).map_err(ScanError::Output)?;

            let url = target_url(&self.base_url, &candidate);
            let status = self.probe.head(&url).map_err(|source| {
                tracing::error!(url = %url, error = %source, "HEAD request failed");
                ScanError::Network {
                    url: url.clone(),
                    source,
                }
            })?;
            summary.probed += 1;
            tracing::debug!(index, url = %url, status, "probed");

            if is_hit(status) {
                summary.hits += 1;
                tracing::info!(url = %url, status, "hit");
                writeln!(self.out, "{}", candidate).map_err(ScanError::Output)?;
            }
        }
        Ok(summary)
    }

    /// Gives back the output sink (tests read what was written).
    pub fn into_output(self) -> W {
        self.out
    }
}

/// Opens `wordlist` and scans it against `base_url` with the given probe.
/// The wordlist is opened before any request is made.
pub fn scan_wordlist_with<P, W>(
    wordlist: &Path,
    base_url: &str,
    probe: P,
    out: W,
) -> Result<ScanSummary, ScanError>
where
    P: Probe,
    W: Write,
{
    let words = Wordlist::open(wordlist)?;
    tracing::info!(
        wordlist = %wordlist.display(),
        base_url,
        "starting scan"
    );
    let summary = Enumerator::new(base_url, probe, out).run(words)?;
    tracing::info!(probed = summary.probed, hits = summary.hits, "scan finished");
    Ok(summary)
}

/// Opens `wordlist` and scans it with a libcurl probe configured from `cfg`.
pub fn scan_wordlist<W: Write>(
    wordlist: &Path,
    base_url: &str,
    cfg: &WebenumConfig,
    out: W,
) -> Result<ScanSummary, ScanError> {
    let probe = CurlProbe::new(cfg).map_err(ScanError::Client)?;
    tracing::debug!(
        connect_timeout_secs = cfg.connect_timeout_secs,
        request_timeout_secs = cfg.request_timeout_secs,
        "curl probe ready"
    );
    scan_wordlist_with(wordlist, base_url, probe, out)
}
