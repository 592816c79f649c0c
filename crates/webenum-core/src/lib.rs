pub mod config;
pub mod logging;

pub mod enumerator;
pub mod error;
pub mod probe;
pub mod target;
pub mod wordlist;

pub use enumerator::{scan_wordlist, scan_wordlist_with, Enumerator, ScanSummary};
pub use error::ScanError;
pub use probe::{CurlProbe, Probe, ProbeError};
