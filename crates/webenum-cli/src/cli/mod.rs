//! CLI for webenum.

mod commands;

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use webenum_core::config;
use webenum_core::ScanError;

use commands::run_scan;

/// Top-level CLI: exactly two positional arguments.
#[derive(Debug, Parser)]
#[command(name = "webenum", version)]
#[command(
    about = "Send a HEAD request to <BASE_URL>/<line> for every wordlist line and print the lines answering below 400",
    long_about = None
)]
pub struct Cli {
    /// Wordlist file, one path candidate per line.
    pub wordlist: PathBuf,

    /// Base URL; each candidate is appended after a literal `/`.
    pub base_url: String,
}

impl Cli {
    pub fn from_env() -> Result<Self, ScanError> {
        Self::parse_args(std::env::args_os())
    }

    /// Parses `args` (program name first). A wrong argument count becomes
    /// [`ScanError::Usage`]; `--help` and `--version` print and exit 0.
    pub fn parse_args<I, T>(args: I) -> Result<Self, ScanError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|err| match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => ScanError::Usage(err.to_string().trim_end().to_string()),
        })
    }

    pub fn run(self) -> Result<(), ScanError> {
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        run_scan(&self.wordlist, &self.base_url, &cfg)
    }
}

#[cfg(test)]
mod tests;
