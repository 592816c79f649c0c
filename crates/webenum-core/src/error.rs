//! Error taxonomy for a scan run.

use std::io;
use std::path::PathBuf;

use crate::probe::ProbeError;

/// Everything that can stop a scan. Each variant maps to a process exit code.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Wrong number of positional arguments.
    #[error("usage error\n{0}")]
    Usage(String),

    /// The wordlist could not be opened.
    #[error("cannot open wordlist {}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The wordlist was opened but a line could not be read or decoded.
    #[error("cannot read wordlist {} at line {line}", path.display())]
    InputLine {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },

    /// The HTTP client could not be configured.
    #[error("failed to set up HTTP client")]
    Client(#[source] ProbeError),

    /// A HEAD request failed; the run stops here.
    #[error("HEAD {url} failed")]
    Network {
        url: String,
        #[source]
        source: ProbeError,
    },

    /// Writing progress or hits to the output failed.
    #[error("failed to write output")]
    Output(#[source] io::Error),

    /// Config file unreadable or invalid.
    #[error(transparent)]
    Config(#[from] anyhow::Error),
}

impl ScanError {
    /// Usage errors exit with 2 (same as clap); everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScanError::Usage(_) => 2,
            _ => 1,
        }
    }
}
