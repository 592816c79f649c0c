//! CLI argument tests.

use super::Cli;
use webenum_core::ScanError;

pub(super) fn parse(args: &[&str]) -> Result<Cli, ScanError> {
    Cli::parse_args(args)
}
