//! Streaming wordlist reader.
//!
//! Yields one candidate per line, in file order. Only the line ending
//! (`\n` or `\r\n`) is removed: spaces and tabs are kept. A last line
//! without a line ending is still a candidate, and so is an empty line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Iterator over the candidates of a wordlist.
pub struct Wordlist<R = BufReader<File>> {
    path: PathBuf,
    reader: R,
    line: usize,
    done: bool,
}

impl Wordlist {
    /// Opens `path` for reading. Nothing is read yet.
    pub fn open(path: &Path) -> Result<Self, ScanError> {
        let file = File::open(path).map_err(|source| ScanError::Input {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(path, BufReader::new(file)))
    }
}

impl<R: BufRead> Wordlist<R> {
    /// Wraps an already open reader; `path` is only used in error messages.
    pub fn from_reader(path: impl Into<PathBuf>, reader: R) -> Self {
        Self {
            path: path.into(),
            reader,
            line: 0,
            done: false,
        }
    }

    fn read_candidate(&mut self) -> Result<Option<String>, ScanError> {
        let mut buf = Vec::new();
        let n = self
            .reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| self.line_error(source))?;
        if n == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        String::from_utf8(buf)
            .map(Some)
            .map_err(|e| self.line_error(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    fn line_error(&self, source: io::Error) -> ScanError {
        ScanError::InputLine {
            path: self.path.clone(),
            line: self.line + 1,
            source,
        }
    }
}

impl<R: BufRead> Iterator for Wordlist<R> {
    type Item = Result<String, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_candidate() {
            Ok(Some(candidate)) => {
                self.line += 1;
                Some(Ok(candidate))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
