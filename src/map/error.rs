// Mon Jan 19 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

/// Parsing itself never fails; only getting the text does.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read map file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
