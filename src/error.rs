use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Whole-file I/O failures. Per-action parse misses never surface here.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },
    #[error("cannot read input file {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
