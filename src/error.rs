//! Typed startup errors.
//!
//! Corpus problems are fatal: the engine refuses to start rather than serve
//! partial data. Per-query conditions (no confident match, empty input) are
//! ordinary [`crate::engine::Reply`] values, never errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a corpus file.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The file could not be read.
    #[error("failed to read corpus file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array of the expected record shape.
    #[error("corpus file {path} is malformed")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file parsed but contains zero entries.
    #[error("corpus file {path} contains no entries")]
    Empty { path: PathBuf },
}
