use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by record construction, corpus queries and the word loader.
#[derive(Debug, Error)]
pub enum Error {
    /// A record must own at least one byte of word data.
    #[error("word must be non-empty")]
    EmptyWord,

    /// The requested base does not select a computed variant.
    #[error("base {base} out of range, {limit} variants available")]
    VariantOutOfRange { base: usize, limit: usize },

    /// Slot folding needs at least one slot.
    #[error("table capacity must be at least 1")]
    ZeroCapacity,

    /// Load factors describe table fullness and must sit in (0, 1].
    #[error("load factor must be in (0, 1], got {0}")]
    InvalidLoadFactor(f64),

    /// No timing samples exist to average over.
    #[error("corpus holds no records")]
    EmptyCorpus,

    /// The word file could not be opened or mapped.
    #[error("failed to read word file {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a report failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
