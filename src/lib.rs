//! hashvariants analyzes how a family of integer hash functions distributes
//! a corpus of words.
//!
//! Variant `i` of the family is the polynomial rolling hash with multiplier
//! `i` over the word's bytes, computed in 32-bit signed wraparound
//! arithmetic. Every word is hashed under each requested base and each
//! computation is timed; the resulting corpus answers per-base queries:
//! simulated table-slot collision counts, overflow-safe average computation
//! time, and raw per-variant columns.

mod clock;
mod corpus;
mod error;
mod loader;
mod record;
mod report;

pub use clock::{Clock, SystemClock};
pub use corpus::Corpus;
pub use error::{Error, Result};
pub use loader::load_words;
pub use record::WordRecord;
pub use report::write_csv;
