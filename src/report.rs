use std::io::Write;

use crate::corpus::Corpus;
use crate::error::Result;

/// Serializes the per-base summary as CSV: one row per base in
/// `[0, max_variants)` with the collision count at the given table capacity
/// and the mean time to compute that variant.
///
/// `words` is the number of records that define the base, which can dip
/// below the corpus length when records carry different variant counts.
pub fn write_csv<W: Write>(corpus: &Corpus, capacity: usize, out: &mut W) -> Result<()> {
    writeln!(out, "base,words,collisions,avg_time_ns")?;
    for base in 0..corpus.max_variants() {
        let words = corpus.hash_column(base)?.len();
        let collisions = corpus.collision_count(base, capacity)?;
        let avg = corpus.average_time(base)?;
        writeln!(out, "{},{},{},{}", base, words, collisions, avg.as_nanos())?;
    }
    Ok(())
}
