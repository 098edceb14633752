use std::time::Duration;

use ahash::AHashSet;

use crate::error::{Error, Result};
use crate::record::WordRecord;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Append-only, insertion-ordered collection of [`WordRecord`]s.
///
/// Queries take a `base` selecting one variant column and are bounded by
/// `max_variants`, the widest record seen so far. Records narrower than the
/// queried base simply contribute nothing to that column.
#[derive(Debug, Default)]
pub struct Corpus {
    records: Vec<WordRecord>,
    max_variants: usize,
}

impl Corpus {
    pub fn new() -> Self {
        Corpus::default()
    }

    /// Appends a record. Duplicate words are allowed and counted separately.
    pub fn add(&mut self, record: WordRecord) {
        self.max_variants = self.max_variants.max(record.variants());
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Widest variant count over all records; the exclusive upper bound for
    /// every `base` argument. Zero while the corpus is empty.
    pub fn max_variants(&self) -> usize {
        self.max_variants
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordRecord> {
        self.records.iter()
    }

    fn check_base(&self, base: usize) -> Result<()> {
        if base >= self.max_variants {
            return Err(Error::VariantOutOfRange {
                base,
                limit: self.max_variants,
            });
        }
        Ok(())
    }

    /// Rows that actually computed the given base.
    fn column(&self, base: usize) -> impl Iterator<Item = &WordRecord> {
        self.records.iter().filter(move |r| base < r.variants())
    }

    /// Counts how many records land on an already-claimed slot when the
    /// chosen variant is folded into a table of `capacity` slots.
    ///
    /// The first record to claim a slot is free; every later arrival on the
    /// same slot counts, and the slot stays claimed. Attribution follows
    /// insertion order only. Wraparound hashes can be negative, so folding
    /// uses the euclidean remainder to keep slots in `[0, capacity)`.
    pub fn collision_count(&self, base: usize, capacity: usize) -> Result<usize> {
        self.check_base(base)?;
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        let mut claimed: AHashSet<usize> = AHashSet::with_capacity(self.records.len());
        let mut collisions = 0;
        for record in self.column(base) {
            let slot = (record.hashes()[base] as i64).rem_euclid(capacity as i64) as usize;
            if !claimed.insert(slot) {
                collisions += 1;
            }
        }
        Ok(collisions)
    }

    /// [`Corpus::collision_count`] with the capacity derived from a target
    /// load factor: `capacity = ceil(len / load_factor)`, at least 1.
    pub fn collision_count_at_load(&self, base: usize, load_factor: f64) -> Result<usize> {
        self.check_base(base)?;
        if !(load_factor > 0.0 && load_factor <= 1.0) {
            return Err(Error::InvalidLoadFactor(load_factor));
        }
        let capacity = (self.len() as f64 / load_factor).ceil() as usize;
        self.collision_count(base, capacity.max(1))
    }

    /// Mean time to compute the chosen variant, floored to whole nanoseconds.
    ///
    /// Summation runs in a u128 nanosecond accumulator, which cannot
    /// overflow before 2^64 records. An empty corpus has no valid base and
    /// fails the bounds check instead of dividing by zero.
    pub fn average_time(&self, base: usize) -> Result<Duration> {
        self.check_base(base)?;

        let mut sum: u128 = 0;
        let mut count: u128 = 0;
        for record in self.column(base) {
            sum += record.times()[base].as_nanos();
            count += 1;
        }
        if count == 0 {
            return Err(Error::EmptyCorpus);
        }

        let mean = sum / count;
        Ok(Duration::new(
            (mean / NANOS_PER_SEC) as u64,
            (mean % NANOS_PER_SEC) as u32,
        ))
    }

    /// Hash values at `base`, one per defining record in insertion order.
    pub fn hash_column(&self, base: usize) -> Result<Vec<i32>> {
        self.check_base(base)?;
        Ok(self.column(base).map(|r| r.hashes()[base]).collect())
    }

    /// Timing samples at `base`, one per defining record in insertion order.
    pub fn time_column(&self, base: usize) -> Result<Vec<Duration>> {
        self.check_base(base)?;
        Ok(self.column(base).map(|r| r.times()[base]).collect())
    }
}

impl Extend<WordRecord> for Corpus {
    fn extend<T: IntoIterator<Item = WordRecord>>(&mut self, iter: T) {
        for record in iter {
            self.add(record);
        }
    }
}
