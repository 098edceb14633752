use std::time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};

/// One word together with its family of hash variants.
///
/// Variant `i` runs the polynomial recurrence `h = i*h + byte` over the word
/// in 32-bit signed wraparound arithmetic, so `hashes[0]` is always the last
/// byte and `hashes[1]` the byte sum mod 2^32. Each variant is timed as it is
/// computed; both sequences are fixed at construction.
#[derive(Debug)]
pub struct WordRecord {
    word: Vec<u8>,
    hashes: Vec<i32>,
    timings: Vec<Duration>,
}

/// Polynomial rolling hash with multiplier `base`, silent two's-complement
/// wraparound. Never widened to 64 bits; the wraparound is the point.
#[inline]
pub(crate) fn hash_variant(word: &[u8], base: i32) -> i32 {
    let mut h: i32 = 0;
    for &b in word {
        h = base.wrapping_mul(h).wrapping_add(b as i32);
    }
    h
}

impl WordRecord {
    /// Computes `variants` hash values for `word`, timing each with the
    /// system clock. `variants == 0` yields empty sequences.
    pub fn new(word: impl Into<Vec<u8>>, variants: usize) -> Result<Self> {
        Self::with_clock(word, variants, &SystemClock::default())
    }

    /// Same as [`WordRecord::new`] with an injected time source.
    pub fn with_clock(
        word: impl Into<Vec<u8>>,
        variants: usize,
        clock: &dyn Clock,
    ) -> Result<Self> {
        let word = word.into();
        if word.is_empty() {
            return Err(Error::EmptyWord);
        }

        let mut hashes = Vec::with_capacity(variants);
        let mut timings = Vec::with_capacity(variants);
        for base in 0..variants {
            let start = clock.now();
            let h = hash_variant(&word, base as i32);
            let elapsed = clock.now().saturating_sub(start);
            hashes.push(h);
            timings.push(elapsed);
        }

        Ok(WordRecord {
            word,
            hashes,
            timings,
        })
    }

    pub fn word(&self) -> &[u8] {
        &self.word
    }

    /// Number of computed variants.
    pub fn variants(&self) -> usize {
        self.hashes.len()
    }

    pub fn hash(&self, base: usize) -> Result<i32> {
        self.hashes
            .get(base)
            .copied()
            .ok_or(Error::VariantOutOfRange {
                base,
                limit: self.hashes.len(),
            })
    }

    pub fn time(&self, base: usize) -> Result<Duration> {
        self.timings
            .get(base)
            .copied()
            .ok_or(Error::VariantOutOfRange {
                base,
                limit: self.timings.len(),
            })
    }

    pub fn hashes(&self) -> &[i32] {
        &self.hashes
    }

    pub fn times(&self) -> &[Duration] {
        &self.timings
    }
}
