use hashvariants::{Corpus, WordRecord};

fn main() -> hashvariants::Result<()> {
    // Hash a few words under 8 polynomial bases:
    // - base 0 degenerates to the word's last byte
    // - base 1 is the byte sum mod 2^32
    // - base >= 2 is a rolling hash with that multiplier
    let variants = 8;

    let mut corpus = Corpus::new();
    for word in ["frequent item", "less frequent item", "rare item"] {
        corpus.add(WordRecord::new(word, variants)?);
    }

    // Fold each variant into a 64-slot table and compare the bases.
    println!("base collisions avg_time");
    for base in 0..corpus.max_variants() {
        println!(
            "{:>4} {:>10} {:>8?}",
            base,
            corpus.collision_count(base, 64)?,
            corpus.average_time(base)?
        );
    }

    // Raw per-variant values are available as columns.
    let hashes = corpus.hash_column(2)?;
    println!("\nhashes at base 2: {:?}", hashes);

    Ok(())
}
