use std::fs::File;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use hashvariants::{load_words, write_csv, Corpus};

/// Hash a word file under a family of polynomial bases and report per-base
/// collision counts and timings.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Word file, one word per line
    file: PathBuf,

    /// Number of hash variants (bases) to compute per word
    #[arg(short, long, default_value_t = 8)]
    variants: usize,

    /// Simulated table capacity for collision counting
    #[arg(short, long, default_value_t = 1024)]
    capacity: usize,

    /// Also write the per-base report as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn run(args: &Args) -> hashvariants::Result<()> {
    let corpus = load_words(&args.file, args.variants)?;
    print_table(&corpus, args.capacity)?;

    if let Some(path) = &args.csv {
        let mut file = File::create(path)?;
        write_csv(&corpus, args.capacity, &mut file)?;
    }
    Ok(())
}

fn print_table(corpus: &Corpus, capacity: usize) -> hashvariants::Result<()> {
    println!(
        "{} words, {} variants, table capacity {}",
        corpus.len(),
        corpus.max_variants(),
        capacity
    );
    println!("{:>4} {:>10} {:>12}", "base", "collisions", "avg time");
    for base in 0..corpus.max_variants() {
        let collisions = corpus.collision_count(base, capacity)?;
        let avg = corpus.average_time(base)?;
        println!("{:>4} {:>10} {:>12?}", base, collisions, avg);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
