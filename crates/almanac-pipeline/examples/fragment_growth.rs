//! Working-set growth through the pipeline
//!
//! Runs the seed ranges of an almanac through every stage and reports how
//! many ranges each stage produces, compared with the number of values a
//! brute-force walk would have to visit.
//!
//! Usage: cargo run --example fragment_growth -p almanac-pipeline --release -- [PATH]
//!
//! Example: cargo run --example fragment_growth -p almanac-pipeline --release -- input.txt

use almanac_pipeline::constants::DEFAULT_INPUT_FILE;
use almanac_pipeline::{load_almanac, min_start};
use std::env;
use std::time::Instant;

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_INPUT_FILE.to_string());

    let almanac = match load_almanac(&path) {
        Ok(almanac) => almanac,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let ranges = match almanac.seed_ranges() {
        Ok(ranges) => ranges,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let values: i64 = ranges.iter().map(|r| r.length.max(0)).sum();
    let categories = almanac.categories();

    println!("==========================================================================");
    println!("Fragment growth: {}", path);
    println!("==========================================================================");
    println!();
    println!("  Seed ranges:        {}", ranges.len());
    println!("  Values covered:     {}", values);
    println!();
    println!("{:<4} {:<28} {:>10}", "#", "stage", "ranges");

    let start = Instant::now();
    let finals = almanac.pipeline().run_with_progress(&ranges, |progress| {
        let name = progress
            .header
            .map(|header| header.to_string())
            .unwrap_or_else(|| {
                format!(
                    "{}-to-{}",
                    categories[progress.index],
                    categories[progress.index + 1]
                )
            });
        println!("{:<4} {:<28} {:>10}", progress.index, name, progress.ranges);
    });
    let elapsed = start.elapsed();

    println!();
    match min_start(&finals) {
        Ok(lowest) => println!("  Lowest location:    {}", lowest),
        Err(e) => println!("  Lowest location:    ({})", e),
    }
    println!(
        "  Ranges per value:   {:.3e}",
        finals.len() as f64 / values.max(1) as f64
    );
    println!("  Elapsed:            {:.3} ms", elapsed.as_secs_f64() * 1000.0);
}
