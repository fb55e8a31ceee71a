//! Almanac solver CLI
//!
//! Usage: almanac_solve [PATH] [--part 1|2|both] [--sequential] [-v...]
//!
//! Example:
//!   almanac_solve input.txt
//!   almanac_solve input.txt --part 2 --sequential -vv
//!
//! Part 1 is the lowest location of any listed seed; part 2 reads the seed
//! list as (start, length) pairs and maps whole ranges through the stages.

use almanac_cli::logging::{LogConfig, init_logging};
use almanac_cli::report::{format_almanac_error, format_load_error};
use almanac_pipeline::constants::DEFAULT_INPUT_FILE;
use almanac_pipeline::{
    SolveOptions, load_almanac, lowest_location_for_seed_ranges, lowest_location_for_seeds,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Part {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
    Both,
}

#[derive(Debug, Parser)]
#[command(name = "almanac_solve", version, about = "Lowest location for almanac seeds and seed ranges")]
struct Args {
    /// Almanac file
    #[arg(default_value = DEFAULT_INPUT_FILE)]
    path: PathBuf,

    /// Which answer to compute
    #[arg(long, value_enum, default_value_t = Part::Both)]
    part: Part,

    /// Run on a single thread
    #[arg(long)]
    sequential: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&LogConfig::from_verbosity(args.verbose));

    println!("Loading almanac: {}", args.path.display());
    let start = Instant::now();

    let almanac = match load_almanac(&args.path) {
        Ok(almanac) => almanac,
        Err(e) => {
            eprintln!("Error: {}", format_load_error(&args.path, &e));
            return ExitCode::FAILURE;
        }
    };
    info!(
        seeds = almanac.seeds().len(),
        stages = almanac.stages().len(),
        "almanac loaded"
    );

    let options = SolveOptions::default().with_parallel(!args.sequential);

    if matches!(args.part, Part::One | Part::Both) {
        match lowest_location_for_seeds(&almanac, &options) {
            Ok(location) => println!("Part 1 (seeds):       {}", location),
            Err(e) => {
                eprintln!("Error: part 1: {}", format_almanac_error(&e));
                return ExitCode::FAILURE;
            }
        }
    }

    if matches!(args.part, Part::Two | Part::Both) {
        match lowest_location_for_seed_ranges(&almanac, &options) {
            Ok(location) => println!("Part 2 (seed ranges): {}", location),
            Err(e) => {
                eprintln!("Error: part 2: {}", format_almanac_error(&e));
                return ExitCode::FAILURE;
            }
        }
    }

    println!("Elapsed: {:.3} seconds", start.elapsed().as_secs_f64());
    ExitCode::SUCCESS
}
