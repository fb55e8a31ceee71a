//! Almanac trace CLI
//!
//! Usage: almanac_trace <PATH> [VALUES...] [--from <CATEGORY>]
//!
//! Prints the value of each seed in every category, e.g.
//!   seed 79, soil 81, fertilizer 81, water 81, light 74, temperature 78, humidity 78, location 82
//!
//! Without VALUES the almanac's own seed list is traced. With `--from`, the
//! values belong to that category and only the remaining stages are applied:
//!   almanac_trace input.txt --from light 74

use almanac_cli::logging::{LogConfig, init_logging};
use almanac_cli::report::{format_load_error, format_trace};
use almanac_pipeline::{AlmanacOptions, load_almanac_with_options};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "almanac_trace", version, about = "Print a seed's value in every category")]
struct Args {
    /// Almanac file
    path: PathBuf,

    /// Values to trace (defaults to the almanac's seed list)
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Category the values belong to
    #[arg(long, value_name = "CATEGORY")]
    from: Option<String>,

    /// Accept any number of category maps
    #[arg(long)]
    relaxed: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&LogConfig::from_verbosity(args.verbose));

    let options = if args.relaxed {
        AlmanacOptions::relaxed()
    } else {
        AlmanacOptions::strict()
    };

    let almanac = match load_almanac_with_options(&args.path, &options) {
        Ok(almanac) => almanac,
        Err(e) => {
            eprintln!("Error: {}", format_load_error(&args.path, &e));
            return ExitCode::FAILURE;
        }
    };

    let categories = almanac.categories();

    let Some(from) = args.from else {
        let seeds = if args.values.is_empty() {
            almanac.seeds().to_vec()
        } else {
            args.values
        };
        for seed in seeds {
            println!("{}", format_trace(&categories, &almanac.trace(seed)));
        }
        return ExitCode::SUCCESS;
    };

    let Some(index) = almanac.stage_index(&from) else {
        eprintln!(
            "Error: no category map reads '{}'.\nKnown categories: {}",
            from,
            categories.join(", ")
        );
        return ExitCode::FAILURE;
    };
    if args.values.is_empty() {
        eprintln!("Error: --from {} needs at least one value to trace.", from);
        return ExitCode::FAILURE;
    }

    for value in args.values {
        if let Some(path) = almanac.trace_from(&from, value) {
            println!("{}", format_trace(&categories[index..], &path));
        }
    }

    ExitCode::SUCCESS
}
