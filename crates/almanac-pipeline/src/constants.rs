//! Almanac related constants

// =============================================================================
// Category chain
// =============================================================================

/// Categories in the order the canonical almanac converts through them
pub const CATEGORY_CHAIN: [&str; 8] = [
    "seed",
    "soil",
    "fertilizer",
    "water",
    "light",
    "temperature",
    "humidity",
    "location",
];

/// Number of category maps in a canonical almanac (seed → ... → location)
pub const STAGE_COUNT: usize = CATEGORY_CHAIN.len() - 1;

/// Category the seed list belongs to
pub const SEED_CATEGORY: &str = CATEGORY_CHAIN[0];

// =============================================================================
// Text format
// =============================================================================

/// Prefix of the seed list line
pub const SEEDS_PREFIX: &str = "seeds:";

/// Suffix of every map section header (`seed-to-soil map:`)
pub const MAP_HEADER_SUFFIX: &str = " map:";

/// Separator between source and destination category in a header
pub const CATEGORY_SEPARATOR: &str = "-to-";

/// Input file read when no path is given
pub const DEFAULT_INPUT_FILE: &str = "input.txt";
