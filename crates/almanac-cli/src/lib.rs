//! Shared pieces of the almanac command-line tools.

pub mod logging;
pub mod report;
