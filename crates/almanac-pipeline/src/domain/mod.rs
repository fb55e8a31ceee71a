//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and algorithms without I/O dependencies.

pub mod almanac;
pub mod category_map;
pub mod pipeline;
pub mod range;
pub mod rule;
