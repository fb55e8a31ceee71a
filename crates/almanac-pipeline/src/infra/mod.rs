//! Infrastructure layer - I/O and external dependencies
//!
//! This module handles file operations and the almanac text format.

pub mod almanac_io;
