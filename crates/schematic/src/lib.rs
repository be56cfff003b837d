//! Streaming scanner for engine schematics.
//!
//! A schematic is a grid of digits, `.` and symbols. Numbers adjacent to any
//! symbol are part numbers, and a `*` adjacent to exactly two part numbers is
//! a gear whose ratio is their product.

pub mod cli;
mod error;
mod scan;
mod stream;

pub use self::error::{Pos, ScanError};
pub use self::scan::{scan, Kind, Scanner, Token, Totals};
pub use self::stream::{scan_path, scan_reader, Chunks, CHUNK};
