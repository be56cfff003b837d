use core::fmt;
use std::io;
use std::num::ParseIntError;

use thiserror::Error;

/// A row and column combination in a schematic.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pos {
    row: usize,
    column: usize,
}

impl Pos {
    pub(crate) const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Zero-based row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column.
    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = self.row + 1;
        let column = self.column + 1;
        write!(f, "{row}:{column}")
    }
}

/// Error raised while scanning a schematic.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScanError {
    #[error("{pos}: number has more than {cap} digits")]
    DigitCapacity { pos: Pos, cap: usize },
    #[error("{pos}: malformed number")]
    MalformedNumber {
        pos: Pos,
        #[source]
        error: ParseIntError,
    },
    #[error("{what} overflowed")]
    Overflow { what: &'static str },
    #[error("failed to read schematic")]
    Io(#[from] io::Error),
}
