//! Single pass scanner over an engine schematic.
//!
//! Only the current and the previous row are ever kept in memory. A number is
//! resolved against the previous row once it's closed, and against the next
//! row as symbols appear on it.

mod kind;
mod ledger;
mod row;
mod state;
mod token;


use core::fmt;
use core::mem;

use serde::Serialize;

use crate::error::ScanError;

pub use self::kind::Kind;
pub use self::token::Token;

use self::ledger::GearLedger;
use self::row::RowIndex;
use self::state::ScanState;

/// The two totals computed from a schematic.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Sum of all numbers adjacent to a symbol.
    pub parts: u64,
    /// Sum of the ratios of all gears.
    pub gears: u64,
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.parts, self.gears)
    }
}

/// Scan a complete schematic.
///
/// # Examples
///
/// ```
/// let totals = schematic::scan(b"467..114..\n...*......\n..35..633.\n".iter().copied())?;
/// assert_eq!(totals.parts, 467 + 35);
/// assert_eq!(totals.gears, 467 * 35);
/// # Ok::<_, schematic::ScanError>(())
/// ```
pub fn scan<I>(input: I) -> Result<Totals, ScanError>
where
    I: IntoIterator<Item = u8>,
{
    let mut scanner = Scanner::new();

    for b in input {
        scanner.feed(b)?;
    }

    scanner.finish()
}

/// Streaming scanner, fed one byte at a time.
pub struct Scanner {
    state: ScanState,
    previous: RowIndex,
    current: RowIndex,
    ledger: GearLedger,
    parts: u64,
}

impl Scanner {
    /// Construct a new scanner.
    pub fn new() -> Self {
        Self {
            state: ScanState::new(),
            previous: RowIndex::default(),
            current: RowIndex::default(),
            ledger: GearLedger::default(),
            parts: 0,
        }
    }

    /// Feed the next byte of the schematic.
    pub fn feed(&mut self, b: u8) -> Result<(), ScanError> {
        let column = self.state.step();

        match b {
            b'\n' => {
                self.empty()?;
                self.previous = mem::take(&mut self.current);
                log::debug!(
                    "row {}: {} uncounted number(s)",
                    self.state.row(),
                    self.previous.uncounted()
                );
                self.state.reset();
            }
            b'.' => {
                self.empty()?;
            }
            b'0'..=b'9' => {
                self.state.digit(b)?;
            }
            b => {
                self.symbol(column, Kind::symbol(b))?;
            }
        }

        Ok(())
    }

    /// Finish scanning and compute the totals.
    ///
    /// A number which is still open because the input didn't end with a
    /// newline is dropped.
    pub fn finish(self) -> Result<Totals, ScanError> {
        if self.state.is_building() {
            log::warn!(
                "row {}: dropping unterminated number, input should end with a newline",
                self.state.row()
            );
        }

        let gears = self.ledger.finalize()?;

        Ok(Totals {
            parts: self.parts,
            gears,
        })
    }

    fn empty(&mut self) -> Result<(), ScanError> {
        if let Some(token) = self.state.empty()? {
            self.resolve(token)?;
        }

        Ok(())
    }

    fn symbol(&mut self, column: usize, kind: Kind) -> Result<(), ScanError> {
        self.current.add_symbol(column, kind);

        if let Some(token) = self.state.symbol(kind)? {
            self.resolve(token)?;
        }

        let row = self.state.row();

        for entry in self.previous.numbers_adjacent_to(column) {
            if !entry.counted {
                credit(&mut self.parts, entry.token.value())?;
                entry.counted = true;
            }

            if kind == Kind::Star {
                self.ledger.register(column, row, entry.token.value());
            }
        }

        Ok(())
    }

    /// Resolve a freshly closed number against the symbols known so far.
    fn resolve(&mut self, token: Token) -> Result<(), ScanError> {
        let (start, end) = (token.start(), token.end());
        let row = self.state.row();

        let kind = token
            .kind()
            .least_upper_bound(self.previous.symbol_kind_in_range(start, end));

        let counted = kind.is_symbol();

        if counted {
            credit(&mut self.parts, token.value())?;
        }

        if kind == Kind::Star {
            for column in self.current.gears_in_range(start, end) {
                self.ledger.register(column, row, token.value());
            }

            for column in self.previous.gears_in_range(start, end) {
                self.ledger.register(column, row.saturating_sub(1), token.value());
            }
        }

        log::trace!(
            "{row}:{}: {} spanning {start}..={end} is {kind:?}",
            self.state.column(),
            token.value()
        );

        self.current.add_number(token, counted);
        Ok(())
    }
}

impl Default for Scanner {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn credit(parts: &mut u64, value: u64) -> Result<(), ScanError> {
    *parts = parts
        .checked_add(value)
        .ok_or(ScanError::Overflow { what: "part sum" })?;
    Ok(())
}
