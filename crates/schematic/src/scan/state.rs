use arrayvec::ArrayString;

use crate::error::{Pos, ScanError};
use crate::scan::{Kind, Token};

/// Maximum number of digits in a number, enough for any `u64`.
const DIGITS: usize = 20;

/// A number whose digits are still being read.
struct Builder {
    start: usize,
    /// Adjacency evidence found to the left of the digits.
    kind: Kind,
    digits: ArrayString<DIGITS>,
}

impl Builder {
    fn build(self, row: usize, end: usize, kind: Kind) -> Result<Token, ScanError> {
        let value = self
            .digits
            .parse::<u64>()
            .map_err(|error| ScanError::MalformedNumber {
                pos: Pos::new(row, self.start),
                error,
            })?;

        Ok(Token::new(self.start, end, value, kind))
    }
}

/// Cursor over the stream and the number currently being built.
pub(crate) struct ScanState {
    builder: Option<Builder>,
    last: Kind,
    row: usize,
    column: usize,
    /// Number of characters stepped over on the current row.
    len: usize,
}

impl ScanState {
    pub(crate) fn new() -> Self {
        Self {
            builder: None,
            last: Kind::Empty,
            row: 0,
            column: 0,
            len: 0,
        }
    }

    /// Current row.
    #[inline]
    pub(crate) fn row(&self) -> usize {
        self.row
    }

    /// Column of the character being processed.
    #[inline]
    pub(crate) fn column(&self) -> usize {
        self.column
    }

    /// Test if a number is being built.
    #[inline]
    pub(crate) fn is_building(&self) -> bool {
        self.builder.is_some()
    }

    /// Advance to the next character and return its column.
    #[inline]
    pub(crate) fn step(&mut self) -> usize {
        self.column = self.len;
        self.len += 1;
        self.column
    }

    /// Start a new row.
    pub(crate) fn reset(&mut self) {
        self.builder = None;
        self.last = Kind::Empty;
        self.column = 0;
        self.len = 0;
        self.row += 1;
    }

    /// Append a digit to the current number, starting one if needed.
    pub(crate) fn digit(&mut self, d: u8) -> Result<(), ScanError> {
        let builder = match &mut self.builder {
            Some(builder) => builder,
            builder => {
                let kind = if self.last.is_symbol() {
                    self.last
                } else {
                    Kind::Digit
                };

                builder.insert(Builder {
                    start: self.column.saturating_sub(1),
                    kind,
                    digits: ArrayString::new(),
                })
            }
        };

        if builder.digits.try_push(char::from(d)).is_err() {
            return Err(ScanError::DigitCapacity {
                pos: Pos::new(self.row, builder.start),
                cap: DIGITS,
            });
        }

        self.last = Kind::Digit;
        Ok(())
    }

    /// Process a symbol, closing the current number as adjacent to it.
    pub(crate) fn symbol(&mut self, kind: Kind) -> Result<Option<Token>, ScanError> {
        self.last = kind;

        let Some(builder) = self.builder.take() else {
            return Ok(None);
        };

        let left = builder.kind;
        let token = builder.build(self.row, self.column, left)?;
        Ok(Some(token.with_kind(left.least_upper_bound(kind))))
    }

    /// Process an empty cell or a newline, closing the current number.
    pub(crate) fn empty(&mut self) -> Result<Option<Token>, ScanError> {
        self.last = Kind::Empty;

        let Some(builder) = self.builder.take() else {
            return Ok(None);
        };

        let kind = builder.kind;
        Ok(Some(builder.build(self.row, self.column, kind)?))
    }
}
