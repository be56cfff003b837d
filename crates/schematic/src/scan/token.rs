use crate::scan::Kind;

/// A number which has been closed on some row.
///
/// The span `start..=end` covers one column on each side of the digits, so a
/// symbol at any column in the span on an adjacent row touches the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    start: usize,
    end: usize,
    value: u64,
    kind: Kind,
}

impl Token {
    #[inline]
    pub(crate) fn new(start: usize, end: usize, value: u64, kind: Kind) -> Self {
        debug_assert!(start <= end, "{start} > {end}");

        Self {
            start,
            end,
            value,
            kind,
        }
    }

    /// First column covered by the token.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last column covered by the token.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Parsed value of the digits.
    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Strongest adjacency seen on the token's own row.
    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Construct a copy of this token with the given kind.
    #[inline]
    pub fn with_kind(self, kind: Kind) -> Self {
        Self { kind, ..self }
    }

    /// Test if the given column falls in the span of the token.
    #[inline]
    pub fn contains(&self, column: usize) -> bool {
        self.start <= column && column <= self.end
    }
}
