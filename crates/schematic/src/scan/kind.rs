/// Classification of a single schematic cell.
///
/// Variants are ordered by strength, so the strongest evidence of adjacency is
/// simply the maximum of two kinds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// A `.` or the start of a row.
    #[default]
    Empty,
    /// A digit, or a number with no known adjacent symbol.
    Digit,
    /// Any symbol other than a gear.
    Symbol,
    /// The gear symbol `*`.
    Star,
}

impl Kind {
    /// Classify a byte which is known to be a symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::Kind;
    ///
    /// assert_eq!(Kind::symbol(b'*'), Kind::Star);
    /// assert_eq!(Kind::symbol(b'#'), Kind::Symbol);
    /// ```
    #[inline]
    pub fn symbol(b: u8) -> Self {
        match b {
            b'*' => Kind::Star,
            _ => Kind::Symbol,
        }
    }

    /// The strongest of two kinds.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::Kind;
    ///
    /// assert_eq!(Kind::Digit.least_upper_bound(Kind::Star), Kind::Star);
    /// assert_eq!(Kind::Symbol.least_upper_bound(Kind::Empty), Kind::Symbol);
    /// ```
    #[inline]
    pub fn least_upper_bound(self, other: Kind) -> Self {
        self.max(other)
    }

    /// Test if the kind marks adjacency to a symbol.
    #[inline]
    pub fn is_symbol(self) -> bool {
        self >= Kind::Symbol
    }
}
