use std::collections::BTreeMap;

use crate::scan::{Kind, Token};

/// A number closed on a row, and whether it has been credited to the part
/// sum.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry {
    pub(crate) token: Token,
    pub(crate) counted: bool,
}

/// Symbols and numbers of a single row.
#[derive(Debug, Default)]
pub(crate) struct RowIndex {
    symbols: BTreeMap<usize, Kind>,
    numbers: Vec<Entry>,
}

impl RowIndex {
    /// Record a symbol at the given column.
    #[inline]
    pub(crate) fn add_symbol(&mut self, column: usize, kind: Kind) {
        self.symbols.insert(column, kind);
    }

    /// Record a number closed on this row.
    #[inline]
    pub(crate) fn add_number(&mut self, token: Token, counted: bool) {
        self.numbers.push(Entry { token, counted });
    }

    /// The strongest symbol in the inclusive column range, or
    /// [`Kind::Empty`] if there is none.
    pub(crate) fn symbol_kind_in_range(&self, start: usize, end: usize) -> Kind {
        self.symbols
            .range(start..=end)
            .map(|(_, kind)| *kind)
            .max()
            .unwrap_or_default()
    }

    /// Columns of gears in the inclusive column range.
    pub(crate) fn gears_in_range(
        &self,
        start: usize,
        end: usize,
    ) -> impl Iterator<Item = usize> + '_ {
        self.symbols
            .range(start..=end)
            .filter(|(_, kind)| **kind == Kind::Star)
            .map(|(column, _)| *column)
    }

    /// Numbers whose span covers the given column.
    pub(crate) fn numbers_adjacent_to(
        &mut self,
        column: usize,
    ) -> impl Iterator<Item = &mut Entry> + '_ {
        self.numbers
            .iter_mut()
            .filter(move |e| e.token.contains(column))
    }

    /// Numbers on this row which were never credited.
    pub(crate) fn uncounted(&self) -> usize {
        self.numbers.iter().filter(|e| !e.counted).count()
    }
}
