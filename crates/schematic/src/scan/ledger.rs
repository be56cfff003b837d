use std::collections::HashMap;

use crate::error::ScanError;

/// Numbers found adjacent to each gear, keyed by `(column, row)`.
#[derive(Debug, Default)]
pub(crate) struct GearLedger {
    gears: HashMap<(usize, usize), Vec<u64>>,
}

impl GearLedger {
    /// Register a number adjacent to the gear at the given position.
    #[inline]
    pub(crate) fn register(&mut self, column: usize, row: usize, value: u64) {
        self.gears.entry((column, row)).or_default().push(value);
    }

    /// Sum the ratios of all gears with exactly two adjacent numbers.
    pub(crate) fn finalize(self) -> Result<u64, ScanError> {
        let mut total = 0u64;

        for numbers in self.gears.into_values() {
            let [a, b] = numbers[..] else {
                continue;
            };

            let ratio = a
                .checked_mul(b)
                .ok_or(ScanError::Overflow { what: "gear ratio" })?;

            total = total
                .checked_add(ratio)
                .ok_or(ScanError::Overflow { what: "gear sum" })?;
        }

        Ok(total)
    }
}
