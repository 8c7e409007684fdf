//! Day-grid expander.
//!
//! Projects a sparse day→quantity map onto the fixed 31-slot day grid.

use gongsu_core::sheet::CellValue;
use gongsu_core::DayOfMonth;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Number of day slots in the grid, independent of the reporting month
pub const DAY_SLOTS: usize = 31;

/// Expand a work-day map to exactly 31 cells, position `i` (1-indexed)
/// holding the quantity for day `i` when present and greater than zero,
/// `Empty` otherwise. Zero quantities render blank so "no work" and an
/// actual zero stay visually distinguishable; keys outside 1..=31 are
/// ignored.
pub fn expand(work_days: &BTreeMap<DayOfMonth, Decimal>) -> Vec<CellValue> {
    (1..=DAY_SLOTS as u8)
        .map(|day| match work_days.get(&day) {
            Some(quantity) if *quantity > Decimal::ZERO => {
                CellValue::Number(quantity.to_f64().unwrap_or(0.0))
            }
            _ => CellValue::Empty,
        })
        .collect()
}
