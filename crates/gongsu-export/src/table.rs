//! Shared sheet assembly pipeline.
//!
//! Every exporter runs the same linear sequence (header block, column
//! headers, entry rows, optional totals row, column widths, freeze panes),
//! so no format can diverge from the others in row or grid mechanics.

use gongsu_core::sheet::Sheet;
use gongsu_core::{PayrollEntry, ReportTotals};

use crate::header::HeaderBlock;
use crate::layout::Column;
use crate::rows;

/// Assemble one sheet. `freeze_cols` is the number of leading identity
/// columns to keep visible while scrolling the grid; the frozen row boundary
/// always sits right below the column-header row.
pub fn assemble(
    name: &str,
    header: &HeaderBlock,
    columns: &[Column],
    entries: &[PayrollEntry],
    totals: Option<&ReportTotals>,
    freeze_cols: u16,
) -> Sheet {
    let mut sheet_rows = header.rows();
    let header_row_index = sheet_rows.len() as u32;
    sheet_rows.push(rows::header_row(columns));

    for (index, entry) in entries.iter().enumerate() {
        sheet_rows.push(rows::entry_row(entry, index, columns));
    }

    if let Some(totals) = totals {
        sheet_rows.push(rows::totals_row(totals, columns));
    }

    Sheet {
        name: name.into(),
        rows: sheet_rows,
        widths: columns.iter().map(|c| c.width).collect(),
        freeze: Some((header_row_index + 1, freeze_cols)),
    }
}
