//! Abstract document model.
//!
//! The report builders emit plain values from this module instead of mutating
//! a workbook: a [`Document`] is a list of [`Sheet`]s, a sheet an ordered list
//! of typed rows, a row an ordered list of typed [`Cell`]s carrying a style
//! token and a numeric-format tag. A separate, swappable [`Serializer`]
//! implementation turns the document into concrete bytes, which keeps the only
//! target-library-specific code in one place.
//!
//! Everything derives `PartialEq`, so "building twice from the same report
//! yields the same output" is testable as structural equality.
//!
//! [`Serializer`]: crate::Serializer

use serde::{Deserialize, Serialize};

/// A cell's payload. `Empty` and `Number(0.0)` are distinct on purpose:
/// a blank day cell means "no work", a zero means an actual zero amount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
}

/// Numeric format tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumFmt {
    /// Plain number (day quantities, counts)
    General,
    /// Thousands-separated integer, the currency format
    Comma,
}

/// Style token, resolved once by the serializer into backend formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStyle {
    Title,
    MetaLabel,
    MetaValue,
    Header,
    /// Even-indexed entry band
    BandA,
    /// Odd-indexed entry band
    BandB,
    Totals,
    Plain,
}

/// One typed, styled cell
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub value: CellValue,
    pub style: CellStyle,
    pub fmt: NumFmt,
}

impl Cell {
    /// Blank cell with the given style
    pub fn empty(style: CellStyle) -> Self {
        Self { value: CellValue::Empty, style, fmt: NumFmt::General }
    }

    /// Text cell
    pub fn text(text: impl Into<String>, style: CellStyle) -> Self {
        Self { value: CellValue::Text(text.into()), style, fmt: NumFmt::General }
    }

    /// Plain number cell
    pub fn number(value: f64, style: CellStyle) -> Self {
        Self { value: CellValue::Number(value), style, fmt: NumFmt::General }
    }

    /// Currency cell (thousands-separated integer format)
    pub fn money(value: f64, style: CellStyle) -> Self {
        Self { value: CellValue::Number(value), style, fmt: NumFmt::Comma }
    }
}

/// One row of a sheet
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SheetRow {
    /// Title band spanning the full column width of the sheet
    Title(String),
    /// Blank separator row
    Blank,
    /// Metadata row: bold label cell + value cell
    Meta { label: String, value: String },
    /// Ordinary cell row
    Cells(Vec<Cell>),
}

/// Relative column width class
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnWidth {
    Narrow,
    Medium,
    Wide,
}

/// One named sheet: rows in output order, per-column widths, optional
/// freeze pane position (first unfrozen row, first unfrozen column)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<SheetRow>,
    pub widths: Vec<ColumnWidth>,
    pub freeze: Option<(u32, u16)>,
}

/// A complete abstract document (one or two sheets per report format)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub sheets: Vec<Sheet>,
}
