//! # gongsu-xlsx
//!
//! Excel serializer for gongsu report documents.
//!
//! The style tokens of the abstract document model are resolved once into a
//! bundle of `rust_xlsxwriter` formats, then each [`SheetRow`] is mapped onto
//! a worksheet: title rows become a merged band across the sheet width,
//! metadata rows a bold label plus value, cell rows plain formatted writes.
//! Any backend failure aborts the whole document; no partial output is
//! returned.
//!
//! ## Example
//!
//! ```rust,ignore
//! use gongsu_core::{Exporter, Serializer};
//! use gongsu_export::SiteReport;
//! use gongsu_xlsx::XlsxSerializer;
//!
//! let document = SiteReport.build(&report)?;
//! let bytes = XlsxSerializer::new().serialize(&document)?;
//! std::fs::write(SiteReport.file_name(&report), bytes)?;
//! ```

use gongsu_core::sheet::{
    Cell, CellStyle, CellValue, ColumnWidth, Document, NumFmt, Sheet, SheetRow,
};
use gongsu_core::{ExportError, Serializer};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};

/// Excel document serializer
#[derive(Clone, Copy, Debug, Default)]
pub struct XlsxSerializer;

impl XlsxSerializer {
    pub fn new() -> Self {
        Self
    }

    fn write_sheet(
        worksheet: &mut Worksheet,
        sheet: &Sheet,
        formats: &Formats,
    ) -> Result<(), ExportError> {
        worksheet
            .set_name(&sheet.name)
            .map_err(|e| ExportError::Workbook(e.to_string()))?;

        let last_col = sheet.widths.len().saturating_sub(1) as u16;

        for (row, sheet_row) in sheet.rows.iter().enumerate() {
            let row = row as u32;
            match sheet_row {
                SheetRow::Title(text) => {
                    if last_col > 0 {
                        worksheet
                            .merge_range(row, 0, row, last_col, text, &formats.title)
                            .map_err(|e| ExportError::Workbook(e.to_string()))?;
                    } else {
                        worksheet
                            .write_with_format(row, 0, text.as_str(), &formats.title)
                            .map_err(|e| ExportError::Workbook(e.to_string()))?;
                    }
                }
                SheetRow::Blank => {}
                SheetRow::Meta { label, value } => {
                    worksheet
                        .write_with_format(row, 0, label.as_str(), &formats.meta_label)
                        .map_err(|e| ExportError::Workbook(e.to_string()))?;
                    worksheet
                        .write_with_format(row, 1, value.as_str(), &formats.meta_value)
                        .map_err(|e| ExportError::Workbook(e.to_string()))?;
                }
                SheetRow::Cells(cells) => {
                    for (col, cell) in cells.iter().enumerate() {
                        Self::write_cell(worksheet, row, col as u16, cell, formats)?;
                    }
                }
            }
        }

        for (col, width) in sheet.widths.iter().enumerate() {
            let chars = match width {
                ColumnWidth::Narrow => 5,
                ColumnWidth::Medium => 12,
                ColumnWidth::Wide => 18,
            };
            worksheet.set_column_width(col as u16, chars).ok();
        }

        if let Some((row, col)) = sheet.freeze {
            worksheet.set_freeze_panes(row, col).ok();
        }

        Ok(())
    }

    fn write_cell(
        worksheet: &mut Worksheet,
        row: u32,
        col: u16,
        cell: &Cell,
        formats: &Formats,
    ) -> Result<(), ExportError> {
        let format = formats.resolve(cell.style, cell.fmt);
        let result = match &cell.value {
            CellValue::Empty => worksheet.write_with_format(row, col, "", format),
            CellValue::Text(text) => worksheet.write_with_format(row, col, text.as_str(), format),
            CellValue::Number(value) => worksheet.write_with_format(row, col, *value, format),
        };
        result.map_err(|e| ExportError::Workbook(e.to_string()))?;
        Ok(())
    }
}

impl Serializer for XlsxSerializer {
    type Output = Vec<u8>;

    fn serialize(&self, document: &Document) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();
        let formats = Formats::new();

        for sheet in &document.sheets {
            let worksheet = workbook.add_worksheet();
            Self::write_sheet(worksheet, sheet, &formats)?;
        }

        workbook
            .save_to_buffer()
            .map_err(|e| ExportError::Workbook(format!("Failed to create Excel: {e}")))
    }
}

/// Resolved formats, one per (style token, numeric format) combination
/// that occurs in the documents
struct Formats {
    title: Format,
    meta_label: Format,
    meta_value: Format,
    header: Format,
    band_a: Format,
    band_a_money: Format,
    band_b: Format,
    band_b_money: Format,
    totals: Format,
    totals_money: Format,
    plain: Format,
    plain_money: Format,
}

impl Formats {
    fn new() -> Self {
        let title = Format::new()
            .set_bold()
            .set_font_size(14)
            .set_align(FormatAlign::Center);

        let meta_label = Format::new().set_bold();
        let meta_value = Format::new();

        let header = Format::new()
            .set_bold()
            .set_align(FormatAlign::Center)
            .set_background_color(0x4472C4)
            .set_font_color(0xFFFFFF)
            .set_border(FormatBorder::Thin);

        let band_a = Format::new().set_border(FormatBorder::Thin);

        let band_a_money = Format::new()
            .set_num_format("#,##0")
            .set_border(FormatBorder::Thin);

        let band_b = Format::new()
            .set_background_color(0xDDEBF7) // Light blue
            .set_border(FormatBorder::Thin);

        let band_b_money = Format::new()
            .set_num_format("#,##0")
            .set_background_color(0xDDEBF7) // Light blue
            .set_border(FormatBorder::Thin);

        let totals = Format::new()
            .set_bold()
            .set_background_color(0xE2EFDA)
            .set_border(FormatBorder::Thin);

        let totals_money = Format::new()
            .set_bold()
            .set_num_format("#,##0")
            .set_background_color(0xE2EFDA)
            .set_border(FormatBorder::Thin);

        let plain = Format::new().set_border(FormatBorder::Thin);

        let plain_money = Format::new()
            .set_num_format("#,##0")
            .set_border(FormatBorder::Thin);

        Self {
            title,
            meta_label,
            meta_value,
            header,
            band_a,
            band_a_money,
            band_b,
            band_b_money,
            totals,
            totals_money,
            plain,
            plain_money,
        }
    }

    fn resolve(&self, style: CellStyle, fmt: NumFmt) -> &Format {
        let money = fmt == NumFmt::Comma;
        match style {
            CellStyle::Title => &self.title,
            CellStyle::MetaLabel => &self.meta_label,
            CellStyle::MetaValue => &self.meta_value,
            CellStyle::Header => &self.header,
            CellStyle::BandA => {
                if money { &self.band_a_money } else { &self.band_a }
            }
            CellStyle::BandB => {
                if money { &self.band_b_money } else { &self.band_b }
            }
            CellStyle::Totals => {
                if money { &self.totals_money } else { &self.totals }
            }
            CellStyle::Plain => {
                if money { &self.plain_money } else { &self.plain }
            }
        }
    }
}
