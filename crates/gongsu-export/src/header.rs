//! Header block builder.
//!
//! Builds the title/metadata band above the column headers: a title row
//! spanning the sheet width, a blank separator, one metadata row per supplied
//! field, and a trailing blank separator before the column-header row.

use gongsu_core::sheet::SheetRow;

/// Title plus ordered (label, value) metadata rows
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderBlock {
    title: String,
    meta: Vec<(String, String)>,
}

impl HeaderBlock {
    /// Create a header block with the format's literal title
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), meta: Vec::new() }
    }

    /// Add the organization row (업체명)
    pub fn organization(self, name: impl Into<String>) -> Self {
        self.extra("업체명", name)
    }

    /// Add the project row (현장명)
    pub fn project(self, name: impl Into<String>) -> Self {
        self.extra("현장명", name)
    }

    /// Add the reporting-period row (귀속연월), rendered as one
    /// `{year}년 {month:02}월` field
    pub fn period(self, year: i32, month: u32) -> Self {
        self.extra("귀속연월", format!("{year}년 {month:02}월"))
    }

    /// Add a format-specific metadata row
    pub fn extra(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.push((label.into(), value.into()));
        self
    }

    /// Number of rows this block occupies, including both separators
    pub fn row_count(&self) -> usize {
        self.meta.len() + 3
    }

    /// Emit the block: title band, blank, metadata rows, blank
    pub fn rows(&self) -> Vec<SheetRow> {
        let mut rows = Vec::with_capacity(self.row_count());
        rows.push(SheetRow::Title(self.title.clone()));
        rows.push(SheetRow::Blank);
        for (label, value) in &self.meta {
            rows.push(SheetRow::Meta { label: label.clone(), value: value.clone() });
        }
        rows.push(SheetRow::Blank);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn block_structure() {
        let block = HeaderBlock::new("일용노무비 지급명세서")
            .organization("ABC건설")
            .project("강남 리모델링")
            .period(2026, 1);

        let rows = block.rows();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows.len(), block.row_count());
        assert_eq!(rows[0], SheetRow::Title("일용노무비 지급명세서".into()));
        assert_eq!(rows[1], SheetRow::Blank);
        assert_eq!(
            rows[2],
            SheetRow::Meta { label: "업체명".into(), value: "ABC건설".into() },
        );
        assert_eq!(
            rows[3],
            SheetRow::Meta { label: "현장명".into(), value: "강남 리모델링".into() },
        );
        assert_eq!(
            rows[4],
            SheetRow::Meta { label: "귀속연월".into(), value: "2026년 01월".into() },
        );
        assert_eq!(rows[5], SheetRow::Blank);
    }

    #[test]
    fn period_zero_pads_the_month() {
        let block = HeaderBlock::new("제목").period(2026, 11);
        assert_eq!(
            block.rows()[2],
            SheetRow::Meta { label: "귀속연월".into(), value: "2026년 11월".into() },
        );
    }

    #[test]
    fn title_only_block_keeps_both_separators() {
        let rows = HeaderBlock::new("제목").rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], SheetRow::Blank);
        assert_eq!(rows[2], SheetRow::Blank);
    }
}
