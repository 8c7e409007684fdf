//! National-Tax agency report.
//!
//! One sheet restricted to the three monetary fields the agency receives,
//! with a totals row over the same subset.

use gongsu_core::sheet::Document;
use gongsu_core::{ExportError, Exporter, Report};

use crate::header::HeaderBlock;
use crate::{layout, naming, table};

#[derive(Clone, Copy, Debug, Default)]
pub struct TaxReport;

impl Exporter for TaxReport {
    fn label(&self) -> &'static str {
        "국세청_신고양식"
    }

    fn build(&self, report: &Report) -> Result<Document, ExportError> {
        let mut header =
            HeaderBlock::new("일용근로소득 지급명세서").organization(&report.organization);
        if let Some(project) = report.project() {
            header = header.project(project);
        }
        let header = header.period(report.year, report.month);

        let sheet = table::assemble(
            "국세청신고",
            &header,
            &layout::tax_columns(),
            &report.entries,
            Some(&report.totals),
            2,
        );
        Ok(Document { sheets: vec![sheet] })
    }

    fn file_name(&self, report: &Report) -> String {
        naming::file_name(self.label(), report.project(), report.year, report.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gongsu_core::sheet::{CellValue, SheetRow};
    use gongsu_core::{PayrollEntry, ReportScope, ReportTotals};
    use pretty_assertions::assert_eq;

    fn report() -> Report {
        let entry = PayrollEntry::new("김철수")
            .ssn_masked("850101-1******")
            .total_labor_cost(375_000)
            .deductions(12_000, 1_200, 8_000, 1_000, 15_000, 3_000);
        let totals = ReportTotals::sum_of(std::slice::from_ref(&entry));
        Report::new(
            "ABC건설",
            ReportScope::Site { project: "강남 리모델링".into() },
            2026,
            1,
        )
        .entry(entry)
        .totals(totals)
    }

    #[test]
    fn sheet_restricts_to_payment_and_tax_columns() {
        let document = TaxReport.build(&report()).unwrap();
        let sheet = &document.sheets[0];
        assert_eq!(sheet.name, "국세청신고");
        assert_eq!(sheet.widths.len(), 5);

        let SheetRow::Cells(cells) = &sheet.rows[7] else {
            panic!("expected the entry row");
        };
        assert_eq!(cells[0].value, CellValue::Text("김철수".into()));
        assert_eq!(cells[2].value, CellValue::Number(375_000.0));
        assert_eq!(cells[3].value, CellValue::Number(12_000.0));
        assert_eq!(cells[4].value, CellValue::Number(1_200.0));
    }

    #[test]
    fn totals_row_covers_the_same_subset() {
        let document = TaxReport.build(&report()).unwrap();
        let sheet = &document.sheets[0];
        let SheetRow::Cells(cells) = sheet.rows.last().unwrap() else {
            panic!("expected the totals row");
        };
        assert_eq!(cells[0].value, CellValue::Text("합계".into()));
        assert_eq!(cells[2].value, CellValue::Number(375_000.0));
        assert_eq!(cells[3].value, CellValue::Number(12_000.0));
        assert_eq!(cells[4].value, CellValue::Number(1_200.0));
    }

    #[test]
    fn file_name_embeds_project_and_period() {
        assert_eq!(
            TaxReport.file_name(&report()),
            "국세청_신고양식_강남 리모델링_2026-01.xlsx",
        );
    }
}
