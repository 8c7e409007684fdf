//! Labor-Welfare agency report: insurance sheet plus work-history sheet.
//!
//! Both sheets are built from the same report. Neither carries a totals row;
//! the agency sums on its side. The acquisition/loss date columns are left
//! blank for manual fill in the agency workflow.

use gongsu_core::sheet::Document;
use gongsu_core::{ExportError, Exporter, Report};

use crate::header::HeaderBlock;
use crate::{layout, naming, table};

#[derive(Clone, Copy, Debug, Default)]
pub struct WelfareReport;

impl WelfareReport {
    fn header(title: &str, report: &Report) -> HeaderBlock {
        let mut header = HeaderBlock::new(title).organization(&report.organization);
        if let Some(project) = report.project() {
            header = header.project(project);
        }
        header.period(report.year, report.month)
    }
}

impl Exporter for WelfareReport {
    fn label(&self) -> &'static str {
        "근로복지공단_신고양식"
    }

    fn build(&self, report: &Report) -> Result<Document, ExportError> {
        let insurance = table::assemble(
            "보험신고",
            &Self::header("일용근로자 보험료 신고내역", report),
            &layout::insurance_columns(),
            &report.entries,
            None,
            2,
        );
        let work_history = table::assemble(
            "근무내역",
            &Self::header("일용근로자 근무내역", report),
            &layout::work_history_columns(),
            &report.entries,
            None,
            2,
        );
        Ok(Document { sheets: vec![insurance, work_history] })
    }

    fn file_name(&self, report: &Report) -> String {
        naming::file_name(self.label(), report.project(), report.year, report.month)
    }
}
