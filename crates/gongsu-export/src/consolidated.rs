//! Consolidated report: one organization and period across every site.
//!
//! The grid is identical to the site report; only the header metadata
//! differs (the 구분 marker and the joined list of included projects).

use gongsu_core::sheet::Document;
use gongsu_core::{ExportError, Exporter, Report, ReportScope};

use crate::header::HeaderBlock;
use crate::{layout, naming, table};

#[derive(Clone, Copy, Debug, Default)]
pub struct ConsolidatedReport;

impl Exporter for ConsolidatedReport {
    fn label(&self) -> &'static str {
        "월별_통합본"
    }

    fn build(&self, report: &Report) -> Result<Document, ExportError> {
        let mut header = HeaderBlock::new("일용노무비 지급명세서 (통합본)")
            .organization(&report.organization)
            .extra("구분", "통합본");
        match &report.scope {
            ReportScope::Consolidated { projects } => {
                header = header.extra("포함 현장", projects.join(", "));
            }
            ReportScope::Site { project } => {
                header = header.extra("포함 현장", project.clone());
            }
        }
        let header = header.period(report.year, report.month);

        let columns = layout::payroll_columns();
        let sheet = table::assemble(
            "통합명세서",
            &header,
            &columns,
            &report.entries,
            Some(&report.totals),
            5,
        );
        Ok(Document { sheets: vec![sheet] })
    }

    fn file_name(&self, report: &Report) -> String {
        // Consolidated output never carries a project segment
        naming::file_name(self.label(), None, report.year, report.month)
    }
}
