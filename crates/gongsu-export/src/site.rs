//! Site report: the internal per-project payroll record.

use gongsu_core::sheet::Document;
use gongsu_core::{ExportError, Exporter, Report};

use crate::header::HeaderBlock;
use crate::{layout, naming, table};

/// One sheet on the payroll grid with {organization, project, period}
/// header metadata.
#[derive(Clone, Copy, Debug, Default)]
pub struct SiteReport;

impl Exporter for SiteReport {
    fn label(&self) -> &'static str {
        "현장별_일용신고명세서"
    }

    fn build(&self, report: &Report) -> Result<Document, ExportError> {
        let mut header =
            HeaderBlock::new("일용노무비 지급명세서").organization(&report.organization);
        if let Some(project) = report.project() {
            header = header.project(project);
        }
        let header = header.period(report.year, report.month);

        let columns = layout::payroll_columns();
        let sheet = table::assemble(
            "지급명세서",
            &header,
            &columns,
            &report.entries,
            Some(&report.totals),
            5,
        );
        Ok(Document { sheets: vec![sheet] })
    }

    fn file_name(&self, report: &Report) -> String {
        naming::file_name(self.label(), report.project(), report.year, report.month)
    }
}
