//! Row renderers: column headers, entry rows, and the totals row.
//!
//! Every format goes through these three functions, so the projection from
//! entry fields to cells exists exactly once.

use gongsu_core::sheet::{Cell, CellStyle, CellValue, NumFmt, SheetRow};
use gongsu_core::{PayrollEntry, ReportTotals};
use rust_decimal::prelude::ToPrimitive;

use crate::daygrid;
use crate::layout::{Column, ColumnField};

/// The column-header row for a layout
pub fn header_row(columns: &[Column]) -> SheetRow {
    SheetRow::Cells(
        columns
            .iter()
            .map(|c| Cell::text(c.label, CellStyle::Header))
            .collect(),
    )
}

/// Render one entry through the layout. `index` is the 0-based position in
/// the entry sequence; it drives both the No. column (index + 1) and the
/// alternating band (even → BandA, odd → BandB).
pub fn entry_row(entry: &PayrollEntry, index: usize, columns: &[Column]) -> SheetRow {
    let band = if index % 2 == 0 { CellStyle::BandA } else { CellStyle::BandB };
    let days = daygrid::expand(&entry.work_days);

    let cells = columns
        .iter()
        .map(|column| {
            let value = match column.field {
                ColumnField::RowNo => CellValue::Number((index + 1) as f64),
                ColumnField::WorkerName => CellValue::Text(entry.worker_name.clone()),
                ColumnField::JobType => CellValue::Text(entry.job_type.clone()),
                ColumnField::SsnMasked => CellValue::Text(entry.ssn_masked.clone()),
                ColumnField::DailyRate => CellValue::Number(entry.daily_rate as f64),
                ColumnField::Day(day) => days[day as usize - 1].clone(),
                ColumnField::TotalDays => CellValue::Number(f64::from(entry.total_days)),
                ColumnField::TotalManDays => {
                    CellValue::Number(entry.total_man_days.to_f64().unwrap_or(0.0))
                }
                ColumnField::TotalLaborCost => CellValue::Number(entry.total_labor_cost as f64),
                ColumnField::IncomeTax => CellValue::Number(entry.income_tax as f64),
                ColumnField::ResidentTax => CellValue::Number(entry.resident_tax as f64),
                ColumnField::HealthInsurance => CellValue::Number(entry.health_insurance as f64),
                ColumnField::LongtermCare => CellValue::Number(entry.longterm_care as f64),
                ColumnField::NationalPension => CellValue::Number(entry.national_pension as f64),
                ColumnField::EmploymentInsurance => {
                    CellValue::Number(entry.employment_insurance as f64)
                }
                ColumnField::TotalDeductions => CellValue::Number(entry.total_deductions as f64),
                ColumnField::NetPay => CellValue::Number(entry.net_pay as f64),
                // Filled in manually by the receiving agency workflow
                ColumnField::AcquisitionDate | ColumnField::LossDate => CellValue::Empty,
            };
            Cell { value, style: band, fmt: column.fmt }
        })
        .collect();

    SheetRow::Cells(cells)
}

/// Render the totals row from the pre-supplied totals record. The supplied
/// values are rendered as-is, never re-summed from the entries. The first
/// column carries the 합계 label; day and identity columns stay blank.
pub fn totals_row(totals: &ReportTotals, columns: &[Column]) -> SheetRow {
    let cells = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            if i == 0 {
                return Cell::text("합계", CellStyle::Totals);
            }
            let value = match column.field {
                ColumnField::TotalDays => Some(CellValue::Number(f64::from(totals.total_days))),
                ColumnField::TotalManDays => {
                    Some(CellValue::Number(totals.total_man_days.to_f64().unwrap_or(0.0)))
                }
                ColumnField::TotalLaborCost => {
                    Some(CellValue::Number(totals.total_labor_cost as f64))
                }
                ColumnField::IncomeTax => Some(CellValue::Number(totals.income_tax as f64)),
                ColumnField::ResidentTax => Some(CellValue::Number(totals.resident_tax as f64)),
                ColumnField::HealthInsurance => {
                    Some(CellValue::Number(totals.health_insurance as f64))
                }
                ColumnField::LongtermCare => Some(CellValue::Number(totals.longterm_care as f64)),
                ColumnField::NationalPension => {
                    Some(CellValue::Number(totals.national_pension as f64))
                }
                ColumnField::EmploymentInsurance => {
                    Some(CellValue::Number(totals.employment_insurance as f64))
                }
                ColumnField::TotalDeductions => {
                    Some(CellValue::Number(totals.total_deductions as f64))
                }
                ColumnField::NetPay => Some(CellValue::Number(totals.net_pay as f64)),
                // Totals are never distributed across days; identity and
                // per-entry columns have no meaningful total either.
                ColumnField::Day(_)
                | ColumnField::RowNo
                | ColumnField::WorkerName
                | ColumnField::JobType
                | ColumnField::SsnMasked
                | ColumnField::DailyRate
                | ColumnField::AcquisitionDate
                | ColumnField::LossDate => None,
            };
            match value {
                Some(value) => Cell { value, style: CellStyle::Totals, fmt: column.fmt },
                None => Cell { value: CellValue::Empty, style: CellStyle::Totals, fmt: NumFmt::General },
            }
        })
        .collect();

    SheetRow::Cells(cells)
}
