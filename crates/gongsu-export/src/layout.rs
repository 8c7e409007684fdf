//! Layout registry: per-format column definitions.
//!
//! Each format family is described as an ordered list of [`Column`]
//! descriptors; the row renderers project entries through these descriptors,
//! so the registry is the single place that decides which columns a format
//! carries, in which order, with which label, numeric format and width.

use gongsu_core::sheet::{ColumnWidth, NumFmt};
use gongsu_core::DayOfMonth;

/// Semantic projection target of a column
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnField {
    /// 1-based sequence number by entry order
    RowNo,
    WorkerName,
    JobType,
    SsnMasked,
    DailyRate,
    /// One of the 31 fixed day slots
    Day(DayOfMonth),
    TotalDays,
    TotalManDays,
    TotalLaborCost,
    IncomeTax,
    ResidentTax,
    HealthInsurance,
    LongtermCare,
    NationalPension,
    EmploymentInsurance,
    TotalDeductions,
    NetPay,
    /// Insurance acquisition date, left blank for manual fill downstream
    AcquisitionDate,
    /// Insurance loss date, left blank for manual fill downstream
    LossDate,
}

/// One column descriptor
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub label: &'static str,
    pub field: ColumnField,
    pub fmt: NumFmt,
    pub width: ColumnWidth,
}

const fn col(
    label: &'static str,
    field: ColumnField,
    fmt: NumFmt,
    width: ColumnWidth,
) -> Column {
    Column { label, field, fmt, width }
}

const DAY_LABELS: [&str; 31] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14",
    "15", "16", "17", "18", "19", "20", "21", "22", "23", "24", "25", "26",
    "27", "28", "29", "30", "31",
];

/// The 31 fixed day-slot columns, labeled "1".."31".
/// Always all 31, regardless of the actual days in the reporting month.
fn day_columns() -> impl Iterator<Item = Column> {
    (1..=31u8).map(|day| {
        col(
            DAY_LABELS[day as usize - 1],
            ColumnField::Day(day),
            NumFmt::General,
            ColumnWidth::Narrow,
        )
    })
}

/// Payroll-grid family, shared verbatim by the site and consolidated
/// reports: row index, 4 identity columns, 31 day slots, 11 summary columns.
pub fn payroll_columns() -> Vec<Column> {
    let mut columns = vec![
        col("No.", ColumnField::RowNo, NumFmt::General, ColumnWidth::Narrow),
        col("성명", ColumnField::WorkerName, NumFmt::General, ColumnWidth::Medium),
        col("직종", ColumnField::JobType, NumFmt::General, ColumnWidth::Medium),
        col("주민번호", ColumnField::SsnMasked, NumFmt::General, ColumnWidth::Wide),
        col("단가", ColumnField::DailyRate, NumFmt::Comma, ColumnWidth::Medium),
    ];
    columns.extend(day_columns());
    columns.extend([
        col("출력일수", ColumnField::TotalDays, NumFmt::General, ColumnWidth::Medium),
        col("공수", ColumnField::TotalManDays, NumFmt::General, ColumnWidth::Medium),
        col("노무비", ColumnField::TotalLaborCost, NumFmt::Comma, ColumnWidth::Medium),
        col("갑근세", ColumnField::IncomeTax, NumFmt::Comma, ColumnWidth::Medium),
        col("주민세", ColumnField::ResidentTax, NumFmt::Comma, ColumnWidth::Medium),
        col("건강보험", ColumnField::HealthInsurance, NumFmt::Comma, ColumnWidth::Medium),
        col("요양보험", ColumnField::LongtermCare, NumFmt::Comma, ColumnWidth::Medium),
        col("국민연금", ColumnField::NationalPension, NumFmt::Comma, ColumnWidth::Medium),
        col("고용보험", ColumnField::EmploymentInsurance, NumFmt::Comma, ColumnWidth::Medium),
        col("공제계", ColumnField::TotalDeductions, NumFmt::Comma, ColumnWidth::Medium),
        col("차감지급액", ColumnField::NetPay, NumFmt::Comma, ColumnWidth::Medium),
    ]);
    columns
}

/// Labor-Welfare insurance sheet
pub fn insurance_columns() -> Vec<Column> {
    vec![
        col("이름", ColumnField::WorkerName, NumFmt::General, ColumnWidth::Medium),
        col("주민번호", ColumnField::SsnMasked, NumFmt::General, ColumnWidth::Wide),
        col("취득일", ColumnField::AcquisitionDate, NumFmt::General, ColumnWidth::Medium),
        col("상실일", ColumnField::LossDate, NumFmt::General, ColumnWidth::Medium),
        col("근무일수", ColumnField::TotalDays, NumFmt::General, ColumnWidth::Medium),
        col("보수월액", ColumnField::TotalLaborCost, NumFmt::Comma, ColumnWidth::Medium),
        col("고용보험료", ColumnField::EmploymentInsurance, NumFmt::Comma, ColumnWidth::Medium),
        col("건강보험료", ColumnField::HealthInsurance, NumFmt::Comma, ColumnWidth::Medium),
        col("국민연금", ColumnField::NationalPension, NumFmt::Comma, ColumnWidth::Medium),
    ]
}

/// Labor-Welfare work-history sheet
pub fn work_history_columns() -> Vec<Column> {
    let mut columns = vec![
        col("이름", ColumnField::WorkerName, NumFmt::General, ColumnWidth::Medium),
        col("주민번호", ColumnField::SsnMasked, NumFmt::General, ColumnWidth::Wide),
    ];
    columns.extend(day_columns());
    columns
}

/// National-Tax sheet
pub fn tax_columns() -> Vec<Column> {
    vec![
        col("성명", ColumnField::WorkerName, NumFmt::General, ColumnWidth::Medium),
        col("주민번호", ColumnField::SsnMasked, NumFmt::General, ColumnWidth::Wide),
        col("지급총액", ColumnField::TotalLaborCost, NumFmt::Comma, ColumnWidth::Medium),
        col("소득세", ColumnField::IncomeTax, NumFmt::Comma, ColumnWidth::Medium),
        col("지방소득세", ColumnField::ResidentTax, NumFmt::Comma, ColumnWidth::Medium),
    ]
}
