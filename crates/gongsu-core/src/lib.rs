//! # gongsu-core
//!
//! Core domain model and traits for the gongsu payroll report engine.
//!
//! This crate provides:
//! - Domain types: `PayrollEntry`, `Report`, `ReportScope`, `ReportTotals`
//! - The abstract document model: [`sheet`]
//! - Core traits: `Exporter`, `Serializer`
//! - Error types
//!
//! ## Example
//!
//! ```rust
//! use gongsu_core::{PayrollEntry, Report, ReportScope, ReportTotals};
//! use rust_decimal::Decimal;
//!
//! let entry = PayrollEntry::new("김철수")
//!     .job_type("보통인부")
//!     .ssn_masked("850101-1******")
//!     .daily_rate(150_000)
//!     .work_day(3, Decimal::ONE)
//!     .work_day(4, Decimal::ONE)
//!     .total_days(2);
//!
//! let totals = ReportTotals::sum_of(std::slice::from_ref(&entry));
//! let report = Report::new(
//!     "ABC건설",
//!     ReportScope::Site { project: "강남 리모델링".into() },
//!     2026,
//!     1,
//! )
//! .entry(entry)
//! .totals(totals);
//! assert_eq!(report.project(), Some("강남 리모델링"));
//! ```

pub mod sheet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::sheet::Document;

// ============================================================================
// Type Aliases
// ============================================================================

/// Integer-won amount
pub type Won = i64;

/// Day-of-month key into a work-day grid (valid domain 1..=31)
pub type DayOfMonth = u8;

// ============================================================================
// PayrollEntry
// ============================================================================

/// One worker's pre-aggregated payroll record for a reporting period.
///
/// All values arrive computed from the upstream payroll process; the engine
/// renders them verbatim and never recomputes. Every field carries a serde
/// default so a sparse upstream record deserializes with zeros and blanks
/// instead of failing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollEntry {
    /// Worker name
    pub worker_name: String,
    /// Job type (직종)
    pub job_type: String,
    /// National ID with trailing digits redacted
    pub ssn_masked: String,
    /// Daily rate in won
    pub daily_rate: Won,
    /// Day-of-month (1..=31) → man-day quantity. Absent days are absent,
    /// never zero-filled.
    pub work_days: BTreeMap<DayOfMonth, Decimal>,
    /// Days-worked count (출력일수), supplied by upstream
    pub total_days: u32,
    /// Sum of work-day quantities (공수)
    pub total_man_days: Decimal,
    /// Gross labor cost in won (노무비)
    pub total_labor_cost: Won,
    /// Withheld income tax (갑근세)
    pub income_tax: Won,
    /// Withheld resident tax (주민세)
    pub resident_tax: Won,
    /// Health insurance contribution (건강보험)
    pub health_insurance: Won,
    /// Long-term care contribution (요양보험)
    pub longterm_care: Won,
    /// National pension contribution (국민연금)
    pub national_pension: Won,
    /// Employment insurance contribution (고용보험)
    pub employment_insurance: Won,
    /// Sum of the six deductions (공제계)
    pub total_deductions: Won,
    /// Labor cost minus deductions (차감지급액)
    pub net_pay: Won,
}

impl PayrollEntry {
    /// Create a new entry for the given worker
    pub fn new(worker_name: impl Into<String>) -> Self {
        Self {
            worker_name: worker_name.into(),
            ..Self::default()
        }
    }

    /// Set the job type
    pub fn job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = job_type.into();
        self
    }

    /// Set the masked SSN
    pub fn ssn_masked(mut self, ssn: impl Into<String>) -> Self {
        self.ssn_masked = ssn.into();
        self
    }

    /// Set the daily rate
    pub fn daily_rate(mut self, rate: Won) -> Self {
        self.daily_rate = rate;
        self
    }

    /// Record a worked day. Also maintains `total_man_days` as the sum of
    /// the grid, so fixtures built through the builder satisfy that
    /// invariant. `total_days` is not derived: like every other aggregate
    /// it arrives from upstream, via [`Self::total_days`].
    pub fn work_day(mut self, day: DayOfMonth, quantity: Decimal) -> Self {
        self.work_days.insert(day, quantity);
        self.total_man_days = self.work_days.values().copied().sum();
        self
    }

    /// Set the days-worked count (출력일수) as supplied by upstream
    pub fn total_days(mut self, days: u32) -> Self {
        self.total_days = days;
        self
    }

    /// Set the gross labor cost
    pub fn total_labor_cost(mut self, cost: Won) -> Self {
        self.total_labor_cost = cost;
        self
    }

    /// Set the six deduction components plus their sum and the net pay,
    /// mirroring how the upstream process hands them over
    pub fn deductions(
        mut self,
        income_tax: Won,
        resident_tax: Won,
        health_insurance: Won,
        longterm_care: Won,
        national_pension: Won,
        employment_insurance: Won,
    ) -> Self {
        self.income_tax = income_tax;
        self.resident_tax = resident_tax;
        self.health_insurance = health_insurance;
        self.longterm_care = longterm_care;
        self.national_pension = national_pension;
        self.employment_insurance = employment_insurance;
        self.total_deductions = income_tax
            + resident_tax
            + health_insurance
            + longterm_care
            + national_pension
            + employment_insurance;
        self.net_pay = self.total_labor_cost - self.total_deductions;
        self
    }

    /// Sum of the six deduction fields as currently set
    pub fn deduction_sum(&self) -> Won {
        self.income_tax
            + self.resident_tax
            + self.health_insurance
            + self.longterm_care
            + self.national_pension
            + self.employment_insurance
    }
}

// ============================================================================
// Report
// ============================================================================

/// Scope of a report: one site, or a consolidation across sites
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportScope {
    /// Single-project report
    Site { project: String },
    /// Multi-project consolidation within one organization and period
    Consolidated { projects: Vec<String> },
}

impl ReportScope {
    /// The single project name, if this is a site scope
    pub fn project(&self) -> Option<&str> {
        match self {
            Self::Site { project } => Some(project),
            Self::Consolidated { .. } => None,
        }
    }

    pub fn is_consolidated(&self) -> bool {
        matches!(self, Self::Consolidated { .. })
    }
}

/// Pre-summed totals mirroring every numeric field of `PayrollEntry`.
///
/// Supplied by the upstream process; the engine renders these values in the
/// totals row and never re-sums the entries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportTotals {
    pub total_days: u32,
    pub total_man_days: Decimal,
    pub total_labor_cost: Won,
    pub income_tax: Won,
    pub resident_tax: Won,
    pub health_insurance: Won,
    pub longterm_care: Won,
    pub national_pension: Won,
    pub employment_insurance: Won,
    pub total_deductions: Won,
    pub net_pay: Won,
}

impl ReportTotals {
    /// Sum every numeric field across the given entries.
    ///
    /// Used by fixtures and by diagnostic tooling to cross-check supplied
    /// totals; the rendering path itself only ever reads supplied totals.
    pub fn sum_of(entries: &[PayrollEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut acc, e| {
            acc.total_days += e.total_days;
            acc.total_man_days += e.total_man_days;
            acc.total_labor_cost += e.total_labor_cost;
            acc.income_tax += e.income_tax;
            acc.resident_tax += e.resident_tax;
            acc.health_insurance += e.health_insurance;
            acc.longterm_care += e.longterm_care;
            acc.national_pension += e.national_pension;
            acc.employment_insurance += e.employment_insurance;
            acc.total_deductions += e.total_deductions;
            acc.net_pay += e.net_pay;
            acc
        })
    }
}

/// A complete report snapshot handed over by the upstream payroll process
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Organization (업체명)
    pub organization: String,
    /// Site or consolidated scope
    pub scope: ReportScope,
    /// Reporting year
    pub year: i32,
    /// Reporting month (1..=12)
    pub month: u32,
    /// Entries in output order; row numbers are assigned 1..N by this order
    #[serde(default)]
    pub entries: Vec<PayrollEntry>,
    /// Pre-supplied totals
    #[serde(default)]
    pub totals: ReportTotals,
}

impl Report {
    /// Create a new, empty report for the given organization and period
    pub fn new(
        organization: impl Into<String>,
        scope: ReportScope,
        year: i32,
        month: u32,
    ) -> Self {
        Self {
            organization: organization.into(),
            scope,
            year,
            month,
            entries: Vec::new(),
            totals: ReportTotals::default(),
        }
    }

    /// Append an entry
    pub fn entry(mut self, entry: PayrollEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Set the pre-supplied totals
    pub fn totals(mut self, totals: ReportTotals) -> Self {
        self.totals = totals;
        self
    }

    /// The single project name for site scope, `None` for consolidated
    pub fn project(&self) -> Option<&str> {
        self.scope.project()
    }
}

// ============================================================================
// Traits
// ============================================================================

/// A report format: builds an abstract document and names the output file
pub trait Exporter {
    /// Fixed report label used as the filename prefix
    fn label(&self) -> &'static str;

    /// Build the abstract document for this format
    fn build(&self, report: &Report) -> Result<Document, ExportError>;

    /// Deterministic output filename for this format and report
    fn file_name(&self, report: &Report) -> String;
}

/// Turns an abstract document into concrete output bytes
pub trait Serializer {
    type Output;

    /// Serialize the document to the target format
    fn serialize(&self, document: &Document) -> Result<Self::Output, ExportError>;
}

// ============================================================================
// Errors
// ============================================================================

/// Export error
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

// ============================================================================
// Tests
// ============================================================================
