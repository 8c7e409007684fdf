//! # gongsu-export
//!
//! Report builders and format exporters for the gongsu payroll engine.
//!
//! This crate turns an immutable [`Report`](gongsu_core::Report) into the
//! abstract document for one of four legally-shaped output formats:
//! - Site report (internal per-project record)
//! - Consolidated report (multi-site, one organization and period)
//! - Labor-Welfare agency report (insurance sheet + work-history sheet)
//! - National-Tax agency report
//!
//! All four formats are thin compositions of the same building blocks:
//! the column registry ([`layout`]), the day-grid expander ([`daygrid`]),
//! the header block builder ([`header`]), the row renderers ([`rows`]) and
//! the shared assembly pipeline ([`table`]). A row-rendering fix therefore
//! lands in every format at once.
//!
//! ## Example
//!
//! ```rust
//! use gongsu_core::{Exporter, Report, ReportScope};
//! use gongsu_export::SiteReport;
//!
//! let report = Report::new(
//!     "ABC건설",
//!     ReportScope::Site { project: "강남 리모델링".into() },
//!     2026,
//!     1,
//! );
//! let document = SiteReport.build(&report)?;
//! assert_eq!(document.sheets.len(), 1);
//! assert_eq!(
//!     SiteReport.file_name(&report),
//!     "현장별_일용신고명세서_강남 리모델링_2026-01.xlsx",
//! );
//! # Ok::<(), gongsu_core::ExportError>(())
//! ```

pub mod consolidated;
pub mod daygrid;
pub mod header;
pub mod layout;
pub mod naming;
pub mod rows;
pub mod site;
pub mod table;
pub mod tax;
pub mod welfare;

pub use consolidated::ConsolidatedReport;
pub use site::SiteReport;
pub use tax::TaxReport;
pub use welfare::WelfareReport;
