//! Integration tests: real report documents through the full
//! build-then-serialize pipeline.

use gongsu_core::{Exporter, PayrollEntry, Report, ReportScope, ReportTotals, Serializer};
use gongsu_export::{ConsolidatedReport, SiteReport, TaxReport, WelfareReport};
use gongsu_xlsx::XlsxSerializer;
use rust_decimal_macros::dec;

fn sample_report(scope: ReportScope) -> Report {
    let first = PayrollEntry::new("김철수")
        .job_type("보통인부")
        .ssn_masked("850101-1******")
        .daily_rate(150_000)
        .work_day(3, dec!(1))
        .work_day(4, dec!(1))
        .work_day(5, dec!(0.5))
        .total_days(2)
        .total_labor_cost(375_000)
        .deductions(12_000, 1_200, 8_000, 1_000, 15_000, 3_000);
    let second = PayrollEntry::new("이영희")
        .job_type("철근공")
        .ssn_masked("900615-2******")
        .daily_rate(180_000)
        .work_day(10, dec!(1))
        .work_day(11, dec!(1))
        .total_days(2)
        .total_labor_cost(360_000)
        .deductions(11_000, 1_100, 7_800, 950, 14_000, 2_900);
    let totals = ReportTotals::sum_of(&[first.clone(), second.clone()]);

    Report::new("ABC건설", scope, 2026, 1)
        .entry(first)
        .entry(second)
        .totals(totals)
}

fn site_scope() -> ReportScope {
    ReportScope::Site { project: "강남 리모델링".into() }
}

#[test]
fn site_report_serializes_to_valid_xlsx() {
    let report = sample_report(site_scope());
    let document = SiteReport.build(&report).unwrap();
    let bytes = XlsxSerializer::new().serialize(&document).unwrap();

    // Valid XLSX files start with the PK zip signature
    assert!(bytes.len() > 100);
    assert_eq!(&bytes[0..2], b"PK");
}

#[test]
fn consolidated_report_serializes_to_valid_xlsx() {
    let report = sample_report(ReportScope::Consolidated {
        projects: vec!["강남 리모델링".into(), "판교 신축".into()],
    });
    let document = ConsolidatedReport.build(&report).unwrap();
    let bytes = XlsxSerializer::new().serialize(&document).unwrap();
    assert!(bytes.len() > 100);
    assert_eq!(&bytes[0..2], b"PK");
}

#[test]
fn welfare_report_serializes_both_sheets() {
    let report = sample_report(site_scope());
    let document = WelfareReport.build(&report).unwrap();
    assert_eq!(document.sheets.len(), 2);

    let bytes = XlsxSerializer::new().serialize(&document).unwrap();
    assert!(bytes.len() > 100);
    assert_eq!(&bytes[0..2], b"PK");
}

#[test]
fn tax_report_serializes_to_valid_xlsx() {
    let report = sample_report(site_scope());
    let document = TaxReport.build(&report).unwrap();
    let bytes = XlsxSerializer::new().serialize(&document).unwrap();
    assert!(bytes.len() > 100);
    assert_eq!(&bytes[0..2], b"PK");
}

#[test]
fn serialization_is_repeatable_from_the_same_document() {
    let report = sample_report(site_scope());
    let document = SiteReport.build(&report).unwrap();
    let rebuilt = SiteReport.build(&report).unwrap();
    // the abstract documents are structurally identical, so the serializer
    // receives the exact same input on both runs
    assert_eq!(document, rebuilt);

    let bytes = XlsxSerializer::new().serialize(&document).unwrap();
    assert_eq!(&bytes[0..2], b"PK");
}

#[test]
fn empty_report_serializes_without_error() {
    let report = Report::new("ABC건설", site_scope(), 2026, 1);
    let document = SiteReport.build(&report).unwrap();
    let bytes = XlsxSerializer::new().serialize(&document).unwrap();
    assert_eq!(&bytes[0..2], b"PK");
}
