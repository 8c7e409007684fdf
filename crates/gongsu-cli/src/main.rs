//! gongsu CLI - Day-Labor Payroll Report Engine
//!
//! Command-line interface for checking report inputs and exporting the four
//! report formats as xlsx files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use rust_decimal::Decimal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gongsu_core::{Exporter, Report, ReportScope, ReportTotals, Serializer};
use gongsu_export::{ConsolidatedReport, SiteReport, TaxReport, WelfareReport};
use gongsu_xlsx::XlsxSerializer;

#[derive(Parser)]
#[command(name = "gongsu")]
#[command(author, version, about = "Day-labor payroll report engine", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a report file and print a summary with consistency diagnostics
    Check {
        /// Input report (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Build report document(s) and write them as xlsx files
    Export {
        /// Input report (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Report format to export
        #[arg(short, long, value_enum, default_value = "all")]
        format: Format,

        /// Output directory
        #[arg(short, long, env = "GONGSU_OUT_DIR", default_value = ".")]
        out: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Site,
    Consolidated,
    Welfare,
    Tax,
    All,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file } => check(&file),
        Commands::Export { file, format, out } => export(&file, format, &out),
    }
}

fn load_report(file: &Path) -> Result<Report> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse report {}", file.display()))
}

/// Parse and summarize a report. Drift between supplied aggregates and the
/// entry data is reported as warnings only; upstream data is tolerated,
/// never rejected, so this always exits 0 once the file parses.
fn check(file: &Path) -> Result<()> {
    let report = load_report(file)?;

    let scope = match &report.scope {
        ReportScope::Site { project } => format!("현장 {project}"),
        ReportScope::Consolidated { projects } => {
            format!("통합본 ({}개 현장)", projects.len())
        }
    };
    println!(
        "{} / {} / {}년 {:02}월 / {} workers",
        report.organization,
        scope,
        report.year,
        report.month,
        report.entries.len(),
    );

    let today = chrono::Local::now().date_naive();
    if (report.year, report.month) > (today.year(), today.month()) {
        tracing::warn!(
            year = report.year,
            month = report.month,
            "reporting period lies in the future"
        );
    }

    for (index, entry) in report.entries.iter().enumerate() {
        let day_sum: Decimal = entry.work_days.values().copied().sum();
        if day_sum != entry.total_man_days {
            tracing::warn!(
                row = index + 1,
                worker = %entry.worker_name,
                supplied = %entry.total_man_days,
                summed = %day_sum,
                "total_man_days drifts from the work-day grid"
            );
        }
        if entry.deduction_sum() != entry.total_deductions {
            tracing::warn!(
                row = index + 1,
                worker = %entry.worker_name,
                supplied = entry.total_deductions,
                summed = entry.deduction_sum(),
                "total_deductions drifts from the deduction fields"
            );
        }
        if entry.net_pay != entry.total_labor_cost - entry.total_deductions {
            tracing::warn!(
                row = index + 1,
                worker = %entry.worker_name,
                "net_pay drifts from labor cost minus deductions"
            );
        }
    }

    let summed = ReportTotals::sum_of(&report.entries);
    if summed == report.totals {
        println!("totals consistent with {} entries", report.entries.len());
    } else {
        tracing::warn!("supplied totals drift from the entry sums");
        println!("totals drift detected (see warnings); rendering uses the supplied totals");
    }

    Ok(())
}

fn exporters_for(format: Format) -> Vec<Box<dyn Exporter + Send + Sync>> {
    match format {
        Format::Site => vec![Box::new(SiteReport)],
        Format::Consolidated => vec![Box::new(ConsolidatedReport)],
        Format::Welfare => vec![Box::new(WelfareReport)],
        Format::Tax => vec![Box::new(TaxReport)],
        Format::All => vec![
            Box::new(SiteReport),
            Box::new(ConsolidatedReport),
            Box::new(WelfareReport),
            Box::new(TaxReport),
        ],
    }
}

/// Build and write the requested document(s). Each export is a pure function
/// of the report, so the batch runs in parallel with no coordination.
fn export(file: &Path, format: Format, out: &Path) -> Result<()> {
    let report = load_report(file)?;
    fs::create_dir_all(out)
        .with_context(|| format!("failed to create output directory {}", out.display()))?;

    let written = exporters_for(format)
        .par_iter()
        .map(|exporter| -> Result<PathBuf> {
            let document = exporter.build(&report)?;
            let bytes = XlsxSerializer::new().serialize(&document)?;
            let path = out.join(exporter.file_name(&report));
            fs::write(&path, bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(file = %path.display(), label = exporter.label(), "wrote report");
            Ok(path)
        })
        .collect::<Result<Vec<_>>>()?;

    for path in written {
        println!("{}", path.display());
    }

    Ok(())
}
