//! Process-level tests for the `export` subcommand.
//!
//! These run the compiled `gongsu` binary against JSON fixtures and verify
//! exit codes, output filenames, and that the written files are xlsx.

use std::path::PathBuf;
use std::process::Command;

fn gongsu_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("target/debug/gongsu")
}

const SITE_REPORT: &str = r#"{
    "organization": "ABC건설",
    "scope": { "kind": "site", "project": "강남 리모델링" },
    "year": 2026,
    "month": 1,
    "entries": [
        {
            "worker_name": "김철수",
            "job_type": "보통인부",
            "ssn_masked": "850101-1******",
            "daily_rate": 150000,
            "work_days": { "3": 1.0, "4": 1.0, "5": 0.5 },
            "total_days": 2,
            "total_man_days": 2.5,
            "total_labor_cost": 375000,
            "income_tax": 12000,
            "resident_tax": 1200,
            "health_insurance": 8000,
            "longterm_care": 1000,
            "national_pension": 15000,
            "employment_insurance": 3000,
            "total_deductions": 40200,
            "net_pay": 334800
        }
    ],
    "totals": {
        "total_days": 2,
        "total_man_days": 2.5,
        "total_labor_cost": 375000,
        "income_tax": 12000,
        "resident_tax": 1200,
        "health_insurance": 8000,
        "longterm_care": 1000,
        "national_pension": 15000,
        "employment_insurance": 3000,
        "total_deductions": 40200,
        "net_pay": 334800
    }
}"#;

fn write_fixture(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("report.json");
    std::fs::write(&path, SITE_REPORT).unwrap();
    path
}

#[test]
fn export_site_writes_the_expected_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir);
    let out = dir.path().join("out");

    let status = Command::new(gongsu_binary())
        .arg("export")
        .arg(&input)
        .args(["--format", "site"])
        .arg("--out")
        .arg(&out)
        .status()
        .expect("failed to execute gongsu");
    assert!(status.success());

    let expected = out.join("현장별_일용신고명세서_강남 리모델링_2026-01.xlsx");
    let bytes = std::fs::read(&expected).expect("exported file missing");
    assert!(bytes.len() > 100);
    assert_eq!(&bytes[0..2], b"PK");
}

#[test]
fn export_all_writes_four_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir);
    let out = dir.path().join("out");

    let status = Command::new(gongsu_binary())
        .arg("export")
        .arg(&input)
        .args(["--format", "all"])
        .arg("--out")
        .arg(&out)
        .status()
        .expect("failed to execute gongsu");
    assert!(status.success());

    let files: Vec<_> = std::fs::read_dir(&out).unwrap().collect();
    assert_eq!(files.len(), 4);
    for file in files {
        let bytes = std::fs::read(file.unwrap().path()).unwrap();
        assert_eq!(&bytes[0..2], b"PK");
    }
}

#[test]
fn export_respects_the_out_dir_env_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir);
    let out = dir.path().join("env_out");

    let status = Command::new(gongsu_binary())
        .arg("export")
        .arg(&input)
        .args(["--format", "tax"])
        .env("GONGSU_OUT_DIR", &out)
        .status()
        .expect("failed to execute gongsu");
    assert!(status.success());

    let expected = out.join("국세청_신고양식_강남 리모델링_2026-01.xlsx");
    assert!(expected.exists());
}

#[test]
fn export_is_deterministic_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir);
    let first_out = dir.path().join("first");
    let second_out = dir.path().join("second");

    for out in [&first_out, &second_out] {
        let status = Command::new(gongsu_binary())
            .arg("export")
            .arg(&input)
            .args(["--format", "site"])
            .arg("--out")
            .arg(out)
            .status()
            .expect("failed to execute gongsu");
        assert!(status.success());
    }

    let name = "현장별_일용신고명세서_강남 리모델링_2026-01.xlsx";
    assert!(first_out.join(name).exists());
    assert!(second_out.join(name).exists());
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let status = Command::new(gongsu_binary())
        .arg("export")
        .arg(dir.path().join("nonexistent.json"))
        .status()
        .expect("failed to execute gongsu");
    assert!(!status.success());
}

#[test]
fn malformed_report_shape_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{ "organization": "ABC건설" }"#).unwrap();

    let status = Command::new(gongsu_binary())
        .arg("export")
        .arg(&path)
        .status()
        .expect("failed to execute gongsu");
    assert!(!status.success());
}
