// tests/log_scanning.rs

use std::io::Write;
use std::path::Path;

use mdwatch::fs::mock::MockFileSystem;
use mdwatch::fs::{FileSystem, RealFileSystem};
use mdwatch::logfile::{is_data_row, parse_row, LogScanner, RowParseError, ScanOutcome};
use mdwatch_test_utils::builders::ThermoLogBuilder;

fn scanner() -> LogScanner {
    LogScanner::new(64 * 1024, "Minimization")
}

#[test]
fn data_row_detection() {
    assert!(is_data_row("100 50.2 -120.5 10.1"));
    assert!(is_data_row("   200 298.7 -119.8 9.8 1010"));
    assert!(is_data_row("300 -5.0 1.0 2.0"));
    // Matches the numeric-prefix pattern; full parsing decides it is bad.
    assert!(is_data_row("200 oops -119.8 9.8"));

    assert!(!is_data_row("abc 1.0 2.0 3.0"));
    assert!(!is_data_row("Step Temp PotEng KinEng Press"));
    assert!(!is_data_row(""));
    assert!(!is_data_row("Setting up run ..."));
}

#[test]
fn parse_four_column_row() {
    let record = parse_row("100 50.2 -120.5 10.1").unwrap();
    assert_eq!(record.step, 100);
    assert_eq!(record.temperature, 50.2);
    assert_eq!(record.potential_energy, -120.5);
    assert_eq!(record.kinetic_energy, 10.1);
    assert_eq!(record.pressure, None);
}

#[test]
fn parse_takes_pressure_from_the_last_column() {
    let record = parse_row("200 298.7 -119.8 9.8 -3344.1 1010").unwrap();
    assert_eq!(record.step, 200);
    assert_eq!(record.pressure, Some(1010.0));
}

#[test]
fn parse_tolerates_surrounding_whitespace() {
    let record = parse_row("   200   298.7   -119.8   9.8   ").unwrap();
    assert_eq!(record.step, 200);
}

#[test]
fn parse_errors_are_typed() {
    assert_eq!(
        parse_row("100 50.2").unwrap_err(),
        RowParseError::TooFewColumns(2)
    );
    assert!(matches!(
        parse_row("200 abc -119.8 9.8").unwrap_err(),
        RowParseError::BadColumn { index: 1, .. }
    ));
}

#[test]
fn scan_selects_the_last_data_row() {
    let fs = MockFileSystem::new();
    let log = ThermoLogBuilder::new()
        .text("LAMMPS run")
        .text("Step Temp PotEng KinEng Press")
        .row_with_pressure(100, 50.2, -120.5, 10.1, 1000.0)
        .row_with_pressure(200, 298.7, -119.8, 9.8, 1010.0)
        .build();
    fs.add_file("sim.log", log);

    match scanner().scan(&fs, Path::new("sim.log")) {
        ScanOutcome::Row(record) => {
            assert_eq!(record.step, 200);
            assert_eq!(record.pressure, Some(1010.0));
        }
        other => panic!("expected a row, got {other:?}"),
    }
}

#[test]
fn scan_reports_missing_log() {
    let fs = MockFileSystem::new();
    assert_eq!(
        scanner().scan(&fs, Path::new("sim.log")),
        ScanOutcome::MissingLog
    );
}

#[test]
fn scan_distinguishes_minimizing_from_waiting() {
    let fs = MockFileSystem::new();
    fs.add_file("waiting.log", "LAMMPS startup banner\n");
    fs.add_file(
        "minimizing.log",
        "LAMMPS startup banner\nMinimization stats:\n",
    );

    assert_eq!(
        scanner().scan(&fs, Path::new("waiting.log")),
        ScanOutcome::NoDataRow { minimizing: false }
    );
    assert_eq!(
        scanner().scan(&fs, Path::new("minimizing.log")),
        ScanOutcome::NoDataRow { minimizing: true }
    );
}

#[test]
fn scan_reports_a_malformed_final_row() {
    let fs = MockFileSystem::new();
    let log = ThermoLogBuilder::new()
        .row(100, 50.2, -120.5, 10.1)
        .text("200 oops -119.8 9.8")
        .build();
    fs.add_file("sim.log", log);

    match scanner().scan(&fs, Path::new("sim.log")) {
        ScanOutcome::Malformed { line, reason } => {
            assert!(line.starts_with("200"));
            assert!(reason.contains("temperature"));
        }
        other => panic!("expected malformed outcome, got {other:?}"),
    }
}

#[test]
fn scan_reads_a_real_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.lammps");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        "header line\n100 50.2 -120.5 10.1 1000\n200 298.7 -119.8 9.8 1010\n"
    )
    .unwrap();

    let fs = RealFileSystem;
    match scanner().scan(&fs, &path) {
        ScanOutcome::Row(record) => assert_eq!(record.step, 200),
        other => panic!("expected a row, got {other:?}"),
    }
}

#[test]
fn tail_window_bounds_the_scan() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.lammps");
    let mut file = std::fs::File::create(&path).unwrap();

    // Old rows pushed far outside a small tail window by filler text.
    writeln!(file, "1 10.0 -1.0 0.1").unwrap();
    for _ in 0..200 {
        writeln!(file, "filler text line that is not a data row").unwrap();
    }
    writeln!(file, "900 300.0 -119.0 9.0").unwrap();

    let small = LogScanner::new(256, "Minimization");
    let fs = RealFileSystem;
    match small.scan(&fs, &path) {
        ScanOutcome::Row(record) => assert_eq!(record.step, 900),
        other => panic!("expected a row, got {other:?}"),
    }
}

#[test]
fn tail_read_starts_on_a_line_boundary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.lammps");
    let mut file = std::fs::File::create(&path).unwrap();
    for i in 0..100 {
        writeln!(file, "{} 100.0 -1.0 0.5", i * 10).unwrap();
    }

    let fs = RealFileSystem;
    let tail = fs.read_tail(&path, 128).unwrap();

    // The first kept line must be complete, so it parses like any other.
    let first = tail.lines().next().unwrap();
    assert!(is_data_row(first));
    assert!(parse_row(first).is_ok());
}
