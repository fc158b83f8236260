// tests/monitor_loop.rs

//! The async polling shell driven end-to-end with a fake locator, a mock
//! filesystem, and a recording sink.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

use mdwatch::config::ConfigFile;
use mdwatch::fs::mock::MockFileSystem;
use mdwatch::health::HealthThresholds;
use mdwatch::logfile::LogScanner;
use mdwatch::monitor::{ExitReason, Monitor, MonitorCore};
use mdwatch::schedule::PhaseTable;

use mdwatch_test_utils::builders::{ConfigFileBuilder, ThermoLogBuilder};
use mdwatch_test_utils::fake_locator::FakeLocator;
use mdwatch_test_utils::init_tracing;
use mdwatch_test_utils::sink::RecordingSink;

const LOG_PATH: &str = "sim.log";

fn test_config() -> ConfigFile {
    ConfigFileBuilder::new().with_log_file(LOG_PATH).build()
}

fn build_monitor(
    cfg: &ConfigFile,
    locator: FakeLocator,
    fs: MockFileSystem,
    sink: RecordingSink,
    shutdown_rx: mpsc::Receiver<()>,
) -> Monitor<FakeLocator, RecordingSink> {
    let table = PhaseTable::from_config(cfg).unwrap();
    let core = MonitorCore::new(table, HealthThresholds::default());
    let scanner = LogScanner::new(
        cfg.monitor.tail_bytes,
        cfg.monitor.minimization_marker.clone(),
    );
    Monitor::new(
        core,
        cfg.monitor.clone(),
        Duration::from_millis(10),
        scanner,
        locator,
        Arc::new(fs),
        sink,
        shutdown_rx,
    )
}

#[tokio::test]
async fn loop_terminates_after_one_not_running_report() {
    init_tracing();

    let cfg = test_config();
    let sink = RecordingSink::new();
    let lines = sink.handle();
    let (_tx, rx) = mpsc::channel(1);

    let monitor = build_monitor(&cfg, FakeLocator::never(), MockFileSystem::new(), sink, rx);
    let reason = timeout(Duration::from_secs(3), monitor.run())
        .await
        .expect("monitor did not finish within 3 seconds")
        .unwrap();

    assert_eq!(reason, ExitReason::NeverStarted);
    assert_eq!(reason.exit_code(), 1);

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 1, "exactly one terminal report, no further polls");
    assert!(lines[0].contains("not running"));
}

#[tokio::test]
async fn loop_polls_until_the_process_disappears() {
    init_tracing();

    let cfg = test_config();
    let fs = MockFileSystem::new();
    fs.add_file(
        LOG_PATH,
        ThermoLogBuilder::new()
            .text("Step Temp PotEng KinEng Press")
            .row_with_pressure(100, 50.2, -120.5, 10.1, 1000.0)
            .row_with_pressure(200, 298.7, -119.8, 9.8, 1010.0)
            .build(),
    );

    let sink = RecordingSink::new();
    let lines = sink.handle();
    let (_tx, rx) = mpsc::channel(1);

    let monitor = build_monitor(&cfg, FakeLocator::alive_for(4242, 2), fs, sink, rx);
    let reason = timeout(Duration::from_secs(3), monitor.run())
        .await
        .expect("monitor did not finish within 3 seconds")
        .unwrap();

    assert_eq!(reason, ExitReason::Finished);
    assert_eq!(reason.exit_code(), 0);

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 3, "two live polls plus the terminal report");
    assert!(lines[0].contains("pid 4242"));
    assert!(lines[0].contains("step 200"), "latest row wins");
    assert!(lines[0].contains("(normal)"));
    assert!(lines[1].contains("step 200"));
    assert!(lines[2].contains("not running"));
    assert!(lines[2].contains("step 200"), "terminal report keeps last state");
}

#[tokio::test]
async fn loop_survives_transient_log_states() {
    init_tracing();

    let cfg = test_config();
    // Log appears empty: rows never arrive, only the minimization marker.
    let fs = MockFileSystem::new();
    fs.add_file(LOG_PATH, "Minimization stats:\n");

    let sink = RecordingSink::new();
    let lines = sink.handle();
    let (_tx, rx) = mpsc::channel(1);

    let monitor = build_monitor(&cfg, FakeLocator::alive_for(7, 2), fs, sink, rx);
    let reason = timeout(Duration::from_secs(3), monitor.run())
        .await
        .expect("monitor did not finish within 3 seconds")
        .unwrap();

    // Process was seen, so this still counts as a normal stop.
    assert_eq!(reason, ExitReason::Finished);

    let lines = lines.lock().unwrap();
    assert!(lines[0].contains("minimizing"));
    assert!(lines[1].contains("minimizing"));
}

#[tokio::test]
async fn shutdown_signal_interrupts_the_loop() {
    init_tracing();

    let cfg = test_config();
    let fs = MockFileSystem::new();
    fs.add_file(
        LOG_PATH,
        ThermoLogBuilder::new().row(100, 200.0, -120.5, 10.1).build(),
    );

    let sink = RecordingSink::new();
    let (tx, rx) = mpsc::channel(1);
    tx.send(()).await.unwrap();

    // Alive long enough that only the shutdown signal can end the loop
    // within the timeout.
    let monitor = build_monitor(&cfg, FakeLocator::alive_for(7, 100), fs, sink, rx);
    let reason = timeout(Duration::from_secs(3), monitor.run())
        .await
        .expect("monitor did not finish within 3 seconds")
        .unwrap();

    assert_eq!(reason, ExitReason::Interrupted);
    assert_eq!(reason.exit_code(), 0);
}
