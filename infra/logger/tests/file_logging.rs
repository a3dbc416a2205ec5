use herald_logger::{LevelFilter, Logger};
use serial_test::serial;
use std::time::Duration;

#[test]
#[serial]
fn file_logging_creates_log_file() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let log_dir = tmp.path().join("logs");

    let logger = Logger::builder()
        .name("herald-file")
        .console(false)
        .path(&log_dir)
        .level(LevelFilter::INFO)
        .init()
        .expect("file logger should initialize");

    assert!(logger.guard().is_some());
    tracing::info!(channel = "email", "sender bound");
    std::thread::sleep(Duration::from_millis(50));
    drop(logger);

    let has_log = std::fs::read_dir(&log_dir)
        .expect("log dir should exist")
        .flatten()
        .any(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("log"));
    assert!(has_log, "at least one .log file should be created");
}
