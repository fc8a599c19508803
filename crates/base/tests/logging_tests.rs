use base::logging::{FileLogger, StdoutLogger, format_record, init_file_logger, init_stdout_logger};
use log::Log;
use std::fs;

fn record_args<'a>() -> log::RecordBuilder<'a> {
    let mut builder = log::RecordBuilder::new();
    builder
        .level(log::Level::Warn)
        .target("test")
        .file(Some("pipeline.rs"))
        .line(Some(42));
    builder
}

#[test]
fn test_format_record_layout() {
    let line = format_record(&record_args().args(format_args!("width 600")).build());
    assert!(line.contains("[WARN]"));
    assert!(line.contains("[thread:"));
    assert!(line.contains("pipeline.rs:42 - width 600"));
}

#[test]
fn test_stdout_logger_implements_log_trait() {
    let logger = StdoutLogger;
    let metadata = log::MetadataBuilder::new()
        .level(log::Level::Info)
        .target("test")
        .build();
    assert!(logger.enabled(&metadata));

    logger.log(&record_args().args(format_args!("stdout message")).build());
    logger.flush();
}

#[test]
fn test_file_logger_creates_directory() {
    let test_dir =
        std::env::temp_dir().join(format!("overlay-log-test-{}-dir", std::process::id()));
    let _ = fs::remove_dir_all(&test_dir);

    let _logger = FileLogger::new(&test_dir).expect("Failed to create FileLogger");
    assert!(test_dir.is_dir());

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn test_file_logger_writes_to_file() {
    let test_dir =
        std::env::temp_dir().join(format!("overlay-log-test-{}-write", std::process::id()));
    let _ = fs::remove_dir_all(&test_dir);

    let logger = FileLogger::new(&test_dir).expect("Failed to create FileLogger");
    logger.log(&record_args().args(format_args!("file message")).build());
    logger.flush();

    let path = test_dir.join(format!("{}.log", base::format_today()));
    let content = fs::read_to_string(&path).expect("Failed to read log file");
    assert!(content.contains("[WARN]"));
    assert!(content.contains("file message"));
    assert!(content.ends_with('\n'));

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn test_file_logger_rejects_file_as_directory() {
    let path =
        std::env::temp_dir().join(format!("overlay-log-test-{}-notadir", std::process::id()));
    fs::write(&path, b"occupied").unwrap();

    assert!(FileLogger::new(&path).is_err());

    fs::remove_file(&path).ok();
}

#[test]
fn test_init_loggers_are_idempotent() {
    init_stdout_logger();
    init_stdout_logger();

    let test_dir =
        std::env::temp_dir().join(format!("overlay-log-test-{}-init", std::process::id()));
    // a logger is already installed; this must still succeed
    init_file_logger(&test_dir).expect("init_file_logger failed");
    log::info!("after init");

    fs::remove_dir_all(&test_dir).ok();
}
