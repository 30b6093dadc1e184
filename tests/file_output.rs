//! Tests for the file sink and its fail-safe recovery.

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tierlog::{Appender, Console, Error, EventKind, LogRecord, Logger};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<(EventKind, String)>>>);

impl Console for Capture {
    fn print(&self, record: &LogRecord<'_>) {
        self.0
            .lock()
            .unwrap()
            .push((record.kind, record.plain_line()));
    }
}

impl Capture {
    fn lines(&self) -> Vec<(EventKind, String)> {
        self.0.lock().unwrap().clone()
    }

    fn fatals(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(k, _)| *k == EventKind::Fatal)
            .map(|(_, l)| l)
            .collect()
    }
}

struct FailingAppender;

impl Appender for FailingAppender {
    fn append(&self, _path: &Path, _line: &str) -> Result<(), Error> {
        Err(std::io::Error::other("disk full").into())
    }
}

fn file_logger(capture: &Capture, dir: &Path) -> Logger {
    Logger::builder("FileLogger")
        .console(capture.clone())
        .debug_mode(|| false)
        .file_sink(true)
        .file_path(dir.to_string_lossy().into_owned())
        .build()
}

#[test]
fn file_sink_appends_plain_line() {
    let tmp = TempDir::new().unwrap();
    let capture = Capture::default();
    let log = file_logger(&capture, tmp.path());

    log.error("boom");

    let content = fs::read_to_string(log.log_file()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("(FileLogger) "));
    assert!(lines[0].ends_with(" ~ [ERROR]: boom"));
    assert_eq!(lines[0], capture.lines()[0].1);
}

#[test]
fn file_is_named_after_session_stamp() {
    let tmp = TempDir::new().unwrap();
    let capture = Capture::default();
    let log = file_logger(&capture, tmp.path());

    let expected = format!("{}.log", log.session_stamp().replace('-', "_"));
    assert_eq!(log.log_file(), tmp.path().join(expected));
    assert!(
        chrono::NaiveDateTime::parse_from_str(log.session_stamp(), tierlog::fmt::TIMESTAMP_FORMAT)
            .is_ok()
    );
}

#[test]
fn one_file_across_toggles() {
    let tmp = TempDir::new().unwrap();
    let capture = Capture::default();
    let mut log = file_logger(&capture, tmp.path());

    log.information("a");
    log.set_file_sink_enabled(false);
    log.information("b");
    log.set_file_sink_enabled(true);
    log.information("c");

    let entries = fs::read_dir(tmp.path()).unwrap().count();
    assert_eq!(entries, 1);

    let content = fs::read_to_string(log.log_file()).unwrap();
    let messages: Vec<&str> = content
        .lines()
        .map(|l| l.rsplit(' ').next().unwrap())
        .collect();
    assert_eq!(messages, vec!["a", "c"]);
}

#[test]
fn toggling_does_not_touch_the_file() {
    let tmp = TempDir::new().unwrap();
    let capture = Capture::default();
    let mut log = file_logger(&capture, tmp.path());

    log.set_file_sink_enabled(false);
    log.set_file_sink_enabled(true);

    assert!(!log.log_file().exists());
}

#[test]
fn missing_directory_reports_once_and_keeps_toggle() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing");
    let capture = Capture::default();
    let log = file_logger(&capture, &missing);

    assert!(log.file_sink_enabled());
    log.warning("dropped from file");
    assert!(log.file_sink_enabled());

    let lines = capture.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].0, EventKind::Warning);
    let fatals = capture.fatals();
    assert_eq!(fatals.len(), 1);
    assert!(fatals[0].contains("File path for logger is not valid"));

    assert!(!missing.exists());
}

#[test]
fn missing_directory_is_retried_on_next_call() {
    let tmp = TempDir::new().unwrap();
    let later = tmp.path().join("later");
    let capture = Capture::default();
    let log = file_logger(&capture, &later);

    log.information("first");
    assert_eq!(capture.fatals().len(), 1);

    fs::create_dir(&later).unwrap();
    log.information("second");

    assert_eq!(capture.fatals().len(), 1);
    let content = fs::read_to_string(log.log_file()).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.trim_end().ends_with("[INFORMATION]: second"));
}

#[test]
fn write_error_reports_message_and_keeps_toggle() {
    let tmp = TempDir::new().unwrap();
    let capture = Capture::default();
    let log = Logger::builder("Failing")
        .console(capture.clone())
        .debug_mode(|| false)
        .file_sink(true)
        .file_path(tmp.path().to_string_lossy().into_owned())
        .appender(FailingAppender)
        .build();

    log.success("never written");
    log.success("still never written");

    assert!(log.file_sink_enabled());
    let fatals = capture.fatals();
    assert_eq!(fatals.len(), 2);
    assert!(fatals.iter().all(|l| l.contains("disk full")));
    assert_eq!(capture.lines().len(), 4);
}

#[test]
fn unwritable_log_file_is_reported() {
    let tmp = TempDir::new().unwrap();
    let capture = Capture::default();
    let log = file_logger(&capture, tmp.path());

    // A directory where the log file should be makes the append fail
    fs::create_dir(log.log_file()).unwrap();
    log.error("blocked");

    let fatals = capture.fatals();
    assert_eq!(fatals.len(), 1);
    assert!(fatals[0].contains("Failed to write log file"));
    assert!(log.file_sink_enabled());
}

#[test]
fn filtered_call_does_not_touch_file() {
    let tmp = TempDir::new().unwrap();
    let capture = Capture::default();
    let mut log = file_logger(&capture, tmp.path());
    log.set_threshold(tierlog::Threshold::Low);

    log.information("filtered");

    assert!(!log.log_file().exists());
    assert!(capture.lines().is_empty());
}

#[test]
fn set_file_path_redirects_later_writes() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let capture = Capture::default();
    let mut log = file_logger(&capture, first.path());

    log.information("one");
    log.set_file_path(second.path().to_string_lossy().into_owned());
    log.information("two");

    let name = log.log_file().file_name().unwrap().to_owned();
    let a = fs::read_to_string(first.path().join(&name)).unwrap();
    let b = fs::read_to_string(second.path().join(&name)).unwrap();
    assert!(a.trim_end().ends_with("one"));
    assert!(b.trim_end().ends_with("two"));
}

#[test]
fn header_text_in_message_is_written_verbatim() {
    let tmp = TempDir::new().unwrap();
    let capture = Capture::default();
    let log = file_logger(&capture, tmp.path());

    log.information("[ERROR]: inside body");

    let content = fs::read_to_string(log.log_file()).unwrap();
    assert!(content.trim_end().ends_with("~ [INFORMATION]: [ERROR]: inside body"));
}

#[test]
fn tilde_in_file_path_expands_to_home() {
    let home = directories::BaseDirs::new().unwrap().home_dir().to_path_buf();
    let capture = Capture::default();
    let mut log = file_logger(&capture, Path::new("/unused"));

    log.set_file_path("~/tierlog-logs");

    // The configured path keeps the tilde; only the resolved file is expanded
    assert_eq!(log.file_path(), "~/tierlog-logs");
    let file = log.log_file();
    assert!(file.starts_with(home.join("tierlog-logs")), "{}", file.display());
    assert!(!file.to_string_lossy().contains('~'));
    assert_eq!(
        file.file_name().unwrap().to_string_lossy(),
        format!("{}.log", log.session_stamp().replace('-', "_"))
    );
}
