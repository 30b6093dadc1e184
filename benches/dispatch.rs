use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tempfile::TempDir;
use tierlog::{Console, EventKind, LogRecord, Logger, TerminalConsole, Threshold};

struct NullConsole;

impl Console for NullConsole {
    fn print(&self, record: &LogRecord<'_>) {
        black_box(record);
    }
}

fn bench_filtered(c: &mut Criterion) {
    let logger = Logger::builder("BENCH")
        .console(NullConsole)
        .threshold(Threshold::Low)
        .build();

    c.bench_function("Logger::information (filtered)", |b| {
        b.iter(|| logger.information(black_box("dropped before formatting")));
    });
}

fn bench_console(c: &mut Criterion) {
    let logger = Logger::builder("BENCH").console(NullConsole).build();

    c.bench_function("Logger::warning (console)", |b| {
        b.iter(|| logger.warning(black_box("benchmark log message")));
    });
}

fn bench_terminal_format(c: &mut Criterion) {
    let console = TerminalConsole::new();
    let record = LogRecord {
        identity: "BENCH",
        kind: EventKind::Error,
        timestamp: "2026-10-18--14-03-59",
        header: "[ERROR]:",
        message: "benchmark log message",
    };

    c.bench_function("TerminalConsole::format_record", |b| {
        b.iter(|| console.format_record(black_box(&record)));
    });
}

fn bench_file_sink(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let logger = Logger::builder("BENCH")
        .console(NullConsole)
        .file_sink(true)
        .file_path(tmp.path().to_string_lossy().into_owned())
        .build();

    c.bench_function("Logger::error (console + file)", |b| {
        b.iter(|| logger.error(black_box("benchmark log message")));
    });
}

criterion_group!(
    benches,
    bench_filtered,
    bench_console,
    bench_terminal_format,
    bench_file_sink
);
criterion_main!(benches);
