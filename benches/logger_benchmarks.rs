//! Criterion benchmarks for leveled_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use leveled_logger::prelude::*;
use std::sync::Arc;
use tempfile::TempDir;

fn sink_logger(level: LogLevel) -> Logger {
    Logger::builder()
        .min_level(level)
        .console(ConsoleAppender::with_writer(std::io::sink()))
        .build()
        .unwrap()
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("console_only", |b| {
        b.iter(|| {
            let logger = sink_logger(LogLevel::Info);
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_console_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("console_logging");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(LogLevel::Debug);

    group.bench_function("debug", |b| {
        b.iter(|| {
            logger.debug(black_box("Debug message"));
        });
    });

    group.bench_function("info", |b| {
        b.iter(|| {
            logger.info(black_box("Info message"));
        });
    });

    group.bench_function("formatted_macro", |b| {
        b.iter(|| {
            leveled_logger::info!(logger, "request {} took {}ms", black_box(42), black_box(7));
        });
    });

    group.bench_function("space_joined_macro", |b| {
        b.iter(|| {
            leveled_logger::info!(logger; "request", black_box(42), "took", black_box(7));
        });
    });

    group.finish();
}

fn bench_file_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_logging");
    group.throughput(Throughput::Elements(1));

    let temp_dir = TempDir::new().unwrap();
    let logger = sink_logger(LogLevel::Debug);
    logger
        .initialize(LogLevel::Debug, true, temp_dir.path().join("bench.log"))
        .unwrap();

    group.bench_function("info", |b| {
        b.iter(|| {
            logger.info(black_box("File message"));
        });
    });

    group.bench_function("rotate", |b| {
        b.iter(|| {
            let archive = logger.rotate().unwrap();
            black_box(archive)
        });
    });

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let logger = Arc::new(sink_logger(LogLevel::Info));

    group.bench_function("multi_thread_4", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        logger.info(black_box("Concurrent message"));
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Log Entry Creation Benchmarks
// ============================================================================

fn bench_log_entry_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("log_entry_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new", |b| {
        b.iter(|| {
            let entry = LogEntry::new(black_box(LogLevel::Info), black_box("Test message"));
            black_box(entry)
        });
    });

    group.bench_function("with_call_site", |b| {
        b.iter(|| {
            let entry = LogEntry::new(black_box(LogLevel::Info), black_box("Test message"))
                .with_call_site(Some(CallSite::new(black_box("src/main.rs"), black_box(42))));
            black_box(entry.body())
        });
    });

    group.bench_function("sanitize_multiline", |b| {
        b.iter(|| {
            let entry = LogEntry::new(
                black_box(LogLevel::Warn),
                black_box("first line\nsecond line\r\n\tindented"),
            );
            black_box(entry)
        });
    });

    group.finish();
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(LogLevel::Warn);

    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            logger.debug(black_box("This should be filtered"));
        });
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| {
            logger.error(black_box("This should be logged"));
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_logger_creation,
    bench_console_logging,
    bench_file_logging,
    bench_concurrent_logging,
    bench_log_entry_creation,
    bench_level_filtering
);

criterion_main!(benches);
