//! Criterion benchmarks for rust_leveled_logger

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_leveled_logger::core::render_message;
use rust_leveled_logger::prelude::*;
use std::io;
use std::sync::Arc;

fn stream_logger(level: Level) -> Logger {
    Logger::builder("bench")
        .level(level)
        .sink(StreamSink::new(io::sink()))
        .build()
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("with_shared_sink", |b| {
        let sink: SharedSink = Arc::new(StreamSink::new(io::sink()));
        b.iter(|| {
            let logger = Logger::with_sink(black_box("bench"), Arc::clone(&sink));
            black_box(logger)
        });
    });

    group.bench_function("builder", |b| {
        b.iter(|| {
            let logger = stream_logger(black_box(Level::Debug));
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Stream Logging Benchmarks
// ============================================================================

fn bench_stream_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_logging");
    group.throughput(Throughput::Elements(1));

    let logger = stream_logger(Level::Debug);

    group.bench_function("info_literal", |b| {
        b.iter(|| {
            logger.info(format_args!("Info message"));
        });
    });

    group.bench_function("info_formatted", |b| {
        b.iter(|| {
            logger.info(format_args!("request {} took {}ms", black_box(42), black_box(7)));
        });
    });

    group.bench_function("console_error", |b| {
        let console = Logger::builder("bench")
            .sink(ConsoleSink::new(io::sink()))
            .build();
        b.iter(|| {
            console.error(format_args!("Error message"));
        });
    });

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = stream_logger(Level::Error);

    group.bench_function("suppressed_debug", |b| {
        b.iter(|| {
            logger.debug(format_args!("never rendered {}", black_box(1)));
        });
    });

    group.bench_function("is_enabled", |b| {
        b.iter(|| black_box(logger.is_enabled(black_box(Level::Info))));
    });

    group.finish();
}

// ============================================================================
// Message Rendering Benchmarks
// ============================================================================

fn bench_render_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_message");

    group.bench_function("without_newline", |b| {
        b.iter(|| black_box(render_message(format_args!("value {}", black_box(3.5)))));
    });

    group.bench_function("with_newline", |b| {
        b.iter(|| black_box(render_message(format_args!("value {}\n", black_box(3.5)))));
    });

    group.finish();
}

// ============================================================================
// Fan-out Benchmarks
// ============================================================================

fn bench_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("fanout");
    group.throughput(Throughput::Elements(1));

    for children in [1usize, 2, 4, 8] {
        let fanout = FanoutSink::new(
            (0..children).map(|_| Arc::new(StreamSink::new(io::sink())) as SharedSink),
        );
        let logger = Logger::builder("bench").sink(fanout).build();

        group.bench_with_input(BenchmarkId::new("children", children), &children, |b, _| {
            b.iter(|| {
                logger.info(format_args!("Fan-out message"));
            });
        });
    }

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let logger = Arc::new(stream_logger(Level::Info));

    group.bench_function("multi_thread_4", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        logger.info(format_args!("Concurrent message"));
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
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_logger_creation,
    bench_stream_logging,
    bench_level_filtering,
    bench_render_message,
    bench_fanout,
    bench_concurrent_logging
);

criterion_main!(benches);
