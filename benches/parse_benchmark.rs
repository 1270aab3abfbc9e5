//! Benchmarks for unchat parsing performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks parse synthetic chat screenshots of increasing length.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use unchat::{ChatParseConfig, ChatParser, ChatScreenshot, Fragment, Rect};

const WIDTH: f64 = 1080.0;

/// Creates a synthetic conversation with the given number of bubbles.
///
/// Bubbles alternate sides, every third one spans two lines and a centered
/// timestamp precedes every tenth.
fn create_screenshot(bubble_count: usize) -> ChatScreenshot {
    let mut blocks = Vec::new();
    let mut y = 100.0;

    for i in 0..bubble_count {
        if i % 10 == 0 {
            blocks.push(Fragment::new(
                format!("{}:{:02}", 9 + i / 60, i % 60),
                Rect::new(490.0, y, 100.0, 30.0),
            ));
            y += 80.0;
        }

        let (x, width) = if i % 2 == 0 {
            (60.0, 420.0)
        } else {
            (600.0, 420.0)
        };

        // Two words per line, separated by a small gap.
        blocks.push(Fragment::new("message", Rect::new(x, y, 200.0, 40.0)));
        blocks.push(Fragment::new(
            format!("#{}", i),
            Rect::new(x + 210.0, y, width - 210.0, 40.0),
        ));
        y += 50.0;

        if i % 3 == 0 {
            blocks.push(Fragment::new("continued", Rect::new(x, y, width, 40.0)));
            y += 50.0;
        }

        y += 40.0;
    }

    ChatScreenshot {
        image_width: WIDTH,
        image_height: y + 100.0,
        blocks,
    }
}

/// Benchmark a single screenshot at various sizes.
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    let parser = ChatParser::new();

    for bubble_count in [10, 50, 200].iter() {
        let shot = create_screenshot(*bubble_count);

        group.bench_function(format!("{}_bubbles", bubble_count), |b| {
            b.iter(|| parser.parse_screenshot(black_box(&shot)));
        });
    }

    group.finish();
}

/// Benchmark parallel against sequential batch parsing.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let shots: Vec<ChatScreenshot> = (0..32).map(|i| create_screenshot(20 + i)).collect();

    group.bench_function("parallel", |b| {
        let parser = ChatParser::new();
        b.iter(|| parser.parse_batch(black_box(&shots)));
    });

    group.bench_function("sequential", |b| {
        let parser = ChatParser::new().sequential();
        b.iter(|| parser.parse_batch(black_box(&shots)));
    });

    group.finish();
}

/// Benchmark decoding screenshot JSON.
fn bench_json_input(c: &mut Criterion) {
    let json = serde_json::to_string(&create_screenshot(50)).unwrap_or_default();

    c.bench_function("parse_json_50_bubbles", |b| {
        b.iter(|| unchat::parse_json(black_box(&json)));
    });
}

/// Benchmark builder pattern overhead.
fn bench_builder_creation(c: &mut Criterion) {
    c.bench_function("builder_creation", |b| {
        b.iter(|| {
            let config = ChatParseConfig::new()
                .with_line_gap(24.0)
                .with_message_gap(30.0)
                .with_cluster_iterations(12);
            ChatParser::with_config(config).sequential()
        });
    });
}

criterion_group!(
    benches,
    bench_parsing,
    bench_batch,
    bench_json_input,
    bench_builder_creation,
);
criterion_main!(benches);
