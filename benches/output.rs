use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use taglog::{ColorMode, Context, FixedClock, Logger, Sink};
use tempfile::TempDir;

fn bench_emit_discard(c: &mut Criterion) {
    let mut group = c.benchmark_group("Record::msg");
    let context = Context::builder()
        .clock(FixedClock::parse("2020-02-02T02:02:02Z").expect("valid instant"))
        .colors(ColorMode::Never)
        .sink(Sink::writer(std::io::sink()))
        .build();
    let logger = Logger::builder(context.clone()).tag("service", "bench").build();

    group.bench_function("json", |b| {
        b.iter(|| logger.log().int("n", black_box(7)).msg("tick"));
    });

    context.set_pretty(true);
    group.bench_function("pretty", |b| {
        b.iter(|| logger.log().int("n", black_box(7)).msg("tick"));
    });

    group.bench_function("debug_suppressed", |b| {
        b.iter(|| logger.debug().int("n", black_box(7)).msg("tick"));
    });

    group.finish();
}

fn bench_emit_file(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let sink = Sink::file(tmp.path().join("bench.log")).expect("failed to open file");
    let context = Context::builder().sink(sink).build();
    let logger = Logger::new(context);

    c.bench_function("Record::msg file", |b| {
        b.iter(|| logger.log().str("k", black_box("v")).msg("tick"));
    });
}

criterion_group!(benches, bench_emit_discard, bench_emit_file);
criterion_main!(benches);
