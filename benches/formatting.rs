use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use taglog::fmt::{Entry, Format, Palette};
use taglog::{Tag, Value};

fn make_tags() -> Vec<Tag> {
    vec![
        Tag::new("service", "hello-service"),
        Tag::new("items", 12),
        Tag::new("ratio", 0.25),
        Tag::new("error", Value::Error("connection \"reset\" by peer".to_string())),
    ]
}

fn bench_json_format(c: &mut Criterion) {
    let tags = make_tags();
    let entry = Entry {
        time: "2020-02-02T02:02:02Z",
        tags: &tags,
        message: "request finished",
        caller: None,
    };

    c.bench_function("json::format", |b| {
        b.iter(|| black_box(&entry).render(Format::Json, None));
    });
}

fn bench_pretty_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("pretty::format");
    let tags = make_tags();
    let entry = Entry {
        time: "2020-02-02T02:02:02Z",
        tags: &tags,
        message: "request finished",
        caller: Some("src/main.rs:42"),
    };
    let palette = Palette::default();

    group.bench_function("plain", |b| {
        b.iter(|| black_box(&entry).render(Format::Pretty, None));
    });
    group.bench_function("colored", |b| {
        b.iter(|| black_box(&entry).render(Format::Pretty, Some(&palette)));
    });

    group.finish();
}

criterion_group!(benches, bench_json_format, bench_pretty_format);
criterion_main!(benches);
