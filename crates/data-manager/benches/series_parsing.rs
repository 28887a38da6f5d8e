//! Benchmarks for embedded series decoding

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use linkstats_data::{RecordParser, SeriesLoader, StaticSource};

fn generate_time_series(rows: usize) -> String {
    let records: Vec<String> = (0..rows)
        .map(|i| {
            format!(
                r#"{{"Time":"2024-03-01T{:02}:{:02}:00Z","Count":{}}}"#,
                (i / 60) % 24,
                i % 60,
                i % 97
            )
        })
        .collect();
    format!("[{}]", records.join(","))
}

fn bench_parse_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_records");

    for rows in [24, 720, 10_000] {
        let text = generate_time_series(rows);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("{rows}_records"), |b| {
            b.iter(|| {
                let result = RecordParser::parse_records("visitOverTime", black_box(&text));
                black_box(result);
            });
        });
    }

    group.finish();
}

fn bench_load_points(c: &mut Criterion) {
    let source = StaticSource::new().with("visitOverTime", &generate_time_series(720));
    let loader = SeriesLoader::new(source);

    c.bench_function("load_time_series_points_720", |b| {
        b.iter(|| {
            let points = loader.load_time_series_points(black_box("visitOverTime"));
            black_box(points);
        });
    });
}

criterion_group!(benches, bench_parse_records, bench_load_points);
criterion_main!(benches);
