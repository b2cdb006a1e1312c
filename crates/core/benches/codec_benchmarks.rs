use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use ean13_core::{checksum, Ean13, Prefix, Sequence};

/// Single-shot codec operations.
fn bench_codec_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let code = Ean13::encode(123_456_789, Ean13::PRIVATE).unwrap();
    let text = code.to_string();

    group.bench_function("checksum", |b| {
        b.iter(|| checksum(black_box(code.value())));
    });

    group.bench_function("encode", |b| {
        b.iter(|| Ean13::encode(black_box(123_456_789), black_box(Ean13::PRIVATE)));
    });

    group.bench_function("validate", |b| {
        b.iter(|| black_box(code).validate());
    });

    group.bench_function("parse", |b| {
        b.iter(|| Ean13::parse(black_box(&text)));
    });

    group.bench_function("decode", |b| {
        b.iter(|| Prefix::Private.decode(black_box(code)));
    });

    group.finish();
}

/// Batch generation throughput for increasing batch sizes.
fn bench_sequence_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence");

    for count in [100u64, 1_000, 10_000] {
        group.throughput(Throughput::Elements(count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                Sequence::new(0, count, Ean13::PRIVATE)
                    .filter(Result::is_ok)
                    .count()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codec_operations, bench_sequence_throughput);
criterion_main!(benches);
