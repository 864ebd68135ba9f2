use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use rg16_rs::{FileHeader, MemorySource, ReadOptions, TraceHeader, UtcTime, read_rg16};

const RATE: f64 = 500.0;
const NPTS: usize = 500;

/// Generate smooth geophone-like samples.
fn seismic_samples(n: usize, phase: usize) -> Vec<f32> {
    (0..n)
        .map(|i| {
            let x = (phase + i) as f32;
            (x * 0.05).sin() * 50.0 + (x * 1.7).sin() * 10.0
        })
        .collect()
}

/// A 3C node file of `segments` contiguous one-second traces per channel.
fn make_source(segments: usize) -> MemorySource {
    let mut source = MemorySource::new(FileHeader::rg16(1));
    for segment in 0..segments {
        let start = UtcTime::from_nanos(segment as i64 * 1_000_000_000);
        for component in 2..=4u8 {
            source.push(
                TraceHeader::new()
                    .with_receiver(1, 1, 0)
                    .with_channel(component - 1, component)
                    .with_start_time(start)
                    .with_sampling_rate(RATE),
                seismic_samples(NPTS, segment * NPTS),
            );
        }
    }
    source
}

fn bench_read(c: &mut Criterion) {
    let source = make_source(1000);
    let total = (3 * 1000 * NPTS) as u64;

    let mut group = c.benchmark_group("read");
    group.throughput(Throughput::Elements(total));

    let plain = ReadOptions::new();
    let merged = ReadOptions::new().with_merge(true);
    let oriented = ReadOptions::new()
        .with_merge(true)
        .with_standard_orientation(true);

    group.bench_function("3000tr/plain", |b| {
        b.iter(|| read_rg16(&mut source.clone(), black_box(&plain)).unwrap())
    });
    group.bench_function("3000tr/merge", |b| {
        b.iter(|| read_rg16(&mut source.clone(), black_box(&merged)).unwrap())
    });
    group.bench_function("3000tr/merge+orient", |b| {
        b.iter(|| read_rg16(&mut source.clone(), black_box(&oriented)).unwrap())
    });

    group.finish();
}

fn bench_window(c: &mut Criterion) {
    let source = make_source(1000);

    // One minute out of ~17 minutes of data
    let opts = ReadOptions::new().with_window(
        UtcTime::from_nanos(500 * 1_000_000_000),
        UtcTime::from_nanos(560 * 1_000_000_000),
    );

    c.bench_function("read/3000tr/window_60s", |b| {
        b.iter(|| {
            let stream = read_rg16(&mut source.clone(), black_box(&opts)).unwrap();
            assert_eq!(stream.len(), 3 * 61);
        })
    });
}

criterion_group!(benches, bench_read, bench_window);
criterion_main!(benches);
