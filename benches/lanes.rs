use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use swar_lanes::{ByteRange, count_byte, positions_in_range, to_ascii_uppercase};

const SIZES: [usize; 4] = [64, 1024, 16384, 262144];

fn sample(size: usize) -> Vec<u8> {
    b"Allo Zorld! I am NOT yelling, but I am using SWAR! "
        .iter()
        .copied()
        .cycle()
        .take(size)
        .collect()
}

fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_byte");

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let data = sample(size);

        group.bench_with_input(BenchmarkId::new("swar", size), &data, |b, data| {
            b.iter(|| count_byte(black_box(data), black_box(b' ')));
        });
        group.bench_with_input(BenchmarkId::new("scalar", size), &data, |b, data| {
            b.iter(|| black_box(data).iter().filter(|&&x| x == b' ').count());
        });
    }
    group.finish();
}

fn bench_uppercase(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_ascii_uppercase");

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let data = sample(size);

        group.bench_with_input(BenchmarkId::new("swar", size), &data, |b, data| {
            b.iter(|| to_ascii_uppercase(black_box(data)));
        });
        group.bench_with_input(BenchmarkId::new("std", size), &data, |b, data| {
            b.iter(|| black_box(data).to_ascii_uppercase());
        });
    }
    group.finish();
}

fn bench_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("positions_in_range");
    let capitals = ByteRange { lo: b'A', hi: b'Z' };

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let data = sample(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| positions_in_range(black_box(data), capitals));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_count, bench_uppercase, bench_positions);
criterion_main!(benches);
