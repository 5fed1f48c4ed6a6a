//! Append cost: growing through reallocations vs. preallocating.
//!
//! Run with: `cargo bench --bench append`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use view_buffer::View;

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    for size in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("growing", size), &size, |b, &size| {
            b.iter(|| {
                let mut view: View<u64> = View::new();
                for i in 0..size {
                    view = view.push(black_box(i as u64));
                }
                black_box(view);
            });
        });

        group.bench_with_input(BenchmarkId::new("preallocated", size), &size, |b, &size| {
            b.iter(|| {
                let mut view: View<u64> = View::with_capacity(size);
                for i in 0..size {
                    view = view.push(black_box(i as u64));
                }
                black_box(view);
            });
        });
    }

    group.finish();
}

fn bench_bulk_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_append");

    for size in [256usize, 4096] {
        let data: Vec<u64> = (0..size as u64).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let view: View<u64> = View::new();
                black_box(view.append(black_box(data)).into_view());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push, bench_bulk_append);
criterion_main!(benches);
