mod utils;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use int_heap::{HeapOrder, IntHeap};
use utils::get_random_values;

pub fn construction_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_heap");
    for size in [1_000, 100_000].iter() {
        let values = get_random_values(*size, 342);
        group.bench_with_input(BenchmarkId::new("bulk", size), &values, |b, v| {
            b.iter(|| IntHeap::new(HeapOrder::Min, v.iter().copied()));
        });
        group.bench_with_input(BenchmarkId::new("sequential", size), &values, |b, v| {
            b.iter(|| {
                let mut heap = IntHeap::from(HeapOrder::Min);
                for &x in v {
                    heap.insert(black_box(x));
                }
                heap
            });
        });
    }

    group.finish();
}

criterion_group!(benches, construction_benchmark);
criterion_main!(benches);
