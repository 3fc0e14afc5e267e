use std::{hint::black_box, time::Duration};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dirsizer_infra::memory::MemoryDir;
use dirsizer_ports::Context;
use dirsizer_usecase::DirSizer;

/// Three levels of eight directories with four files each.
fn bushy_tree() -> MemoryDir {
    fn level(name: String, depth: usize) -> MemoryDir {
        let mut dir = (0..4).fold(MemoryDir::new(name.clone()), |d, i| d.file(format!("f{i}"), 4096));
        if depth > 0 {
            for i in 0..8 {
                dir = dir.dir(level(format!("{name}-{i}"), depth - 1));
            }
        }
        dir
    }
    level("root".to_string(), 2).latency(Duration::from_micros(50))
}

fn benchmark_worker_scaling(c: &mut Criterion) {
    let tree = bushy_tree();
    let ctx = Context::background();
    let mut group = c.benchmark_group("dir_sizer");
    group.sample_size(20);
    for workers in [1usize, 2, 4, 8, 16] {
        group.bench_with_input(BenchmarkId::new("workers", workers), &workers, |b, &workers| {
            let sizer = DirSizer::with_workers(workers);
            b.iter(|| black_box(sizer.size(&ctx, &tree).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_worker_scaling);
criterion_main!(benches);
