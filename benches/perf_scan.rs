//! Benchmark: monotonic-stack scans over random and adversarial inputs.
//!
//! Run with:
//! `cargo bench --bench perf_scan`
//!
//! Strictly increasing input is the worst case for stack depth; random
//! input exercises the pop path.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use monostack::{
    problems::{histogram::LargestRectangle, next_greater::NextGreater},
    StackEngine,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_heights(rng: &mut StdRng, len: usize) -> Vec<u32> {
    (0..len).map(|_| rng.gen_range(0..1_000)).collect()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(p) => p.memory() / 1024,
        None => 0,
    }
}

fn bench_next_greater(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_greater");
    let engine = StackEngine::new(NextGreater::<u32>::new());
    for &len in &[1_000usize, 100_000, 1_000_000] {
        group.bench_function(format!("random_len_{len}"), |b| {
            b.iter_batched(
                || random_heights(&mut StdRng::seed_from_u64(42), len),
                |heights| black_box(engine.run(&heights)),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("largest_rectangle");
    let engine = StackEngine::new(LargestRectangle::<u32>::new());
    for &len in &[1_000usize, 100_000, 1_000_000] {
        group.bench_function(format!("random_len_{len}"), |b| {
            b.iter_batched(
                || random_heights(&mut StdRng::seed_from_u64(7), len),
                |heights| black_box(engine.run(&heights)),
                BatchSize::LargeInput,
            )
        });
        group.bench_function(format!("rising_len_{len}"), |b| {
            b.iter_batched(
                || (0..len as u32).collect::<Vec<_>>(),
                |heights| {
                    let before = rss_kib();
                    let area = engine.run(&heights);
                    let after = rss_kib();
                    black_box(area);
                    // record memory delta to stderr to avoid criterion noise
                    eprintln!(
                        "RSS KiB delta (rising {len}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_next_greater, bench_histogram);
criterion_main!(benches);
