use core::{hint::black_box, time::Duration};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use sleet::{
    BasicSnowflakeGenerator, LockSnowflakeGenerator, Poll, SnowflakeGenerator, SnowflakeId,
    SnowflakeLayout, SystemClock, ThreadRandom, TimeSource, ZeroRandom,
};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};

const EPOCH: u64 = 1_649_980_800_000;

struct FixedMockTime {
    millis: u64,
}

impl TimeSource<u64> for FixedMockTime {
    fn current_millis(&self) -> u64 {
        self.millis
    }
}

// Number of IDs generated per benchmark iteration (per-thread for
// multi-threaded). One full millisecond of sequence.
const TOTAL_IDS: usize = 4096;

fn layout() -> SnowflakeLayout {
    SnowflakeLayout::new(Duration::from_millis(EPOCH), 1, 1).unwrap()
}

fn mock_time() -> FixedMockTime {
    FixedMockTime { millis: EPOCH + 1 }
}

/// Benchmarks a hot-path generator where IDs are always `Ready`.
fn bench_generator<G>(c: &mut Criterion, group_name: &str, generator_factory: impl Fn() -> G)
where
    G: SnowflakeGenerator,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{}", TOTAL_IDS), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = generator_factory();
                for _ in 0..TOTAL_IDS {
                    match generator.poll_id().unwrap() {
                        Poll::Ready { id } => {
                            black_box(id);
                        }
                        Poll::Pending { .. } => unreachable!(),
                    }
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks generators that sleep on a stalled sequence (realistic wall
/// clock behavior).
fn bench_generator_sleep<G>(c: &mut Criterion, group_name: &str, generator_factory: impl Fn() -> G)
where
    G: SnowflakeGenerator,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{}", TOTAL_IDS), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = generator_factory();
                for _ in 0..TOTAL_IDS {
                    black_box(generator.next_id().unwrap());
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks a shared generator across threads, with no waiting (fixed
/// clock).
fn bench_generator_contended<G>(c: &mut Criterion, group_name: &str, generator_fn: impl Fn() -> G)
where
    G: SnowflakeGenerator + Send + Sync,
{
    let mut group = c.benchmark_group(group_name);

    for thread_count in [1, 2, 4, 8, 16] {
        let ids_per_thread = TOTAL_IDS / thread_count;

        group.throughput(Throughput::Elements(TOTAL_IDS as u64));
        group.bench_function(
            format!("elems/{}/threads/{}", TOTAL_IDS, thread_count),
            |b| {
                b.iter_custom(|iters| {
                    let start = Instant::now();

                    for _ in 0..iters {
                        let generator = Arc::new(generator_fn());
                        let barrier = Arc::new(Barrier::new(thread_count + 1));
                        scope(|s| {
                            for _ in 0..thread_count {
                                let generator = Arc::clone(&generator);
                                let barrier = Arc::clone(&barrier);
                                s.spawn(move || {
                                    barrier.wait();
                                    for _ in 0..ids_per_thread {
                                        match generator.poll_id().unwrap() {
                                            Poll::Ready { id } => {
                                                black_box(id);
                                            }
                                            Poll::Pending { .. } => unreachable!(),
                                        }
                                    }
                                });
                            }
                            barrier.wait();
                        });
                    }

                    start.elapsed()
                });
            },
        );
    }

    group.finish();
}

fn benchmark_mock_sequential_basic(c: &mut Criterion) {
    bench_generator(c, "mock/sequential/basic", || {
        BasicSnowflakeGenerator::new(layout(), mock_time(), ZeroRandom)
    });
}

fn benchmark_mock_sequential_lock(c: &mut Criterion) {
    bench_generator(c, "mock/sequential/lock", || {
        LockSnowflakeGenerator::new(layout(), mock_time(), ZeroRandom)
    });
}

fn benchmark_mock_contended_lock(c: &mut Criterion) {
    bench_generator_contended(c, "mock/contended/lock", || {
        LockSnowflakeGenerator::new(layout(), mock_time(), ZeroRandom)
    });
}

fn benchmark_system_sequential_basic(c: &mut Criterion) {
    bench_generator_sleep(c, "system/sequential/basic", || {
        BasicSnowflakeGenerator::new(layout(), SystemClock, ThreadRandom)
    });
}

fn benchmark_system_sequential_lock(c: &mut Criterion) {
    bench_generator_sleep(c, "system/sequential/lock", || {
        LockSnowflakeGenerator::new(layout(), SystemClock, ThreadRandom)
    });
}

fn benchmark_parse(c: &mut Criterion) {
    let layout = layout();
    let id = SnowflakeId::from(987_654_321, 17, 30, 4000);

    let mut group = c.benchmark_group("decode");
    group.bench_function("parse", |b| b.iter(|| layout.parse(black_box(id))));
    group.bench_function("short", |b| b.iter(|| layout.to_short_id(black_box(id))));
    group.finish();
}

#[cfg(feature = "async-tokio")]
mod tokio_benches {
    use super::*;
    use sleet::SnowflakeGeneratorAsyncTokioExt;
    use tokio::runtime::Builder;

    /// Benchmarks one shared generator across Tokio tasks.
    pub fn benchmark_system_tokio_lock(c: &mut Criterion) {
        let mut group = c.benchmark_group("system/async/tokio/lock");

        for task_count in [1, 4, 16] {
            let ids_per_task = TOTAL_IDS / task_count;

            group.throughput(Throughput::Elements(TOTAL_IDS as u64));
            group.bench_function(format!("elems/{}/tasks/{}", TOTAL_IDS, task_count), |b| {
                let rt = Builder::new_multi_thread().enable_all().build().unwrap();

                b.to_async(&rt).iter_custom(|iters| async move {
                    let start = Instant::now();

                    for _ in 0..iters {
                        let generator = Arc::new(LockSnowflakeGenerator::with_layout(layout()));
                        let mut tasks = tokio::task::JoinSet::new();
                        for _ in 0..task_count {
                            let generator = Arc::clone(&generator);
                            tasks.spawn(async move {
                                for _ in 0..ids_per_task {
                                    black_box(generator.next_id_async().await.unwrap());
                                }
                            });
                        }
                        tasks.join_all().await;
                    }

                    start.elapsed()
                });
            });
        }

        group.finish();
    }
}

criterion_group!(
    benches,
    // Mock clock
    benchmark_mock_sequential_basic,
    benchmark_mock_sequential_lock,
    benchmark_mock_contended_lock,
    // System clock (sleeping)
    benchmark_system_sequential_basic,
    benchmark_system_sequential_lock,
    // Decoding
    benchmark_parse,
);

#[cfg(feature = "async-tokio")]
criterion_group!(async_benches, tokio_benches::benchmark_system_tokio_lock);

#[cfg(feature = "async-tokio")]
criterion_main!(benches, async_benches);
#[cfg(not(feature = "async-tokio"))]
criterion_main!(benches);
