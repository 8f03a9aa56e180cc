//! Arity Benchmarks
//!
//! Compares MaryHeap at several branching factors against the standard
//! library's `BinaryHeap` on the same inputs.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_perf
//!
//! # Only the event-queue workload
//! cargo bench --bench heap_perf -- 'event_queue/'
//! ```
//!
//! ## Workloads
//!
//! - `push_pop`: push n random keys, then pop them all
//! - `hold`: keep n keys in the heap and repeatedly pop one and push a later
//!   one, the access pattern of a discrete-event scheduler
//! - `event_queue`: the same hold pattern over `Event` records

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mary_heap::event::{Event, EventQueue, Signal, WireId};
use mary_heap::{Less, MaryHeap};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hint::black_box;

const ARITIES: [usize; 4] = [2, 4, 8, 16];
const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Linear congruential generator for reproducible random numbers
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state >> 16
    }
}

fn random_keys(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next()).collect()
}

fn push_pop_mary(arity: usize, keys: &[u64]) -> u64 {
    let mut heap = MaryHeap::with_capacity(arity, keys.len(), Less).unwrap();
    for &key in keys {
        heap.push(key);
    }
    let mut sum = 0u64;
    while let Ok(key) = heap.pop() {
        sum = sum.wrapping_add(key);
    }
    sum
}

fn push_pop_std(keys: &[u64]) -> u64 {
    let mut heap = BinaryHeap::with_capacity(keys.len());
    for &key in keys {
        heap.push(Reverse(key));
    }
    let mut sum = 0u64;
    while let Some(Reverse(key)) = heap.pop() {
        sum = sum.wrapping_add(key);
    }
    sum
}

fn hold_mary(arity: usize, keys: &[u64], rounds: usize) -> u64 {
    let mut heap = MaryHeap::from_vec(arity, keys.to_vec(), Less).unwrap();
    let mut rng = Lcg::new(7);
    for _ in 0..rounds {
        if let Ok(now) = heap.pop() {
            heap.push(now + rng.next() % 1_000);
        }
    }
    heap.peek().copied().unwrap_or_default()
}

fn hold_std(keys: &[u64], rounds: usize) -> u64 {
    let mut heap: BinaryHeap<Reverse<u64>> = keys.iter().copied().map(Reverse).collect();
    let mut rng = Lcg::new(7);
    for _ in 0..rounds {
        if let Some(Reverse(now)) = heap.pop() {
            heap.push(Reverse(now + rng.next() % 1_000));
        }
    }
    heap.peek().map(|r| r.0).unwrap_or_default()
}

fn hold_events(arity: usize, keys: &[u64], rounds: usize) -> u64 {
    let mut queue = EventQueue::with_arity(arity).unwrap();
    for (i, &time) in keys.iter().enumerate() {
        queue.push(Event::new(time % 1_000_000, WireId(i), Signal::High));
    }
    let mut rng = Lcg::new(11);
    for _ in 0..rounds {
        if let Ok(event) = queue.pop() {
            let state = if event.state == Signal::High {
                Signal::Low
            } else {
                Signal::High
            };
            queue.push(Event::new(event.time + 1 + rng.next() % 100, event.wire, state));
        }
    }
    queue.next_time().unwrap_or_default()
}

fn benchmark_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    for n in SIZES {
        let keys = random_keys(n, 42);
        for arity in ARITIES {
            group.bench_with_input(
                BenchmarkId::new(format!("mary_{}", arity), n),
                &keys,
                |b, keys| b.iter(|| black_box(push_pop_mary(arity, keys))),
            );
        }
        group.bench_with_input(BenchmarkId::new("std_binary", n), &keys, |b, keys| {
            b.iter(|| black_box(push_pop_std(keys)))
        });
    }

    group.finish();
}

fn benchmark_hold(c: &mut Criterion) {
    let mut group = c.benchmark_group("hold");
    let rounds = 10_000;

    for n in SIZES {
        let keys = random_keys(n, 1234);
        for arity in ARITIES {
            group.bench_with_input(
                BenchmarkId::new(format!("mary_{}", arity), n),
                &keys,
                |b, keys| b.iter(|| black_box(hold_mary(arity, keys, rounds))),
            );
        }
        group.bench_with_input(BenchmarkId::new("std_binary", n), &keys, |b, keys| {
            b.iter(|| black_box(hold_std(keys, rounds)))
        });
    }

    group.finish();
}

fn benchmark_event_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_queue");
    let rounds = 10_000;
    let keys = random_keys(10_000, 99);

    for arity in ARITIES {
        group.bench_with_input(BenchmarkId::new("hold", arity), &keys, |b, keys| {
            b.iter(|| black_box(hold_events(arity, keys, rounds)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_push_pop,
    benchmark_hold,
    benchmark_event_queue,
);

criterion_main!(benches);
