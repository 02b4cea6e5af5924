use super::utils::{Decision, Decisions};
use criterion::Bencher;
use ordered_queue::{Comparator, OrderedQueue};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

pub fn push_random<C: Comparator<i64> + Default>(b: &mut Bencher, n: usize) {
    let keys = Decisions::keys(n, i64::MAX, StdRng::seed_from_u64(42));
    b.iter_batched(
        || keys.clone(),
        |keys| {
            let mut q = OrderedQueue::<i64, C>::with_capacity_and_comparator(n, C::default());
            for k in keys {
                q.push(k);
            }
            q
        },
        criterion::BatchSize::SmallInput,
    );
}

pub fn push_ties<C: Comparator<i64> + Default>(b: &mut Bencher, n: usize) {
    b.iter(|| {
        let mut q = OrderedQueue::<i64, C>::default();
        for _ in 0..n {
            q.push(black_box(0));
        }
        q
    });
}

pub fn poll_all<C: Comparator<i64> + Default>(b: &mut Bencher, n: usize) {
    let keys = Decisions::keys(n, i64::MAX, StdRng::seed_from_u64(42));
    b.iter_batched(
        || {
            let mut q = OrderedQueue::<i64, C>::default();
            for &k in keys.iter() {
                q.push(k);
            }
            q
        },
        |mut q| {
            while let Ok(v) = q.poll() {
                black_box(v);
            }
        },
        criterion::BatchSize::SmallInput,
    );
}

pub fn mixed<C: Comparator<i64> + Default>(b: &mut Bencher, n: usize) {
    let decisions = Decisions::new(n, 0.6, 1000, StdRng::seed_from_u64(42));
    b.iter(|| {
        let mut q = OrderedQueue::<i64, C>::default();
        for &d in decisions.0.iter() {
            match d {
                Decision::Push(k) => q.push(k),
                Decision::Poll => {
                    let _ = black_box(q.poll());
                }
            }
        }
        q
    });
}
