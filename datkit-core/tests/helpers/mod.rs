// Shared fixtures for the datkit-core integration tests.
#![allow(dead_code)]

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `0.0, 1.0, ..., (n - 1) as f64`
pub fn arange(n: u32) -> Vec<f64> {
    (0..n).map(f64::from).collect()
}

/// `start, start + step, ...` with `n` samples, built by multiplication.
pub fn grid(start: f64, step: f64, n: u32) -> Vec<f64> {
    (0..n).map(|i| start + step * f64::from(i)).collect()
}

/// `n` evenly spaced samples on `[0, 1]`, each computed as `i / (n - 1)`.
pub fn unit_grid(n: u32) -> Vec<f64> {
    let last = f64::from(n - 1);
    (0..n).map(|i| f64::from(i) / last).collect()
}

/// Noisy sine on `[0, 1]` with 1001 samples: a unit sine plus a small fast
/// cosine and seeded uniform noise.
pub fn noisy_sine() -> (Vec<f64>, Vec<f64>) {
    let t = unit_grid(1001);
    let mut rng = StdRng::seed_from_u64(1);
    let v = t
        .iter()
        .map(|&x| {
            (x * 2.0 * std::f64::consts::PI).sin()
                + 0.02 * (x * 150.0 * std::f64::consts::PI).cos()
                + rng.random_range(-0.02..0.02)
        })
        .collect();
    (t, v)
}

/// Snapshot every slice in `args`, run `call`, and assert no slice changed.
///
/// Values are compared bit for bit so NaN inputs are handled too.
pub fn assert_args_unchanged<R>(args: &[&[f64]], call: impl FnOnce() -> R) -> R {
    let snapshot: Vec<Vec<u64>> = args
        .iter()
        .map(|a| a.iter().map(|x| x.to_bits()).collect())
        .collect();
    let out = call();
    for (k, (arg, before)) in args.iter().zip(&snapshot).enumerate() {
        let after: Vec<u64> = arg.iter().map(|x| x.to_bits()).collect();
        assert_eq!(&after, before, "argument {k} was modified");
    }
    out
}

/// Strictly increasing, regularly spaced time vectors of 1..200 samples.
pub fn arb_times() -> impl Strategy<Value = Vec<f64>> {
    (-1000.0f64..1000.0, 0.01f64..10.0, 1u32..200)
        .prop_map(|(start, step, n)| grid(start, step, n))
}

/// Parallel `(times, values)` pairs with at least `min_len` samples.
pub fn arb_series(min_len: u32) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (-1000.0f64..1000.0, 0.01f64..10.0, min_len..200).prop_flat_map(|(start, step, n)| {
        let times = grid(start, step, n);
        let len = times.len();
        (
            Just(times),
            proptest::collection::vec(-1e3f64..1e3, len..=len),
        )
    })
}
