use datkit::TimeSeries;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used for the demo noise unless `DATKIT_DEMOS_SEED` is set.
pub const DEFAULT_SEED: u64 = 7;

/// Install a human-friendly tracing subscriber filtered by `RUST_LOG`.
///
/// Suggested: `RUST_LOG=info,datkit=trace,datkit_core=trace`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}

/// A sine of frequency `hz` sampled `n` times on `[0, 1]`, plus uniform
/// noise of the given amplitude.
///
/// # Panics
/// Panics if `n < 2`.
#[must_use]
pub fn noisy_sine(n: u32, hz: f64, noise: f64) -> TimeSeries {
    assert!(n >= 2, "need at least two samples");
    let seed = std::env::var("DATKIT_DEMOS_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let mut rng = StdRng::seed_from_u64(seed);
    let last = f64::from(n - 1);
    let times: Vec<f64> = (0..n).map(|i| f64::from(i) / last).collect();
    let values = times
        .iter()
        .map(|t| {
            let clean = (2.0 * std::f64::consts::PI * hz * t).sin();
            clean + noise * rng.random_range(-1.0..=1.0)
        })
        .collect();
    TimeSeries::new(times, values).expect("times and values have equal length")
}
