#![allow(dead_code)]

use datkit::TimeSeries;

/// `t = 0, 1, ..., n - 1` with values `f(t)`.
pub fn series_from(n: u32, f: impl Fn(f64) -> f64) -> TimeSeries {
    let times: Vec<f64> = (0..n).map(f64::from).collect();
    let values = times.iter().copied().map(f).collect();
    TimeSeries::new(times, values).expect("equal lengths")
}

/// `t = i / 100` for `i in 0..=100` with values `sin(2 pi t)`.
pub fn unit_sine() -> TimeSeries {
    let times: Vec<f64> = (0..=100).map(|i| f64::from(i) / 100.0).collect();
    let values = times
        .iter()
        .map(|t| (2.0 * std::f64::consts::PI * t).sin())
        .collect();
    TimeSeries::new(times, values).expect("equal lengths")
}
