use datkit::{Datkit, DatkitError, TimeSeries, Window};
use proptest::prelude::*;

use crate::helpers::series_from;

#[test]
fn moving_average_of_ones() {
    let s = series_from(10, |_| 1.0);
    let out = Datkit::new().moving_average(&s, Window::Samples(3)).unwrap();
    assert_eq!(out.values(), &[1.0; 8]);
    assert_eq!(out.times(), &s.times()[1..9]);
}

#[test]
fn gaussian_smoothing_returns_a_shorter_series() {
    let s = series_from(30, |t| (t / 3.0).sin());
    let out = Datkit::new()
        .gaussian_smoothing(&s, Window::Duration(5.0))
        .unwrap();
    assert_eq!(out.len(), 26);
    assert_eq!(out.times()[0], 2.0);
}

#[test]
fn window_size_through_the_analyser() {
    let s = series_from(10, |t| t);
    let dk = Datkit::new();
    assert_eq!(dk.window_size(&s, Some(7.0), None).unwrap(), 7);
    assert_eq!(dk.window_size(&s, None, Some(3.5)).unwrap(), 3);
    assert!(matches!(
        dk.window_size(&s, Some(4.0), None),
        Err(DatkitError::InvalidWindow(_))
    ));
    assert!(matches!(
        dk.window_size(&s, None, None),
        Err(DatkitError::AmbiguousWindow(_))
    ));
}

#[test]
fn haar_downsample_pairs_samples() {
    let values = [5.0, 1.0, 8.0, 12.0, 3.0, 3.0, 1.0, 9.0, 2.0, 7.0];
    let s = series_from(10, |t| values[t as usize]);
    let out = Datkit::new().haar_downsample(&s, 1).unwrap();
    assert_eq!(out.times(), &[0.5, 2.5, 4.5, 6.5, 8.5]);
    assert_eq!(out.values(), &[3.0, 10.0, 3.0, 5.0, 4.5]);

    let out = Datkit::new().haar_downsample(&s, 4).unwrap();
    assert!(out.is_empty());
}

#[test]
fn filtered_series_round_trips_through_json() {
    let s = series_from(9, |t| 2.0 * t);
    let out = Datkit::new().moving_average(&s, Window::Samples(3)).unwrap();
    let json = serde_json::to_string(&out).unwrap();
    let back: TimeSeries = serde_json::from_str(&json).unwrap();
    assert_eq!(back, out);
}

proptest! {
    #[test]
    fn facade_filters_match_core(n in 3u32..120, half in 1usize..10, seed in 0.0f64..10.0) {
        let s = series_from(n, |t| (t * 0.37 + seed).sin());
        let w = 2 * half + 1;
        prop_assume!(w <= s.len());
        let dk = Datkit::new();

        let out = dk.moving_average(&s, Window::Samples(w)).unwrap();
        let (t, v) =
            datkit_core::moving_average(s.times(), s.values(), Window::Samples(w)).unwrap();
        prop_assert_eq!(out.times(), &t[..]);
        prop_assert_eq!(out.values(), &v[..]);

        let out = dk.gaussian_smoothing(&s, Window::Samples(w)).unwrap();
        let (t, v) =
            datkit_core::gaussian_smoothing(s.times(), s.values(), Window::Samples(w)).unwrap();
        prop_assert_eq!(out.times(), &t[..]);
        prop_assert_eq!(out.values(), &v[..]);
    }
}
