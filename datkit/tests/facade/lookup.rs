use chrono::{DateTime, Utc};
use datkit::{Bounds, Datkit, DatkitError, TimeSeries};

use crate::helpers::{series_from, unit_sine};

#[test]
fn locate_uses_the_configured_tolerance() {
    let s = series_from(10, |t| t);
    let strict = Datkit::new();
    let loose = Datkit::builder().ttol(0.2).build().unwrap();

    assert_eq!(strict.locate(&s, 4.0).unwrap(), 4);
    assert!(matches!(strict.locate(&s, 4.1), Err(DatkitError::NotFound { .. })));
    assert_eq!(loose.locate(&s, 4.1).unwrap(), 4);
    assert_eq!(loose.locate(&s, -0.1).unwrap(), 0);
    assert!(matches!(loose.locate(&s, -0.3), Err(DatkitError::OutOfRange { .. })));
}

#[test]
fn locate_range_and_nearest() {
    let s = series_from(10, |t| t);
    let dk = Datkit::new();
    assert_eq!(dk.locate_range(&s, 5.0, Some(1.0), Some(2.0)).unwrap(), (4, 7));
    assert_eq!(dk.locate_range(&s, 5.0, None, None).unwrap(), (5, 5));
    assert_eq!(dk.locate_nearest(&s, 6.4).unwrap(), 6);
    assert_eq!(dk.locate_nearest(&s, 9.4).unwrap(), 9);
    assert!(matches!(
        dk.locate_nearest(&s, 9.6),
        Err(DatkitError::OutOfRange { .. })
    ));
}

#[test]
fn select_uses_the_configured_bounds() {
    let s = unit_sine();
    let half_open = Datkit::new();
    let closed = Datkit::builder().bounds(Bounds::CLOSED).build().unwrap();
    let open = Datkit::builder().bounds(Bounds::OPEN).build().unwrap();

    assert_eq!(half_open.select(&s, 0.25, 0.5).unwrap(), (25, 50));
    assert_eq!(closed.select(&s, 0.25, 0.5).unwrap(), (25, 51));
    assert_eq!(open.select(&s, 0.25, 0.5).unwrap(), (26, 50));
    assert_eq!(open.select_span(&s, None, Some(0.5)).unwrap(), (0, 50));
    assert_eq!(closed.select_span(&s, Some(0.9), None).unwrap(), (90, 101));
    assert!(matches!(
        half_open.select(&s, 0.5, 0.25),
        Err(DatkitError::InvalidInterval { .. })
    ));
}

#[test]
fn sampling_checks() {
    let dk = Datkit::new();
    let s = unit_sine();
    assert!((dk.sampling_interval(&s).unwrap() - 0.01).abs() < 1e-15);
    assert!(dk.is_regularly_increasing(&s));

    let jittered = TimeSeries::new(vec![0.0, 1.0, 2.05, 3.0], vec![0.0; 4]).unwrap();
    assert!(!dk.is_regularly_increasing(&jittered));
    let lenient = Datkit::builder().regularity_rtol(0.1).build().unwrap();
    assert!(lenient.is_regularly_increasing(&jittered));

    let single = TimeSeries::new(vec![1.0], vec![1.0]).unwrap();
    assert_eq!(
        dk.sampling_interval(&single),
        Err(DatkitError::TooShort { needed: 2, got: 1 })
    );
}

#[test]
fn series_from_timestamps() {
    let stamps: Vec<DateTime<Utc>> = (0..5)
        .map(|i| DateTime::from_timestamp(1_700_000_000 + 60 * i, 0).unwrap())
        .collect();
    let s = TimeSeries::from_timestamps(&stamps, vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

    let dk = Datkit::new();
    assert_eq!(dk.sampling_interval(&s).unwrap(), 60.0);
    assert_eq!(dk.value_at(&s, 1_700_000_120.0).unwrap(), 3.0);
    assert_eq!(dk.locate_nearest(&s, 1_700_000_100.0).unwrap(), 2);
}
