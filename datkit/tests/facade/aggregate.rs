use datkit::{Bounds, Datkit, DatkitError};

use crate::helpers::{series_from, unit_sine};

#[test]
fn point_values() {
    let s = series_from(10, |t| 10.0 * t);
    let dk = Datkit::new();
    assert_eq!(dk.value_at(&s, 3.0).unwrap(), 30.0);
    assert_eq!(dk.value_near(&s, 3.4).unwrap(), 30.0);
    assert_eq!(dk.value_near(&s, 3.6).unwrap(), 40.0);
    assert!(matches!(dk.value_at(&s, 3.4), Err(DatkitError::NotFound { .. })));
}

#[test]
fn mean_follows_the_configured_bounds() {
    let s = series_from(10, |t| t);
    let half_open = Datkit::new();
    let closed = Datkit::builder().include_right(true).build().unwrap();
    assert_eq!(half_open.mean_on(&s, 2.0, 6.0).unwrap(), 3.5);
    assert_eq!(closed.mean_on(&s, 2.0, 6.0).unwrap(), 4.0);
    assert_eq!(
        half_open.mean_on(&s, 2.2, 2.8),
        Err(DatkitError::EmptyInterval { start: 3, end: 3 })
    );
}

#[test]
fn mean_around_a_sample() {
    let s = series_from(10, |t| t);
    let dk = Datkit::new();
    assert_eq!(dk.mean_around(&s, 5.0, Some(2.0), Some(2.0)).unwrap(), 4.5);
    assert!(matches!(
        dk.mean_around(&s, 5.0, None, None),
        Err(DatkitError::EmptyInterval { .. })
    ));
}

#[test]
fn extrema_of_a_sine() {
    let s = unit_sine();
    let dk = Datkit::new();
    let (t, v) = dk.max_on(&s, 0.0, 1.0).unwrap();
    assert_eq!(t, 0.25);
    assert!((v - 1.0).abs() < 1e-15);

    let (t, v) = dk.min_on(&s, 0.0, 1.0).unwrap();
    assert_eq!(t, 0.75);
    assert!((v + 1.0).abs() < 1e-15);

    let (t, v) = dk.abs_max_on(&s, 0.5, 1.0).unwrap();
    assert_eq!(t, 0.75);
    assert!(v < 0.0);
}

#[test]
fn extrema_respect_open_bounds() {
    let s = series_from(5, |t| [3.0, 1.0, 2.0, 0.0, 5.0][t as usize]);
    let open = Datkit::builder().bounds(Bounds::OPEN).build().unwrap();
    assert_eq!(open.max_on(&s, 0.0, 4.0).unwrap(), (2.0, 2.0));
    assert_eq!(open.min_on(&s, 0.0, 3.0).unwrap(), (1.0, 1.0));
    let closed = Datkit::builder().bounds(Bounds::CLOSED).build().unwrap();
    assert_eq!(closed.max_on(&s, 0.0, 4.0).unwrap(), (4.0, 5.0));
    assert_eq!(closed.abs_max_on(&s, 0.0, 3.0).unwrap(), (0.0, 3.0));
}
