use datkit::{Bounds, DEFAULT_RTOL, DEFAULT_TTOL, Datkit, DatkitConfig, DatkitError};

#[test]
fn defaults_match_the_exported_constants() {
    let dk = Datkit::new();
    assert_eq!(dk.config().ttol, DEFAULT_TTOL);
    assert_eq!(dk.config().regularity_rtol, DEFAULT_RTOL);
    assert_eq!(dk.config().bounds, Bounds::HALF_OPEN);
    assert_eq!(dk.config(), Datkit::builder().build().unwrap().config());
}

#[test]
fn builder_sets_every_field() {
    let dk = Datkit::builder()
        .ttol(1e-3)
        .bounds(Bounds::OPEN)
        .include_right(true)
        .regularity_rtol(0.5)
        .build()
        .unwrap();
    assert_eq!(
        *dk.config(),
        DatkitConfig {
            ttol: 1e-3,
            bounds: Bounds::LEFT_OPEN,
            regularity_rtol: 0.5,
        }
    );
}

#[test]
fn bound_flags_toggle_independently() {
    let dk = Datkit::builder().include_left(false).build().unwrap();
    assert_eq!(dk.config().bounds, Bounds::OPEN);
    let dk = Datkit::builder().include_right(true).build().unwrap();
    assert_eq!(dk.config().bounds, Bounds::CLOSED);
}

#[test]
fn later_calls_override_a_loaded_config() {
    let cfg: DatkitConfig = serde_json::from_str(
        r#"{ "ttol": 0.25, "bounds": { "include_left": false, "include_right": true } }"#,
    )
    .unwrap();
    assert_eq!(cfg.regularity_rtol, DEFAULT_RTOL);

    let dk = Datkit::builder().config(cfg).ttol(0.5).build().unwrap();
    assert_eq!(dk.config().ttol, 0.5);
    assert_eq!(dk.config().bounds, Bounds::LEFT_OPEN);
}

#[test]
fn build_rejects_invalid_tolerances() {
    for ttol in [-1e-9, f64::NAN, f64::INFINITY] {
        let err = Datkit::builder().ttol(ttol).build().unwrap_err();
        match err {
            DatkitError::InvalidArg(msg) => assert!(msg.contains("ttol"), "{msg}"),
            other => panic!("unexpected: {other:?}"),
        }
    }
    let err = Datkit::builder().regularity_rtol(-0.1).build().unwrap_err();
    match err {
        DatkitError::InvalidArg(msg) => assert!(msg.contains("regularity_rtol"), "{msg}"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn analyser_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Datkit>();
    assert_send_sync::<datkit::TimeSeries>();
}
