use datkit::{Bounds, Datkit, DatkitError, TimeSeries};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Hourly readings starting at 2024-01-01T00:00:00Z.
    let start = chrono::DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")?.to_utc();
    let stamps: Vec<_> = (0..24)
        .map(|h| start + chrono::Duration::hours(h))
        .collect();
    let temps: Vec<f64> = (0..24)
        .map(|h| 12.0 + 6.0 * ((f64::from(h) - 15.0) / 24.0 * std::f64::consts::TAU).cos())
        .collect();
    let series = TimeSeries::from_timestamps(&stamps, temps)?;
    let t0 = series.times()[0];
    let hour = |h: f64| t0 + 3600.0 * h;

    let dk = Datkit::builder().ttol(1.0).bounds(Bounds::CLOSED).build()?;
    println!("sampling interval: {} s", dk.sampling_interval(&series)?);
    println!("regular: {}", dk.is_regularly_increasing(&series));

    println!("06:00 -> {:.2}", dk.value_at(&series, hour(6.0))?);
    println!("06:20 (nearest) -> {:.2}", dk.value_near(&series, hour(6.0 + 1.0 / 3.0))?);
    match dk.value_at(&series, hour(6.5)) {
        Err(DatkitError::NotFound { nearest, .. }) => {
            println!("06:30 not sampled; nearest sample at +{} s", nearest - t0);
        }
        other => println!("06:30 -> {other:?}"),
    }

    let (i, j) = dk.select(&series, hour(9.0), hour(17.0))?;
    println!("09:00..=17:00 covers samples {i}..{j}");
    println!("mean over working day: {:.2}", dk.mean_on(&series, hour(9.0), hour(17.0))?);
    let (t_max, v_max) = dk.max_on(&series, hour(0.0), hour(23.0))?;
    println!("daily max {:.2} at +{} h", v_max, (t_max - t0) / 3600.0);
    println!(
        "mean of the 3 hours before noon: {:.2}",
        dk.mean_around(&series, hour(12.0), Some(3.0 * 3600.0), None)?
    );
    Ok(())
}
