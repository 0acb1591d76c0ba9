use datkit::{Datkit, DatkitConfig, TimeSeries, Window};
use datkit_demos::common::noisy_sine;

fn max_error(series: &TimeSeries) -> f64 {
    series
        .times()
        .iter()
        .zip(series.values())
        .map(|(t, v)| (v - (2.0 * std::f64::consts::PI * t).sin()).abs())
        .fold(0.0, f64::max)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg: DatkitConfig = serde_json::from_str(r#"{ "ttol": 1e-9 }"#)?;
    let dk = Datkit::builder().config(cfg).build()?;
    println!("config: {}", serde_json::to_string(dk.config())?);

    let series = noisy_sine(1001, 1.0, 0.05);
    println!("raw: {} samples, max error {:.4}", series.len(), max_error(&series));

    let w = dk.window_size(&series, None, Some(0.015))?;
    println!("a 0.015 s window spans {w} samples");

    let ma = dk.moving_average(&series, Window::Samples(w))?;
    println!("moving average: {} samples, max error {:.4}", ma.len(), max_error(&ma));

    let gs = dk.gaussian_smoothing(&series, Window::Duration(0.025))?;
    println!("gaussian: {} samples, max error {:.4}", gs.len(), max_error(&gs));

    let haar = dk.haar_downsample(&series, 3)?;
    println!("haar x3: {} samples, max error {:.4}", haar.len(), max_error(&haar));

    println!("kernel(5): {:?}", datkit::gaussian_kernel(5));
    Ok(())
}
