use datkit::{Datkit, Window};
use datkit_demos::common::{init_tracing, noisy_sine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,datkit=trace,datkit_core=trace
    init_tracing();

    let series = noisy_sine(201, 1.0, 0.05);
    let dk = Datkit::builder().ttol(1e-6).build()?;

    // Successful lookups open a span per call.
    let i = dk.locate(&series, 0.5)?;
    tracing::info!(index = i, "located mid-point");

    // Rejected inputs are logged at debug level by the core.
    if let Err(e) = dk.locate(&series, 0.5025) {
        tracing::info!(error = %e, "lookup between samples failed as expected");
    }
    if let Err(e) = dk.moving_average(&series, Window::Samples(4)) {
        tracing::info!(error = %e, "even window rejected");
    }

    let smooth = dk.gaussian_smoothing(&series, Window::Duration(0.05))?;
    tracing::info!(len = smooth.len(), "smoothed");
    Ok(())
}
