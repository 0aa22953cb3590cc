//! Build command - preprocess a GeoJSON border into a segment list.

use std::path::PathBuf;

use borderdist::border::{load_border, save_segments};
use borderdist::geodesic::Wgs84Geodesic;
use tracing::info;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the build command.
pub struct BuildArgs {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Run the build command.
pub fn run(args: BuildArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(debug)?;
    runner.log_startup("build");

    let geodesic = Wgs84Geodesic::new();
    let start = std::time::Instant::now();
    let border = load_border(&geodesic, &args.input)?;
    let elapsed = start.elapsed();

    save_segments(&border, &args.output)?;

    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        segments = border.len(),
        "Border built"
    );

    println!("Built {} segments in {:.2}s", border.len(), elapsed.as_secs_f64());
    println!("  Total length: {:.3} km", border.total_length() / 1000.0);
    println!("  Written to:   {}", args.output.display());

    Ok(())
}
