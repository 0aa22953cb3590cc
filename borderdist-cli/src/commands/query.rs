//! Query command - distance from one point to the border.

use std::path::PathBuf;

use borderdist::geodesic::GeoPoint;
use borderdist::BorderNearest;
use serde::Serialize;
use tracing::info;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the query command.
pub struct QueryArgs {
    pub lat: f64,
    pub lon: f64,
    pub border: Option<PathBuf>,
    pub json: bool,
    pub exhaustive: bool,
}

/// JSON shape of a query result.
#[derive(Debug, Serialize)]
struct QueryReport {
    query: GeoPoint,
    #[serde(flatten)]
    nearest: BorderNearest,
}

/// Run the query command.
pub fn run(args: QueryArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(debug)?;
    runner.log_startup("query");

    let query =
        GeoPoint::new(args.lat, args.lon).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let path = runner.resolve_border_path(args.border)?;
    let index = runner.load_index(&path)?;

    let nearest = if args.exhaustive {
        index.nearest_exhaustive(query)?
    } else {
        let (nearest, stats) = index.nearest_with_stats(query)?;
        info!(
            evaluated = stats.evaluated,
            pruned = stats.pruned(),
            "Pruned query"
        );
        nearest
    };

    if args.json {
        let report = QueryReport { query, nearest };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::InvalidInput(e.to_string()))?;
        println!("{}", json);
    } else {
        println!("Query:         {}", query);
        println!("Distance:      {:.3} m", nearest.distance());
        println!("Nearest point: {}", nearest.point());
        println!(
            "Segment:       {} (fraction {:.4})",
            nearest.segment_index, nearest.nearest.fraction
        );
    }

    Ok(())
}
