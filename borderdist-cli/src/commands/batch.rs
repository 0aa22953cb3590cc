//! Batch command - distances for a CSV file of points.
//!
//! Input is one `lat,lon` pair per line. Blank lines, `#` comments and a
//! leading `lat,lon` header are skipped. Output is CSV with one row per
//! input point, in input order.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use borderdist::border::BorderError;
use borderdist::geodesic::GeoPoint;
use borderdist::BorderNearest;
use tracing::info;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the batch command.
pub struct BatchArgs {
    pub points: PathBuf,
    pub border: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

const HEADER: &str = "lat,lon,distance_m,nearest_lat,nearest_lon,segment_index";

/// Run the batch command.
pub fn run(args: BatchArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(debug)?;
    runner.log_startup("batch");

    let content = std::fs::read_to_string(&args.points).map_err(|error| CliError::FileRead {
        path: args.points.display().to_string(),
        error,
    })?;
    let queries = parse_points(&content)?;

    let path = runner.resolve_border_path(args.border)?;
    let index = runner.load_index(&path)?;

    let start = std::time::Instant::now();
    let results = index.nearest_batch(&queries);
    info!(
        points = queries.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Batch complete"
    );

    match &args.output {
        Some(output) => {
            let write_err = |error: io::Error| CliError::FileWrite {
                path: output.display().to_string(),
                error,
            };
            let file = File::create(output).map_err(write_err)?;
            write_results(BufWriter::new(file), &queries, results).map_err(|e| match e {
                WriteFailure::Io(error) => write_err(error),
                WriteFailure::Query(e) => CliError::Query(e),
            })?;
            println!("Wrote {} results to {}", queries.len(), output.display());
        }
        None => {
            let stdout = io::stdout();
            write_results(stdout.lock(), &queries, results).map_err(|e| match e {
                WriteFailure::Io(error) => CliError::FileWrite {
                    path: "<stdout>".to_string(),
                    error,
                },
                WriteFailure::Query(e) => CliError::Query(e),
            })?;
        }
    }

    Ok(())
}

/// Parses `lat,lon` lines into points.
fn parse_points(content: &str) -> Result<Vec<GeoPoint>, CliError> {
    let mut points = Vec::new();

    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if points.is_empty() && line.eq_ignore_ascii_case("lat,lon") {
            continue;
        }

        let invalid =
            |reason: String| CliError::InvalidInput(format!("line {}: {}", number + 1, reason));

        let (lat, lon) = line
            .split_once(',')
            .ok_or_else(|| invalid(format!("expected 'lat,lon', got '{}'", line)))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| invalid(format!("bad latitude '{}'", lat.trim())))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .map_err(|_| invalid(format!("bad longitude '{}'", lon.trim())))?;

        points.push(GeoPoint::new(lat, lon).map_err(|e| invalid(e.to_string()))?);
    }

    Ok(points)
}

#[derive(Debug)]
enum WriteFailure {
    Io(io::Error),
    Query(BorderError),
}

fn write_results<W: Write>(
    mut writer: W,
    queries: &[GeoPoint],
    results: Vec<Result<BorderNearest, BorderError>>,
) -> Result<(), WriteFailure> {
    writeln!(writer, "{}", HEADER).map_err(WriteFailure::Io)?;
    for (query, result) in queries.iter().zip(results) {
        let nearest = result.map_err(WriteFailure::Query)?;
        writeln!(
            writer,
            "{},{},{:.3},{:.8},{:.8},{}",
            query.lat,
            query.lon,
            nearest.distance(),
            nearest.point().lat,
            nearest.point().lon,
            nearest.segment_index
        )
        .map_err(WriteFailure::Io)?;
    }
    writer.flush().map_err(WriteFailure::Io)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_points_skips_header_and_comments() {
        let content = "lat,lon\n# harbour\n46.2, -63.1\n\n45.0,-62.5\n";
        let points = parse_points(content).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], GeoPoint::new(46.2, -63.1).unwrap());
        assert_eq!(points[1], GeoPoint::new(45.0, -62.5).unwrap());
    }

    #[test]
    fn test_parse_points_reports_line_number() {
        let content = "46.2,-63.1\n91.0,0.0\n";
        match parse_points(content) {
            Err(CliError::InvalidInput(msg)) => assert!(msg.starts_with("line 2"), "{}", msg),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_points_rejects_missing_comma() {
        assert!(matches!(
            parse_points("46.2 -63.1"),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_write_results_format() {
        let point = GeoPoint::new(1.0, 2.0).unwrap();
        let nearest = BorderNearest {
            segment_index: 4,
            nearest: borderdist::NearestResult {
                point: GeoPoint::new(1.5, 2.5).unwrap(),
                distance: 1234.5678,
                fraction: 0.5,
            },
        };

        let mut out = Vec::new();
        write_results(&mut out, &[point], vec![Ok(nearest)]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            format!("{}\n1,2,1234.568,1.50000000,2.50000000,4\n", HEADER)
        );
    }
}
