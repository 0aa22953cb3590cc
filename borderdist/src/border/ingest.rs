//! Border file formats.
//!
//! Two on-disk forms are understood:
//!
//! - **GeoJSON**: a `Polygon` or `MultiPolygon` geometry, a `Feature` wrapping
//!   one, or a `FeatureCollection`/`GeometryCollection` of them. Every ring
//!   (outer boundaries and holes alike) becomes part of the border.
//! - **Segment list**: the JSON array written by [`write_segments`], one
//!   `{"start": {..}, "end": {..}, "distance": ..}` object per segment. This
//!   skips the geodesic work at load time.
//!
//! [`load_border`] tells them apart by the top-level JSON value: an array is
//! a segment list, an object is GeoJSON.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::{Border, BorderError, Segment};
use crate::geodesic::GeodesicProvider;

/// A ring of `[lon, lat]` positions.
pub type Ring = Vec<[f64; 2]>;

/// Error type for reading and writing border files.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GeoJSON object has no \"type\" member")]
    MissingType,

    #[error("Unsupported GeoJSON type '{0}' (expected Polygon, MultiPolygon, Feature, FeatureCollection or GeometryCollection)")]
    UnsupportedGeometry(String),

    #[error("Invalid position {position} in ring {ring}: expected [longitude, latitude]")]
    InvalidPosition { ring: usize, position: usize },

    #[error("Border file must contain a GeoJSON object or a segment array")]
    UnrecognizedFormat,

    #[error(transparent)]
    Border(#[from] BorderError),
}

/// Extracts every polygon ring from a GeoJSON value.
pub fn rings_from_geojson(value: &Value) -> Result<Vec<Ring>, IngestError> {
    let mut rings = Vec::new();
    collect_rings(value, &mut rings)?;
    Ok(rings)
}

fn collect_rings(value: &Value, rings: &mut Vec<Ring>) -> Result<(), IngestError> {
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or(IngestError::MissingType)?;

    match kind {
        "Polygon" => {
            let polygon = Vec::<Vec<Vec<f64>>>::deserialize(member(value, "coordinates"))?;
            push_polygon(polygon, rings)
        }
        "MultiPolygon" => {
            let polygons = Vec::<Vec<Vec<Vec<f64>>>>::deserialize(member(value, "coordinates"))?;
            for polygon in polygons {
                push_polygon(polygon, rings)?;
            }
            Ok(())
        }
        "Feature" => match value.get("geometry") {
            None | Some(Value::Null) => Ok(()),
            Some(geometry) => collect_rings(geometry, rings),
        },
        "FeatureCollection" => each(value, "features", rings),
        "GeometryCollection" => each(value, "geometries", rings),
        other => Err(IngestError::UnsupportedGeometry(other.to_string())),
    }
}

static NULL: Value = Value::Null;

fn member<'a>(value: &'a Value, key: &str) -> &'a Value {
    value.get(key).unwrap_or(&NULL)
}

fn each(value: &Value, key: &str, rings: &mut Vec<Ring>) -> Result<(), IngestError> {
    for item in Vec::<Value>::deserialize(member(value, key))? {
        collect_rings(&item, rings)?;
    }
    Ok(())
}

fn push_polygon(polygon: Vec<Vec<Vec<f64>>>, rings: &mut Vec<Ring>) -> Result<(), IngestError> {
    for positions in polygon {
        let ring = rings.len();
        let ring_positions = positions
            .iter()
            .enumerate()
            .map(|(position, p)| match p.as_slice() {
                // Altitude, if present, is ignored
                [lon, lat, ..] => Ok([*lon, *lat]),
                _ => Err(IngestError::InvalidPosition { ring, position }),
            })
            .collect::<Result<Ring, _>>()?;
        rings.push(ring_positions);
    }
    Ok(())
}

/// Parses border JSON in either supported form.
pub fn parse_border<G: GeodesicProvider + ?Sized>(
    geodesic: &G,
    value: &Value,
) -> Result<Border, IngestError> {
    match value {
        Value::Array(_) => {
            let segments = Vec::<Segment>::deserialize(value)?;
            Ok(Border::from_segments(segments)?)
        }
        Value::Object(_) => {
            let rings = rings_from_geojson(value)?;
            Ok(Border::from_rings(geodesic, &rings)?)
        }
        _ => Err(IngestError::UnrecognizedFormat),
    }
}

/// Loads a border file in either supported form.
pub fn load_border<G: GeodesicProvider + ?Sized>(
    geodesic: &G,
    path: &Path,
) -> Result<Border, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_reader(BufReader::new(file))?;
    let border = parse_border(geodesic, &value)?;

    tracing::debug!(
        path = %path.display(),
        segments = border.len(),
        "Loaded border"
    );

    Ok(border)
}

/// Writes a border as a segment list.
pub fn write_segments<W: Write>(border: &Border, writer: W) -> Result<(), IngestError> {
    serde_json::to_writer(writer, border.segments())?;
    Ok(())
}

/// Saves a border as a segment list file, creating parent directories.
pub fn save_segments(border: &Border, path: &Path) -> Result<(), IngestError> {
    let io_err = |source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    write_segments(border, &mut writer)?;
    writer.flush().map_err(io_err)?;
    Ok(())
}
