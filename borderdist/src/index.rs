//! Query handle for a loaded border.
//!
//! [`BorderIndex`] bundles the three things every query needs: the border's
//! segments, a geodesic provider, and a configured minimizer. It is cheap to
//! clone and safe to share across threads.

use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;

use crate::border::{load_border, Border, BorderError, IngestError};
use crate::config::MinimizerConfig;
use crate::geodesic::{GeoPoint, GeodesicProvider, Wgs84Geodesic};
use crate::minimize::NewtonMinimizer;
use crate::nearest::{
    distance_to_border, distance_to_border_exhaustive, distance_to_border_with_stats,
    BorderNearest, ScanStats,
};

/// A border ready for nearest-point queries.
#[derive(Debug)]
pub struct BorderIndex<G = Wgs84Geodesic> {
    border: Border,
    geodesic: Arc<G>,
    minimizer: NewtonMinimizer,
}

impl<G> Clone for BorderIndex<G> {
    fn clone(&self) -> Self {
        Self {
            border: self.border.clone(),
            geodesic: Arc::clone(&self.geodesic),
            minimizer: self.minimizer,
        }
    }
}

impl BorderIndex<Wgs84Geodesic> {
    /// Loads a border file (GeoJSON or segment list) on the WGS84 ellipsoid.
    pub fn load(path: &Path, config: MinimizerConfig) -> Result<Self, IngestError> {
        let geodesic = Wgs84Geodesic::new();
        let border = load_border(&geodesic, path)?;
        Ok(Self::with_provider(border, geodesic, config))
    }

    /// Wraps an already built border on the WGS84 ellipsoid.
    pub fn new(border: Border, config: MinimizerConfig) -> Self {
        Self::with_provider(border, Wgs84Geodesic::new(), config)
    }
}

impl<G: GeodesicProvider> BorderIndex<G> {
    /// Wraps a border with a custom geodesic provider.
    pub fn with_provider(border: Border, geodesic: G, config: MinimizerConfig) -> Self {
        Self {
            border,
            geodesic: Arc::new(geodesic),
            minimizer: NewtonMinimizer::new(config),
        }
    }

    pub fn border(&self) -> &Border {
        &self.border
    }

    pub fn geodesic(&self) -> &G {
        &self.geodesic
    }

    pub fn minimizer(&self) -> &NewtonMinimizer {
        &self.minimizer
    }

    /// Closest border point to `query`.
    pub fn nearest(&self, query: GeoPoint) -> Result<BorderNearest, BorderError> {
        distance_to_border(
            self.geodesic.as_ref(),
            &self.minimizer,
            self.border.segments(),
            query,
        )
    }

    /// Closest border point to `query`, with pruning statistics.
    pub fn nearest_with_stats(
        &self,
        query: GeoPoint,
    ) -> Result<(BorderNearest, ScanStats), BorderError> {
        distance_to_border_with_stats(
            self.geodesic.as_ref(),
            &self.minimizer,
            self.border.segments(),
            query,
        )
    }

    /// Closest border point to `query`, solving every segment.
    pub fn nearest_exhaustive(&self, query: GeoPoint) -> Result<BorderNearest, BorderError> {
        distance_to_border_exhaustive(
            self.geodesic.as_ref(),
            &self.minimizer,
            self.border.segments(),
            query,
        )
    }

    /// Runs [`nearest`](Self::nearest) for every query in parallel.
    ///
    /// Results are in query order.
    pub fn nearest_batch(&self, queries: &[GeoPoint]) -> Vec<Result<BorderNearest, BorderError>> {
        let results: Vec<_> = queries.par_iter().map(|&query| self.nearest(query)).collect();

        tracing::debug!(
            queries = queries.len(),
            segments = self.border.len(),
            "Batch query complete"
        );

        results
    }
}
