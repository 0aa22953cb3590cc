//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`batch`] - Distances for a CSV file of points
//! - [`build`] - Preprocess a GeoJSON border into a segment list
//! - [`config`] - Configuration management (path, init, show)
//! - [`query`] - Distance from one point to the border

pub mod batch;
pub mod build;
pub mod config;
pub mod query;
