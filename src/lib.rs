//! Mapwash
//!
//! CLI wrapper around the `legend-snap` pipeline: PNG in, cleaned PNG +
//! change overlay out. This library exposes modules for integration testing.

pub mod config;
pub mod error;
pub mod raster;
