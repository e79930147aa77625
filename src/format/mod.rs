//! Overlay document import/export.
//!
//! The persisted format is GeoJSON; see [`geojson`] for the wire structures
//! and the defensive decoding rules.

mod error;
mod geojson;

pub use error::FormatError;
pub use geojson::{
    Feature, FeatureCollection, FeatureProperties, Geometry, encode_document, parse_or_empty,
    to_pretty_bytes,
};
