//! GeoJSON overlay document encoding and decoding.
//!
//! The persisted format is a GeoJSON `FeatureCollection` with one feature per
//! overlay. Point features carry `{title, color, category, icon}` properties;
//! area features carry the same minus `icon`. The format has no version field
//! and no schema enforcement beyond "properties is an object", so the read
//! side is fully defensive: every property is optional, wrong types are
//! treated as absent, and unknown values fall back to the model defaults.
//!
//! Decoding never fails. A missing, empty or malformed document is the
//! "no saved overlays yet" state and decodes to an empty sequence.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::format::error::FormatError;
use crate::model::{AnnotationRecord, OverlayKind, Shape};

/// A serialized overlay document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// Always `"FeatureCollection"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// One feature per overlay, in master-collection order.
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// A single serialized overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    /// Always `"Feature"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Point or polygon geometry in image pixel coordinates.
    pub geometry: Geometry,
    /// Annotation properties.
    pub properties: FeatureProperties,
}

/// GeoJSON geometry. Coordinates are kept as raw JSON since their nesting
/// depth depends on the geometry type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    /// Geometry type, e.g. `"Point"` or `"Polygon"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// `[x, y]` for points, `[[[x, y], ...]]` for polygons.
    pub coordinates: Value,
}

/// Annotation properties as written to the document.
///
/// `icon` is skipped when `None`, which together with the record invariant
/// (icon present iff point) guarantees area features never carry an `icon`
/// key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureProperties {
    /// Display label.
    pub title: String,
    /// CSS hex color.
    pub color: String,
    /// Category wire key.
    pub category: String,
    /// Icon wire key; point overlays only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Decode a persisted overlay document body.
///
/// Total: any failure (unparseable JSON, missing `features`, features with
/// unusable geometry) degrades to skipping the offending part, down to an
/// empty sequence for a wholly unusable body. Features are yielded in
/// document order.
pub fn parse_or_empty(body: &str) -> Vec<(Shape, AnnotationRecord)> {
    let doc: Value = match serde_json::from_str(body) {
        Ok(doc) => doc,
        Err(err) => {
            if !body.trim().is_empty() {
                log::warn!("Overlay document is not valid JSON, starting empty: {err}");
            }
            return Vec::new();
        }
    };

    let Some(features) = doc.get("features").and_then(Value::as_array) else {
        log::debug!("Overlay document has no features array, starting empty");
        return Vec::new();
    };

    let mut overlays = Vec::with_capacity(features.len());
    for (index, feature) in features.iter().enumerate() {
        match decode_feature(feature) {
            Some(overlay) => overlays.push(overlay),
            None => log::warn!("Skipping feature {index}: no usable geometry"),
        }
    }

    log::info!("Loaded {} overlays from document", overlays.len());
    overlays
}

/// Decode one feature into a shape plus its annotation record.
///
/// Returns `None` only when no geometry can be recovered; property problems
/// are always recovered by defaulting.
fn decode_feature(feature: &Value) -> Option<(Shape, AnnotationRecord)> {
    let geometry = feature.get("geometry")?;
    let geometry_kind = geometry.get("type").and_then(Value::as_str).unwrap_or("");
    let coordinates = geometry.get("coordinates")?;

    // Point geometry makes a point overlay; every other geometry type is
    // treated as an area built from its first coordinate ring.
    let shape = if geometry_kind == "Point" {
        let (x, y) = decode_position(coordinates)?;
        Shape::Point { x, y }
    } else {
        let ring = decode_first_ring(coordinates)?;
        Shape::Area { ring }
    };

    let properties = feature.get("properties");
    let text = |key: &str| {
        properties
            .and_then(|props| props.get(key))
            .and_then(Value::as_str)
    };

    let record = AnnotationRecord::from_properties(
        shape.kind(),
        text("title"),
        text("color"),
        text("category"),
        text("icon"),
    );

    Some((shape, record))
}

/// Decode a `[x, y]` position.
fn decode_position(value: &Value) -> Option<(f64, f64)> {
    let coords = value.as_array()?;
    let x = coords.first()?.as_f64()?;
    let y = coords.get(1)?.as_f64()?;
    Some((x, y))
}

/// Find the first ring of positions in arbitrarily nested coordinates.
///
/// Handles `Polygon` (`[[[x, y], ...]]`), `LineString` (`[[x, y], ...]`) and
/// deeper multi-geometry nesting by descending into the first element until a
/// list of positions is found.
fn decode_first_ring(value: &Value) -> Option<Vec<(f64, f64)>> {
    let items = value.as_array()?;
    let first = items.first()?;

    if first.as_array().is_some_and(|inner| {
        inner.first().is_some_and(Value::is_number)
    }) {
        // `items` is already a list of positions.
        let ring: Vec<(f64, f64)> = items.iter().filter_map(decode_position).collect();
        if ring.len() < 2 {
            return None;
        }
        return Some(ring);
    }

    decode_first_ring(first)
}

/// Encode the current overlays into a document, in iteration order.
pub fn encode_document<'a, I>(overlays: I) -> FeatureCollection
where
    I: IntoIterator<Item = (&'a Shape, &'a AnnotationRecord)>,
{
    let features = overlays
        .into_iter()
        .map(|(shape, record)| encode_feature(shape, record))
        .collect();

    FeatureCollection {
        kind: "FeatureCollection".to_string(),
        features,
    }
}

/// Encode one overlay as a GeoJSON feature.
fn encode_feature(shape: &Shape, record: &AnnotationRecord) -> Feature {
    let geometry = match shape {
        Shape::Point { x, y } => Geometry {
            kind: "Point".to_string(),
            coordinates: serde_json::json!([x, y]),
        },
        Shape::Area { ring } => {
            let positions: Vec<[f64; 2]> = ring.iter().map(|&(x, y)| [x, y]).collect();
            Geometry {
                kind: "Polygon".to_string(),
                coordinates: serde_json::json!([positions]),
            }
        }
    };

    // Record invariant: icon is Some iff the overlay is a point, so areas
    // never get an icon key here.
    debug_assert_eq!(
        record.icon.is_some(),
        record.kind == OverlayKind::Point,
        "record icon/kind invariant violated"
    );

    Feature {
        kind: "Feature".to_string(),
        geometry,
        properties: FeatureProperties {
            title: record.title.clone(),
            color: record.color.clone(),
            category: record.category.as_str().to_string(),
            icon: record.icon.map(|icon| icon.as_str().to_string()),
        },
    }
}

/// Serialize a document with pretty printing, matching the original export
/// formatting of the persisted files.
pub fn to_pretty_bytes(document: &FeatureCollection) -> Result<Vec<u8>, FormatError> {
    let json = serde_json::to_string_pretty(document)?;
    Ok(json.into_bytes())
}
