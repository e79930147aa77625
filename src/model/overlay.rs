//! Overlay shapes and their annotation records.

use crate::constants::ACCENT_COLOR;
use crate::model::{Category, Icon};

/// Unique identifier for an overlay, allocated by the overlay store.
///
/// This is the stable handle the edit session and the geometry surface use
/// to refer to an overlay; the annotation record is always looked up through
/// it rather than being attached to a surface object.
pub type OverlayId = u32;

/// Default title for a newly created point overlay.
pub const DEFAULT_POINT_TITLE: &str = "New Marker";

/// Default title for a newly created area overlay.
pub const DEFAULT_AREA_TITLE: &str = "New Area";

/// The two kinds of overlay the map distinguishes.
///
/// Derived from the underlying geometry when an overlay is drawn or loaded,
/// and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// A single marker at one coordinate.
    Point,
    /// A filled region (polygon ring).
    Area,
}

impl OverlayKind {
    /// Default title for overlays of this kind.
    pub fn default_title(&self) -> &'static str {
        match self {
            OverlayKind::Point => DEFAULT_POINT_TITLE,
            OverlayKind::Area => DEFAULT_AREA_TITLE,
        }
    }
}

/// Geometry of an overlay, in image pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Single point marker.
    Point {
        x: f64,
        y: f64,
    },
    /// Filled region defined by a closed exterior ring.
    Area {
        ring: Vec<(f64, f64)>,
    },
}

impl Shape {
    /// The overlay kind this geometry produces.
    pub fn kind(&self) -> OverlayKind {
        match self {
            Shape::Point { .. } => OverlayKind::Point,
            Shape::Area { .. } => OverlayKind::Area,
        }
    }
}

/// Annotation metadata attached to exactly one overlay shape.
///
/// Invariant: `icon` is `Some` iff `kind` is [`OverlayKind::Point`]. Every
/// constructor and the editor commit path maintain this, so serializers can
/// rely on it when deciding whether to emit an `icon` key.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationRecord {
    /// Display label; never empty after creation, load or commit.
    pub title: String,
    /// CSS hex color used for stroke and fill.
    pub color: String,
    /// Toggle group membership.
    pub category: Category,
    /// Marker icon; present only for point overlays.
    pub icon: Option<Icon>,
    /// Overlay kind, fixed at creation.
    pub kind: OverlayKind,
}

impl AnnotationRecord {
    /// Create the default record for a freshly drawn overlay of `kind`:
    /// kind-based title, accent color, neutral category, pin icon for points.
    pub fn new_default(kind: OverlayKind) -> Self {
        Self {
            title: kind.default_title().to_string(),
            color: ACCENT_COLOR.to_string(),
            category: Category::default(),
            icon: match kind {
                OverlayKind::Point => Some(Icon::default()),
                OverlayKind::Area => None,
            },
            kind,
        }
    }

    /// Build a record from optional persisted property values, applying the
    /// defaulting rules: missing/blank title falls back to the kind default,
    /// missing color to the accent color, category is normalized, unknown or
    /// missing icons become [`Icon::Pin`] for points and are dropped for areas.
    pub fn from_properties(
        kind: OverlayKind,
        title: Option<&str>,
        color: Option<&str>,
        category: Option<&str>,
        icon: Option<&str>,
    ) -> Self {
        Self {
            title: normalize_title(kind, title.unwrap_or("")),
            color: match color {
                Some(c) if !c.is_empty() => c.to_string(),
                _ => ACCENT_COLOR.to_string(),
            },
            category: Category::normalize(category.unwrap_or("")),
            icon: match kind {
                OverlayKind::Point => {
                    Some(icon.and_then(Icon::from_str).unwrap_or_default())
                }
                OverlayKind::Area => None,
            },
            kind,
        }
    }
}

/// Normalize a title: trim surrounding whitespace, and fall back to the
/// kind-based default when nothing remains.
pub fn normalize_title(kind: OverlayKind, raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        kind.default_title().to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_for_point() {
        let record = AnnotationRecord::new_default(OverlayKind::Point);
        assert_eq!(record.title, "New Marker");
        assert_eq!(record.color, ACCENT_COLOR);
        assert_eq!(record.category, Category::Neutral);
        assert_eq!(record.icon, Some(Icon::Pin));
    }

    #[test]
    fn default_record_for_area_has_no_icon() {
        let record = AnnotationRecord::new_default(OverlayKind::Area);
        assert_eq!(record.title, "New Area");
        assert_eq!(record.icon, None);
    }

    #[test]
    fn from_properties_defaults_missing_fields() {
        let record =
            AnnotationRecord::from_properties(OverlayKind::Point, None, None, None, None);
        assert_eq!(record.title, "New Marker");
        assert_eq!(record.color, ACCENT_COLOR);
        assert_eq!(record.category, Category::Neutral);
        assert_eq!(record.icon, Some(Icon::Pin));
    }

    #[test]
    fn from_properties_drops_icon_for_areas() {
        let record = AnnotationRecord::from_properties(
            OverlayKind::Area,
            Some("Elwynn Forest"),
            Some("#11aa33"),
            Some("alliance"),
            Some("city"),
        );
        assert_eq!(record.icon, None);
        assert_eq!(record.category, Category::Alliance);
    }

    #[test]
    fn from_properties_normalizes_unknown_values() {
        let record = AnnotationRecord::from_properties(
            OverlayKind::Point,
            Some("   "),
            Some(""),
            Some("scourge"),
            Some("castle"),
        );
        assert_eq!(record.title, "New Marker");
        assert_eq!(record.color, ACCENT_COLOR);
        assert_eq!(record.category, Category::Neutral);
        assert_eq!(record.icon, Some(Icon::Pin));
    }

    #[test]
    fn title_normalization_trims() {
        assert_eq!(
            normalize_title(OverlayKind::Area, "  Crossroads  "),
            "Crossroads"
        );
        assert_eq!(normalize_title(OverlayKind::Area, " "), "New Area");
    }

    #[test]
    fn shape_kind_matches_variant() {
        assert_eq!(Shape::Point { x: 1.0, y: 2.0 }.kind(), OverlayKind::Point);
        let ring = vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 0.0)];
        assert_eq!(Shape::Area { ring }.kind(), OverlayKind::Area);
    }
}
