//! Global constants for the warmap overlay core.

/// Height of the background map image in pixels. The pixel coordinate
/// space of every overlay is defined by this extent; do not change it
/// after overlays have been placed.
pub const IMAGE_HEIGHT: f64 = 1000.0;

/// Width of the background map image in pixels.
pub const IMAGE_WIDTH: f64 = 1800.0;

/// Resource path of the background map image.
pub const IMAGE_URL: &str = "/assets/worldmap.jpg";

/// Resource path the persisted overlay document is fetched from.
pub const DATA_URL: &str = "/data/overlays.geojson";

/// Filename used when exporting the overlay document.
pub const EXPORT_FILENAME: &str = "overlays.geojson";

/// Default accent color applied to newly drawn overlays.
pub const ACCENT_COLOR: &str = "#2ea8ff";

/// Stroke weight for area overlays.
pub const AREA_STROKE_WEIGHT: f32 = 3.0;

/// Stroke opacity for area overlays.
pub const AREA_STROKE_OPACITY: f32 = 0.9;

/// Fill opacity for area overlays.
pub const AREA_FILL_OPACITY: f32 = 0.25;

/// Marker radius for point overlays, in screen pixels.
pub const POINT_RADIUS: f32 = 7.0;

/// Fill opacity for point overlays.
pub const POINT_FILL_OPACITY: f32 = 0.9;
