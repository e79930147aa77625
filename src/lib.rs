//! warmap - Faction Overlay Map Core
//!
//! UI-agnostic core of an annotation editor for a fixed-extent image map.
//! Overlays (points and areas) carry faction/category and icon metadata,
//! persist as a GeoJSON `FeatureCollection`, and are edited through a small
//! state machine gated by a client-side admin flag.
//!
//! The interactive map widget itself is an external collaborator reached
//! through the [`surface::GeometrySurface`] trait; this crate owns the data
//! model, the load/edit/export round-trip and the edit session rules.

pub mod app;
pub mod constants;
pub mod format;
pub mod gate;
pub mod message;
pub mod model;
pub mod session;
pub mod store;
pub mod surface;

pub use app::MapApp;
pub use gate::AccessGate;
pub use message::{Effect, MapEvent};
pub use model::{AnnotationRecord, Category, Icon, OverlayId, OverlayKind, Shape};
pub use session::{EditSession, EditorFields, SessionState};
pub use store::{Overlay, OverlayStore};
pub use surface::{GeometrySurface, MockSurface};
