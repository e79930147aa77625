//! Data models for the warmap overlay core.

mod category;
mod icon;
mod overlay;

pub use category::Category;
pub use icon::Icon;
pub use overlay::{
    AnnotationRecord, DEFAULT_AREA_TITLE, DEFAULT_POINT_TITLE, OverlayId, OverlayKind, Shape,
    normalize_title,
};
