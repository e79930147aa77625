//! Overlay store: the owning collection of shapes and annotation records.
//!
//! The store is the single owner of every overlay. Records are looked up by
//! [`OverlayId`] rather than being attached to surface objects, and all
//! category-group side effects on the geometry surface are driven from here
//! so that the group membership invariant (exactly one group per overlay)
//! has one enforcement point.

use std::collections::HashMap;

use crate::format::{self, FeatureCollection, FormatError};
use crate::model::{AnnotationRecord, Category, OverlayId, Shape};
use crate::surface::GeometrySurface;

/// A drawn or loaded shape plus its annotation record.
#[derive(Debug, Clone)]
pub struct Overlay {
    /// Geometry in image pixel coordinates.
    pub shape: Shape,
    /// Annotation metadata.
    pub record: AnnotationRecord,
}

/// Master collection of overlays, in creation/load order.
#[derive(Debug, Default)]
pub struct OverlayStore {
    next_id: OverlayId,
    order: Vec<OverlayId>,
    overlays: HashMap<OverlayId, Overlay>,
}

impl OverlayStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of overlays in the master collection.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the master collection is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Look up an overlay by id.
    pub fn get(&self, id: OverlayId) -> Option<&Overlay> {
        self.overlays.get(&id)
    }

    /// Look up just the annotation record by id.
    pub fn record(&self, id: OverlayId) -> Option<&AnnotationRecord> {
        self.overlays.get(&id).map(|overlay| &overlay.record)
    }

    /// Mutable access to an annotation record.
    ///
    /// Callers must not change `category` through this handle; category
    /// changes go through [`OverlayStore::set_category`] so the surface
    /// group move happens with them.
    pub fn record_mut(&mut self, id: OverlayId) -> Option<&mut AnnotationRecord> {
        self.overlays.get_mut(&id).map(|overlay| &mut overlay.record)
    }

    /// Overlays in master-collection order.
    pub fn iter(&self) -> impl Iterator<Item = (OverlayId, &Overlay)> {
        self.order
            .iter()
            .filter_map(|&id| self.overlays.get(&id).map(|overlay| (id, overlay)))
    }

    /// Insert a new overlay: assign an id, append to the master collection
    /// and render it into the category group of its record.
    pub fn insert(
        &mut self,
        shape: Shape,
        record: AnnotationRecord,
        surface: &mut dyn GeometrySurface,
    ) -> OverlayId {
        let id = self.next_id;
        self.next_id += 1;

        surface.add_overlay(id, &shape, &record);
        self.order.push(id);
        self.overlays.insert(id, Overlay { shape, record });
        id
    }

    /// Delete an overlay from the master collection and its group.
    pub fn remove(&mut self, id: OverlayId, surface: &mut dyn GeometrySurface) -> Option<Overlay> {
        let overlay = self.overlays.remove(&id)?;
        self.order.retain(|&member| member != id);
        surface.remove_overlay(id, overlay.record.category);
        Some(overlay)
    }

    /// Change an overlay's category. This is a move between layer groups,
    /// never a copy: the overlay leaves its old group as it enters the new
    /// one, and the record's category field stays in sync with the group.
    pub fn set_category(
        &mut self,
        id: OverlayId,
        category: Category,
        surface: &mut dyn GeometrySurface,
    ) {
        let Some(overlay) = self.overlays.get_mut(&id) else {
            return;
        };
        let previous = overlay.record.category;
        if previous == category {
            return;
        }
        overlay.record.category = category;
        surface.move_overlay(id, previous, category);
    }

    /// Load a persisted overlay document body into the store.
    ///
    /// A missing, empty or malformed body is the "no saved overlays yet"
    /// state and loads nothing; this never fails. Features are inserted in
    /// document order.
    pub fn load_document(&mut self, body: &str, surface: &mut dyn GeometrySurface) {
        for (shape, record) in format::parse_or_empty(body) {
            self.insert(shape, record, surface);
        }
    }

    /// Serialize the current overlays as a document, in master-collection
    /// order. Pure with respect to the store; no persistence happens here.
    pub fn export_document(&self) -> FeatureCollection {
        format::encode_document(
            self.iter()
                .map(|(_, overlay)| (&overlay.shape, &overlay.record)),
        )
    }

    /// Serialize the current overlays to pretty-printed JSON bytes.
    pub fn export_bytes(&self) -> Result<Vec<u8>, FormatError> {
        let bytes = format::to_pretty_bytes(&self.export_document())?;
        log::info!("Exported {} overlays", self.len());
        Ok(bytes)
    }

    /// Empty the master collection and every layer group. In-memory only;
    /// persisted documents are unaffected.
    pub fn clear(&mut self, surface: &mut dyn GeometrySurface) {
        let count = self.len();
        self.order.clear();
        self.overlays.clear();
        surface.clear();
        log::info!("Cleared {count} overlays");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OverlayKind;
    use crate::surface::MockSurface;
    use serde_json::json;

    fn point(x: f64, y: f64) -> Shape {
        Shape::Point { x, y }
    }

    #[test]
    fn insert_assigns_ids_in_order() {
        let mut store = OverlayStore::new();
        let mut surface = MockSurface::new();

        let a = store.insert(
            point(1.0, 1.0),
            AnnotationRecord::new_default(OverlayKind::Point),
            &mut surface,
        );
        let b = store.insert(
            point(2.0, 2.0),
            AnnotationRecord::new_default(OverlayKind::Point),
            &mut surface,
        );

        assert_ne!(a, b);
        let order: Vec<OverlayId> = store.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn load_sorts_overlays_into_category_groups() {
        let body = json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {"type": "Point", "coordinates": [5, 5]},
                    "properties": {
                        "title": "Stormwind",
                        "color": "#2ea8ff",
                        "category": "alliance",
                        "icon": "city"
                    }
                },
                {
                    "type": "Feature",
                    "geometry": {"type": "Point", "coordinates": [9, 9]},
                    "properties": {"title": "Orgrimmar", "category": "horde"}
                }
            ]
        })
        .to_string();

        let mut store = OverlayStore::new();
        let mut surface = MockSurface::new();
        store.load_document(&body, &mut surface);

        assert_eq!(store.len(), 2);
        assert_eq!(surface.group(Category::Alliance).len(), 1);
        assert_eq!(surface.group(Category::Horde).len(), 1);
        assert!(surface.group(Category::Neutral).is_empty());

        let stormwind = surface.group(Category::Alliance)[0];
        assert_eq!(surface.label(stormwind), Some("Stormwind"));
    }

    #[test]
    fn load_of_garbage_is_a_no_op() {
        let mut store = OverlayStore::new();
        let mut surface = MockSurface::new();

        store.load_document("", &mut surface);
        store.load_document("]]]", &mut surface);

        assert!(store.is_empty());
        assert_eq!(surface.overlay_count(), 0);
    }

    #[test]
    fn set_category_moves_between_groups_exactly_once() {
        let mut store = OverlayStore::new();
        let mut surface = MockSurface::new();
        let id = store.insert(
            point(1.0, 1.0),
            AnnotationRecord::new_default(OverlayKind::Point),
            &mut surface,
        );
        assert_eq!(surface.group(Category::Neutral), &[id]);

        store.set_category(id, Category::Events, &mut surface);

        assert_eq!(store.record(id).unwrap().category, Category::Events);
        assert_eq!(surface.group(Category::Events), &[id]);
        assert!(surface.group(Category::Neutral).is_empty());
        assert_eq!(surface.membership_count(id), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_deletes_from_group_and_master() {
        let mut store = OverlayStore::new();
        let mut surface = MockSurface::new();
        let id = store.insert(
            point(1.0, 1.0),
            AnnotationRecord::new_default(OverlayKind::Point),
            &mut surface,
        );

        let removed = store.remove(id, &mut surface);
        assert!(removed.is_some());
        assert!(store.is_empty());
        assert_eq!(surface.overlay_count(), 0);
        assert!(store.remove(id, &mut surface).is_none());
    }

    #[test]
    fn clear_empties_everything() {
        let mut store = OverlayStore::new();
        let mut surface = MockSurface::new();
        for i in 0..3 {
            store.insert(
                point(i as f64, 0.0),
                AnnotationRecord::new_default(OverlayKind::Point),
                &mut surface,
            );
        }

        store.clear(&mut surface);

        assert!(store.is_empty());
        assert_eq!(surface.overlay_count(), 0);
    }

    #[test]
    fn export_round_trips_loaded_document() {
        let body = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [5, 5]},
                "properties": {
                    "title": "Stormwind",
                    "color": "#2ea8ff",
                    "category": "alliance",
                    "icon": "city"
                }
            }]
        })
        .to_string();

        let mut store = OverlayStore::new();
        let mut surface = MockSurface::new();
        store.load_document(&body, &mut surface);

        let value = serde_json::to_value(store.export_document()).unwrap();
        assert_eq!(value["features"].as_array().unwrap().len(), 1);

        let feature = &value["features"][0];
        assert_eq!(feature["properties"]["title"], "Stormwind");
        assert_eq!(feature["properties"]["color"], "#2ea8ff");
        assert_eq!(feature["properties"]["category"], "alliance");
        assert_eq!(feature["properties"]["icon"], "city");
        assert_eq!(feature["geometry"]["coordinates"], json!([5.0, 5.0]));
    }

    #[test]
    fn export_order_is_master_collection_order() {
        let mut store = OverlayStore::new();
        let mut surface = MockSurface::new();

        let mut events = AnnotationRecord::new_default(OverlayKind::Point);
        events.title = "Darkmoon Faire".to_string();
        let id = store.insert(point(1.0, 1.0), events, &mut surface);
        store.set_category(id, Category::Events, &mut surface);

        let mut second = AnnotationRecord::new_default(OverlayKind::Point);
        second.title = "Tarren Mill".to_string();
        store.insert(point(2.0, 2.0), second, &mut surface);

        let value = serde_json::to_value(store.export_document()).unwrap();
        let titles: Vec<&str> = value["features"]
            .as_array()
            .unwrap()
            .iter()
            .map(|feature| feature["properties"]["title"].as_str().unwrap())
            .collect();

        // Create order, not category order.
        assert_eq!(titles, vec!["Darkmoon Faire", "Tarren Mill"]);
    }
}
