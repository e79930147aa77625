//! Geometry surface capability interface.
//!
//! The interactive map widget (pan/zoom, image overlay, draw tools, layer
//! toggles) is an external collaborator. The core talks to it through the
//! narrow [`GeometrySurface`] trait: the store and session tell the surface
//! which overlay lives in which category group and how it is styled, and the
//! surface reports interaction back as [`crate::message::MapEvent`]s.
//!
//! [`MockSurface`] is the in-memory implementation used by the crate's own
//! tests and useful to embedders as a headless stand-in.

use std::collections::HashMap;

use crate::model::{AnnotationRecord, Category, OverlayId, Shape};

/// Capabilities the core requires from the map widget.
///
/// All methods are infallible: the surface renders best-effort and the core
/// never depends on rendering having succeeded.
pub trait GeometrySurface {
    /// Render a new overlay inside the layer group of `record.category`.
    fn add_overlay(&mut self, id: OverlayId, shape: &Shape, record: &AnnotationRecord);

    /// Remove an overlay from the layer group of `category`.
    fn remove_overlay(&mut self, id: OverlayId, category: Category);

    /// Move an overlay between layer groups. Must leave the overlay in
    /// exactly one group.
    fn move_overlay(&mut self, id: OverlayId, from: Category, to: Category);

    /// Re-apply color and icon styling from the record.
    fn restyle(&mut self, id: OverlayId, record: &AnnotationRecord);

    /// Refresh the display label shown for the overlay.
    fn set_label(&mut self, id: OverlayId, title: &str);

    /// Remove every overlay from every layer group.
    fn clear(&mut self);
}

/// Headless geometry surface that records group membership, labels and
/// styles without rendering anything.
#[derive(Debug, Default)]
pub struct MockSurface {
    groups: HashMap<Category, Vec<OverlayId>>,
    labels: HashMap<OverlayId, String>,
    colors: HashMap<OverlayId, String>,
}

impl MockSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids currently in the given category group, in insertion order.
    pub fn group(&self, category: Category) -> &[OverlayId] {
        self.groups.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Total number of overlays across all groups.
    pub fn overlay_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Number of groups that contain the given id.
    pub fn membership_count(&self, id: OverlayId) -> usize {
        self.groups
            .values()
            .map(|ids| ids.iter().filter(|&&member| member == id).count())
            .sum()
    }

    /// The label last set for an overlay.
    pub fn label(&self, id: OverlayId) -> Option<&str> {
        self.labels.get(&id).map(String::as_str)
    }

    /// The color last styled onto an overlay.
    pub fn color(&self, id: OverlayId) -> Option<&str> {
        self.colors.get(&id).map(String::as_str)
    }
}

impl GeometrySurface for MockSurface {
    fn add_overlay(&mut self, id: OverlayId, _shape: &Shape, record: &AnnotationRecord) {
        self.groups.entry(record.category).or_default().push(id);
        self.labels.insert(id, record.title.clone());
        self.colors.insert(id, record.color.clone());
    }

    fn remove_overlay(&mut self, id: OverlayId, category: Category) {
        if let Some(ids) = self.groups.get_mut(&category) {
            ids.retain(|&member| member != id);
        }
        self.labels.remove(&id);
        self.colors.remove(&id);
    }

    fn move_overlay(&mut self, id: OverlayId, from: Category, to: Category) {
        if let Some(ids) = self.groups.get_mut(&from) {
            ids.retain(|&member| member != id);
        }
        self.groups.entry(to).or_default().push(id);
    }

    fn restyle(&mut self, id: OverlayId, record: &AnnotationRecord) {
        self.colors.insert(id, record.color.clone());
    }

    fn set_label(&mut self, id: OverlayId, title: &str) {
        self.labels.insert(id, title.to_string());
    }

    fn clear(&mut self) {
        self.groups.clear();
        self.labels.clear();
        self.colors.clear();
    }
}
