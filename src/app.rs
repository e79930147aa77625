//! Map application core: event dispatch over gate, store and session.
//!
//! `MapApp` owns the access gate, the overlay store and the edit session,
//! and turns surface/page events into state changes plus [`Effect`]s for
//! the embedding adapter. All mutations funnel through [`MapApp::handle`],
//! which runs on the single UI control flow.

use crate::constants::EXPORT_FILENAME;
use crate::gate::AccessGate;
use crate::message::{Effect, MapEvent};
use crate::model::AnnotationRecord;
use crate::session::{EditSession, EditorFields};
use crate::store::OverlayStore;
use crate::surface::GeometrySurface;

/// Rejection notice shown when export or clear is attempted without the
/// gate open.
const ADMIN_ONLY_NOTICE: &str = "Admin only. Use ?admin=1";

/// The overlay editor application core.
#[derive(Debug)]
pub struct MapApp {
    gate: AccessGate,
    store: OverlayStore,
    session: EditSession,
}

impl MapApp {
    /// Create an application with the given access gate (evaluated once at
    /// startup) and an empty overlay set.
    pub fn new(gate: AccessGate) -> Self {
        Self {
            gate,
            store: OverlayStore::new(),
            session: EditSession::new(),
        }
    }

    /// The access gate.
    pub fn gate(&self) -> AccessGate {
        self.gate
    }

    /// The overlay store.
    pub fn store(&self) -> &OverlayStore {
        &self.store
    }

    /// The edit session.
    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Load the persisted overlay document fetched at startup. The fetch
    /// itself is the adapter's job; pass the response body here, or an
    /// empty string for a missing/failed response. Never fails.
    pub fn load_overlays(&mut self, body: &str, surface: &mut dyn GeometrySurface) {
        self.store.load_document(body, surface);
    }

    /// Process one interaction event and return the effects the adapter
    /// must carry out.
    pub fn handle(&mut self, event: MapEvent, surface: &mut dyn GeometrySurface) -> Vec<Effect> {
        match event {
            MapEvent::DrawCreated(shape) => {
                if !self.gate.is_open() {
                    // Draw tools are not exposed with the gate closed; a
                    // stray event is dropped rather than honored.
                    log::warn!("Ignoring draw event with access gate closed");
                    return Vec::new();
                }
                let record = AnnotationRecord::new_default(shape.kind());
                let id = self.store.insert(shape, record, surface);
                let Some(record) = self.store.record(id) else {
                    return Vec::new();
                };
                self.session.open(id, record);
                vec![Effect::OpenEditor(id, EditorFields::from_record(record))]
            }

            MapEvent::ShapeClicked(id) => {
                let Some(record) = self.store.record(id) else {
                    return Vec::new();
                };
                if self.gate.is_open() {
                    self.session.open(id, record);
                    vec![Effect::OpenEditor(id, EditorFields::from_record(record))]
                } else {
                    vec![Effect::ShowTitle(id, record.title.clone())]
                }
            }

            MapEvent::ShapeDeleted(id) => {
                self.store.remove(id, surface);
                if self.session.editing_id() == Some(id) {
                    self.session.dismiss();
                    return vec![Effect::CloseEditor];
                }
                Vec::new()
            }

            MapEvent::EditorChanged(fields) => {
                self.session.update_fields(fields);
                Vec::new()
            }

            MapEvent::EditorSaved => {
                match self.session.commit(&mut self.store, surface) {
                    Some(_) => vec![Effect::CloseEditor],
                    None => Vec::new(),
                }
            }

            MapEvent::EditorDismissed => {
                if !self.session.is_editing() {
                    return Vec::new();
                }
                self.session.dismiss();
                vec![Effect::CloseEditor]
            }

            MapEvent::ExportRequested => {
                if !self.gate.is_open() {
                    return vec![Effect::Notice(ADMIN_ONLY_NOTICE.to_string())];
                }
                match self.store.export_bytes() {
                    Ok(bytes) => vec![Effect::SaveFile {
                        filename: EXPORT_FILENAME.to_string(),
                        bytes,
                    }],
                    Err(err) => {
                        log::error!("Export failed: {err}");
                        vec![Effect::Notice(format!("Export failed: {err}"))]
                    }
                }
            }

            MapEvent::ClearRequested { confirmed } => {
                if !self.gate.is_open() {
                    return vec![Effect::Notice(ADMIN_ONLY_NOTICE.to_string())];
                }
                if !confirmed {
                    return Vec::new();
                }
                let was_editing = self.session.is_editing();
                self.session.dismiss();
                self.store.clear(surface);
                if was_editing {
                    vec![Effect::CloseEditor]
                } else {
                    Vec::new()
                }
            }
        }
    }
}
