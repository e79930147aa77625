//! Edit session state machine.
//!
//! The session tracks whether an editor surface is open and holds the
//! unsaved field values while it is. The annotation record itself is only
//! touched on commit; dismissing the editor discards the pending values.
//!
//! The session is UI-agnostic: the embedding adapter renders
//! [`EditorFields`] however it likes (popup, sidebar form) and reports the
//! user's current values back before a save.

use crate::constants::ACCENT_COLOR;
use crate::model::{AnnotationRecord, Category, Icon, OverlayId, OverlayKind, normalize_title};
use crate::store::OverlayStore;
use crate::surface::GeometrySurface;

/// Unsaved editor field values, as raw strings straight from the editor
/// widgets. Normalization happens once, at commit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorFields {
    /// Title input value.
    pub title: String,
    /// Color input value.
    pub color: String,
    /// Category select value.
    pub category: String,
    /// Icon select value; ignored for area overlays.
    pub icon: String,
}

impl EditorFields {
    /// Seed editor fields from the current record values.
    pub fn from_record(record: &AnnotationRecord) -> Self {
        Self {
            title: record.title.clone(),
            color: record.color.clone(),
            category: record.category.as_str().to_string(),
            icon: record
                .icon
                .map(|icon| icon.as_str().to_string())
                .unwrap_or_default(),
        }
    }
}

/// Current session state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No editor open; the initial and resting state.
    #[default]
    Viewing,
    /// Editor open for one overlay, holding unsaved field values.
    Editing {
        /// The overlay being edited.
        id: OverlayId,
        /// Pending field values.
        fields: EditorFields,
    },
}

/// Long-lived edit session; one per page lifetime.
#[derive(Debug, Default)]
pub struct EditSession {
    state: SessionState,
}

impl EditSession {
    /// Create a session in the `Viewing` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether an editor is currently open.
    pub fn is_editing(&self) -> bool {
        matches!(self.state, SessionState::Editing { .. })
    }

    /// The overlay currently being edited, if any.
    pub fn editing_id(&self) -> Option<OverlayId> {
        match &self.state {
            SessionState::Viewing => None,
            SessionState::Editing { id, .. } => Some(*id),
        }
    }

    /// Open the editor for an overlay, seeding the fields from its record.
    /// Opening while already editing replaces the previous editor, which
    /// discards its unsaved values.
    pub fn open(&mut self, id: OverlayId, record: &AnnotationRecord) {
        self.state = SessionState::Editing {
            id,
            fields: EditorFields::from_record(record),
        };
    }

    /// Replace the pending field values while the editor is open. Ignored
    /// in the `Viewing` state.
    pub fn update_fields(&mut self, fields: EditorFields) {
        if let SessionState::Editing { fields: pending, .. } = &mut self.state {
            *pending = fields;
        }
    }

    /// Close the editor without saving. The record is untouched.
    pub fn dismiss(&mut self) {
        self.state = SessionState::Viewing;
    }

    /// Commit the pending field values to the overlay's record and return
    /// to `Viewing`.
    ///
    /// The same defaulting rules as creation apply: a blank title falls back
    /// to the kind default, an unrecognized category normalizes to neutral,
    /// and icons only apply to point overlays. The commit also performs the
    /// category group move, restyles the overlay and refreshes its label.
    ///
    /// Returns the edited id, or `None` when nothing was being edited or
    /// the overlay has since been deleted.
    pub fn commit(
        &mut self,
        store: &mut OverlayStore,
        surface: &mut dyn GeometrySurface,
    ) -> Option<OverlayId> {
        let state = std::mem::take(&mut self.state);
        let SessionState::Editing { id, fields } = state else {
            return None;
        };

        let kind = store.record(id)?.kind;
        let category = Category::normalize(fields.category.trim());

        if let Some(record) = store.record_mut(id) {
            record.title = normalize_title(kind, &fields.title);
            record.color = normalize_color(&fields.color);
            record.icon = match kind {
                OverlayKind::Point => {
                    Some(Icon::from_str(fields.icon.trim()).unwrap_or_default())
                }
                OverlayKind::Area => None,
            };
        }

        store.set_category(id, category, surface);

        if let Some(record) = store.record(id) {
            surface.restyle(id, record);
            surface.set_label(id, &record.title);
        }

        log::debug!("Committed edit for overlay {id}");
        Some(id)
    }
}

/// Blank color inputs fall back to the accent default.
fn normalize_color(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        ACCENT_COLOR.to_string()
    } else {
        trimmed.to_string()
    }
}
