//! Interaction events and resulting effects.
//!
//! The geometry surface delivers discrete interaction events one at a time
//! on a single control flow; [`crate::app::MapApp`] consumes them and
//! answers with effects for the embedding adapter to execute. The core
//! never performs I/O itself.

use crate::model::{OverlayId, Shape};
use crate::session::EditorFields;

/// Events delivered by the geometry surface and the page chrome.
#[derive(Debug, Clone)]
pub enum MapEvent {
    // Draw tools (only exposed by the surface when the gate is open)
    /// A new shape was drawn.
    DrawCreated(Shape),
    /// A shape was deleted via the draw controls.
    ShapeDeleted(OverlayId),

    // Shape interaction
    /// An existing shape was clicked.
    ShapeClicked(OverlayId),

    // Editor surface
    /// The editor's field values changed.
    EditorChanged(EditorFields),
    /// The editor's save affordance was used.
    EditorSaved,
    /// The editor was dismissed without saving.
    EditorDismissed,

    // Page buttons
    /// The export button was clicked.
    ExportRequested,
    /// The clear button was clicked; `confirmed` carries the result of the
    /// user confirmation prompt.
    ClearRequested {
        /// Whether the user confirmed the prompt.
        confirmed: bool,
    },
}

/// Effects the embedding adapter must carry out. Returned from event
/// handling, never executed by the core.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Open the editor surface for an overlay with the given seed values.
    OpenEditor(OverlayId, EditorFields),
    /// Close the editor surface.
    CloseEditor,
    /// Display a read-only title popup for an overlay.
    ShowTitle(OverlayId, String),
    /// Trigger a client-side file save. Fire-and-forget; no completion
    /// acknowledgement exists.
    SaveFile {
        /// Suggested filename.
        filename: String,
        /// Serialized document body.
        bytes: Vec<u8>,
    },
    /// Show a user-facing rejection or status notice.
    Notice(String),
}
