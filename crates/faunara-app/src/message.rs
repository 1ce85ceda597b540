//! Message types for the application (TEA pattern)

use faunara_core::{ClassificationResponse, ContributionReceipt, ContributionRecord, FlowError};

use crate::form::FormId;
use crate::input_key::InputKey;
use crate::modal::{DismissTrigger, ModalKind};
use crate::preview::ImagePreview;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick when no input arrived
    Tick,

    /// Leave the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Focus and Field Editing
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrevious,
    /// Type a character into the focused text field
    InsertChar(char),
    /// Remove the last character of the focused text field
    DeleteChar,
    /// Empty the focused text field, or unset the focused select
    ClearField,
    /// Step the focused select through its options
    CycleOption { forward: bool },

    // ─────────────────────────────────────────────────────────
    // Forms
    // ─────────────────────────────────────────────────────────
    /// Submit one of the three forms
    Submit(FormId),

    /// Show or hide the improve form's attribute fields
    ToggleAttributes,

    // ─────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────
    /// Close one modal through its close button or overlay
    DismissModal {
        modal: ModalKind,
        trigger: DismissTrigger,
    },

    /// Escape: close every open modal
    DismissAll,

    // ─────────────────────────────────────────────────────────
    // Request Completions
    // ─────────────────────────────────────────────────────────
    /// `classify-image` finished
    ImageClassified {
        preview: Option<ImagePreview>,
        outcome: Result<ClassificationResponse, FlowError>,
    },

    /// `classify-attributes` finished
    AttributesClassified {
        outcome: Result<ClassificationResponse, FlowError>,
    },

    /// `improve-faunara` finished. `record` is the snapshot taken when the
    /// form was submitted.
    ContributionSaved {
        record: Box<ContributionRecord>,
        preview: Option<ImagePreview>,
        outcome: Result<ContributionReceipt, FlowError>,
    },
}
