//! Modal dialogs: the success modal and the classification modal
//!
//! Each modal is a [`ModalController`] with a single transition function,
//! [`ModalController::apply`]. The close button, a click on the overlay and
//! the Escape key all produce the same [`ModalTransition::Close`].

use faunara_core::{format_score, AnimalSummary, ContributionRecord};

use crate::preview::ImagePreview;
use crate::results::id_label;

pub const SUCCESS_TITLE: &str = "Animal Added to FAUNARA";
pub const CLASSIFICATION_TITLE: &str = "Animal Classification Result";

pub const SUCCESS_NO_IMAGE: &str = "No image uploaded";
pub const CLASSIFICATION_NO_IMAGE: &str = "No image available";

/// Shown in the classification modal when the score is below the configured
/// threshold
pub const SAVE_HINT: &str =
    "💡 Tip: You can add this animal permanently from the Improve Faunara panel.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Success,
    Classification,
}

/// What asked for a modal to close
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseButton,
    Overlay,
    Escape,
}

#[derive(Debug, Clone)]
pub enum ModalTransition {
    /// Render `body` and show the modal, even if it is already open
    Open(ModalBody),
    Close(DismissTrigger),
}

/// Image area at the top of a modal body
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewSlot {
    Image(ImagePreview),
    Placeholder(&'static str),
}

impl PreviewSlot {
    fn from_preview(preview: Option<ImagePreview>, placeholder: &'static str) -> Self {
        match preview {
            Some(preview) => PreviewSlot::Image(preview),
            None => PreviewSlot::Placeholder(placeholder),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalField {
    pub label: &'static str,
    pub value: String,
}

/// Fixed-shape modal content: preview, labelled fields, optional hint
#[derive(Debug, Clone, PartialEq)]
pub struct ModalBody {
    pub title: &'static str,
    pub preview: PreviewSlot,
    pub fields: Vec<ModalField>,
    pub hint: Option<&'static str>,
}

impl ModalBody {
    fn field(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.fields.push(ModalField {
            label,
            value: value.into(),
        });
        self
    }

    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

/// Body of the success modal, built from the submitted snapshot and the
/// server-assigned id
pub fn success_body(
    record: &ContributionRecord,
    id: Option<i64>,
    preview: Option<ImagePreview>,
) -> ModalBody {
    let habitat = non_blank(&record.habitat).unwrap_or("Not specified");
    let facts = non_blank(&record.facts).unwrap_or("No facts provided");
    let attributes = record
        .attributes
        .display_pairs()
        .unwrap_or_else(|| "None".to_string());

    ModalBody {
        title: SUCCESS_TITLE,
        preview: PreviewSlot::from_preview(preview, SUCCESS_NO_IMAGE),
        fields: Vec::new(),
        hint: None,
    }
    .field("Name", record.name.clone())
    .field("ID", id_label(id))
    .field("Habitat", habitat)
    .field("Facts", facts)
    .field("Attributes", attributes)
}

/// Body of the classification modal.
///
/// The save hint appears only when `hint_below` is set and the score is
/// below it.
pub fn classification_body(
    animal: &AnimalSummary,
    score: Option<f64>,
    preview: Option<ImagePreview>,
    hint_below: Option<f64>,
) -> ModalBody {
    let offer_save = match (hint_below, score) {
        (Some(threshold), Some(score)) => score < threshold,
        _ => false,
    };

    ModalBody {
        title: CLASSIFICATION_TITLE,
        preview: PreviewSlot::from_preview(preview, CLASSIFICATION_NO_IMAGE),
        fields: Vec::new(),
        hint: offer_save.then_some(SAVE_HINT),
    }
    .field("Animal Name", animal.display_name())
    .field("Similarity Score", format_score(score))
    .field("Habitat", animal.display_habitat())
    .field("Facts", animal.display_facts())
    .field("Attributes", animal.display_attributes())
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(value)
}

/// Open/closed state and current body of one modal
#[derive(Debug, Clone)]
pub struct ModalController {
    kind: ModalKind,
    open: bool,
    body: Option<ModalBody>,
}

impl ModalController {
    pub fn new(kind: ModalKind) -> Self {
        Self {
            kind,
            open: false,
            body: None,
        }
    }

    /// The only state transition. Returns whether visibility changed.
    ///
    /// Opening always re-renders the body. Closing a closed modal is a no-op.
    pub fn apply(&mut self, transition: ModalTransition) -> bool {
        let was_open = self.open;
        match transition {
            ModalTransition::Open(body) => {
                self.body = Some(body);
                self.open = true;
            }
            ModalTransition::Close(trigger) => {
                if self.open {
                    tracing::debug!("Closing {:?} modal via {:?}", self.kind, trigger);
                }
                self.open = false;
            }
        }
        was_open != self.open
    }

    pub fn open(&mut self, body: ModalBody) {
        self.apply(ModalTransition::Open(body));
    }

    pub fn close(&mut self, trigger: DismissTrigger) -> bool {
        self.apply(ModalTransition::Close(trigger))
    }

    pub fn kind(&self) -> ModalKind {
        self.kind
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Body of the open modal
    pub fn body(&self) -> Option<&ModalBody> {
        if self.open {
            self.body.as_ref()
        } else {
            None
        }
    }
}
