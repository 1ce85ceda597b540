//! Show/hide state of the improve form's attribute fields

pub const LABEL_COLLAPSED: &str = "Click to select attributes";
pub const LABEL_EXPANDED: &str = "Hide attributes";
pub const ARROW_COLLAPSED: &str = "▼";
pub const ARROW_EXPANDED: &str = "▲";

/// One visibility flag; label and arrow are derived from it so they can
/// never disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributesToggle {
    visible: bool,
}

impl AttributesToggle {
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Force the collapsed state
    pub fn reset(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn label(&self) -> &'static str {
        if self.visible {
            LABEL_EXPANDED
        } else {
            LABEL_COLLAPSED
        }
    }

    pub fn arrow(&self) -> &'static str {
        if self.visible {
            ARROW_EXPANDED
        } else {
            ARROW_COLLAPSED
        }
    }
}
