//! Result regions under each form and the panels written into them

use faunara_core::{format_score, ClassificationResponse, ContributionRecord, ErrorClass, FlowError};

/// The three output regions. A region that does not exist cannot be named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionId {
    ImageResult,
    AttributesResult,
    ImproveResult,
}

/// Visual tone of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Working,
    Success,
    Warning,
    Error,
}

/// One line of a panel, optionally led by a bold label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLine {
    pub label: Option<&'static str>,
    pub text: String,
}

/// Structured content of a result region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanel {
    pub tone: Tone,
    pub title: String,
    pub lines: Vec<PanelLine>,
}

impl ResultPanel {
    pub fn new(tone: Tone, title: impl Into<String>) -> Self {
        Self {
            tone,
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// Append a plain line
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.lines.push(PanelLine {
            label: None,
            text: text.into(),
        });
        self
    }

    /// Append a `Label: value` line
    pub fn field(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.lines.push(PanelLine {
            label: Some(label),
            text: value.into(),
        });
        self
    }

    /// Value of the first line with `label`
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|l| l.label == Some(label))
            .map(|l| l.text.as_str())
    }
}

/// Contents of all result regions. `None` means the region is still hidden.
#[derive(Debug, Clone, Default)]
pub struct ResultRegions {
    image: Option<ResultPanel>,
    attributes: Option<ResultPanel>,
    improve: Option<ResultPanel>,
}

impl ResultRegions {
    /// Replace a region's content and make it visible
    pub fn render(&mut self, region: RegionId, panel: ResultPanel) {
        *self.slot_mut(region) = Some(panel);
    }

    pub fn get(&self, region: RegionId) -> Option<&ResultPanel> {
        match region {
            RegionId::ImageResult => self.image.as_ref(),
            RegionId::AttributesResult => self.attributes.as_ref(),
            RegionId::ImproveResult => self.improve.as_ref(),
        }
    }

    pub fn is_visible(&self, region: RegionId) -> bool {
        self.get(region).is_some()
    }

    fn slot_mut(&mut self, region: RegionId) -> &mut Option<ResultPanel> {
        match region {
            RegionId::ImageResult => &mut self.image,
            RegionId::AttributesResult => &mut self.attributes,
            RegionId::ImproveResult => &mut self.improve,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Panels
// ─────────────────────────────────────────────────────────────────

pub fn classifying() -> ResultPanel {
    ResultPanel::new(Tone::Working, "Classifying…")
        .text("Please wait while FAUNARA analyzes your image.")
}

pub fn guessing() -> ResultPanel {
    ResultPanel::new(Tone::Working, "Guessing…")
        .text("FAUNARA is comparing your attributes to its knowledge.")
}

pub fn saving() -> ResultPanel {
    ResultPanel::new(Tone::Working, "Saving…")
        .text("Adding your species to FAUNARA's knowledge base.")
}


pub fn classification_complete(response: &ClassificationResponse) -> ResultPanel {
    let animal = response.animal_or_default();
    ResultPanel::new(Tone::Success, "Classification Complete")
        .field("Animal Name", animal.display_name())
        .field("Similarity Score", format_score(response.match_score))
        .field("Habitat", animal.display_habitat())
        .field("Facts", animal.display_facts())
}

pub fn closest_match(response: &ClassificationResponse) -> ResultPanel {
    let animal = response.animal_or_default();
    ResultPanel::new(Tone::Success, "Closest match")
        .field("Name", animal.display_name())
        .field("Match score", format_score(response.match_score))
        .field("Habitat", animal.display_habitat())
        .field("Facts", animal.display_facts())
}

pub fn no_match() -> ResultPanel {
    ResultPanel::new(Tone::Warning, "No Match Found")
        .text("The uploaded image doesn't match any animal in FAUNARA's database.")
        .text(
            "💡 Tip: Consider adding this animal using the Improve Faunara section to help FAUNARA learn!",
        )
}

pub fn animal_saved(record: &ContributionRecord, id: Option<i64>) -> ResultPanel {
    ResultPanel::new(Tone::Success, "Animal saved")
        .field("Name", record.name.clone())
        .field("ID", id_label(id))
}

pub fn error(message: impl Into<String>) -> ResultPanel {
    ResultPanel::new(Tone::Error, "Error").text(message)
}

/// Panel for a failed submission. Input rejected before any request is a
/// warning, everything else an error.
pub fn failure(err: &FlowError) -> ResultPanel {
    match err.class {
        ErrorClass::Validation => {
            ResultPanel::new(Tone::Warning, "Missing attributes").text(err.message.clone())
        }
        _ => error(err.message.clone()),
    }
}

/// Server-assigned id, or a placeholder when the receipt carried none
pub fn id_label(id: Option<i64>) -> String {
    id.map(|id| id.to_string())
        .unwrap_or_else(|| "Not assigned".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use faunara_core::{AnimalSummary, Error};

    #[test]
    fn test_regions_start_hidden() {
        let regions = ResultRegions::default();
        assert!(!regions.is_visible(RegionId::ImageResult));
        assert!(!regions.is_visible(RegionId::AttributesResult));
        assert!(!regions.is_visible(RegionId::ImproveResult));
    }

    #[test]
    fn test_render_touches_one_region() {
        let mut regions = ResultRegions::default();
        regions.render(RegionId::AttributesResult, guessing());

        assert!(regions.is_visible(RegionId::AttributesResult));
        assert!(!regions.is_visible(RegionId::ImageResult));
        assert!(!regions.is_visible(RegionId::ImproveResult));
    }

    #[test]
    fn test_render_replaces_content() {
        let mut regions = ResultRegions::default();
        regions.render(RegionId::ImageResult, classifying());
        regions.render(RegionId::ImageResult, error("boom"));

        let panel = regions.get(RegionId::ImageResult).unwrap();
        assert_eq!(panel.title, "Error");
        assert_eq!(panel.lines.len(), 1);
        assert_eq!(panel.lines[0].text, "boom");
    }

    #[test]
    fn test_classification_complete_uses_placeholders() {
        let response = ClassificationResponse::default();
        let panel = classification_complete(&response);

        assert_eq!(panel.value_of("Animal Name"), Some("Unknown"));
        assert_eq!(panel.value_of("Similarity Score"), Some("N/A"));
        assert_eq!(panel.value_of("Habitat"), Some("Not available yet"));
        assert_eq!(panel.value_of("Facts"), Some("No facts stored yet."));
    }

    #[test]
    fn test_closest_match_formats_score() {
        let response = ClassificationResponse {
            animal: Some(AnimalSummary {
                name: Some("Barn Owl".to_string()),
                ..Default::default()
            }),
            match_score: Some(0.874),
            ..Default::default()
        };
        let panel = closest_match(&response);

        assert_eq!(panel.title, "Closest match");
        assert_eq!(panel.value_of("Name"), Some("Barn Owl"));
        assert_eq!(panel.value_of("Match score"), Some("87%"));
    }

    #[test]
    fn test_no_match_has_hint() {
        let panel = no_match();
        assert_eq!(panel.tone, Tone::Warning);
        assert!(panel.lines.iter().any(|l| l.text.contains("Improve Faunara")));
    }

    #[test]
    fn test_failure_panel_follows_error_class() {
        let panel = failure(&FlowError::from(Error::MissingAttributes));
        assert_eq!(panel.tone, Tone::Warning);
        assert_eq!(panel.title, "Missing attributes");
        assert_eq!(panel.lines[0].text, "Please fill at least one attribute.");

        let panel = failure(&FlowError::from(Error::transport(502, "<html>")));
        assert_eq!(panel.tone, Tone::Error);
        assert_eq!(panel.title, "Error");
        assert!(panel.lines[0].text.contains("Status: 502"));
    }

    #[test]
    fn test_id_label() {
        assert_eq!(id_label(Some(12)), "12");
        assert_eq!(id_label(None), "Not assigned");
    }
}
