//! Wire types exchanged with the FAUNARA service

use serde::{Deserialize, Serialize};

use crate::attributes::AttributeMap;
use crate::image_file::ImageFile;

pub const NAME_PLACEHOLDER: &str = "Unknown";
pub const HABITAT_PLACEHOLDER: &str = "Not available yet";
pub const FACTS_PLACEHOLDER: &str = "No facts stored yet.";
pub const ATTRIBUTES_PLACEHOLDER: &str = "Not specified";

/// An animal record as returned by the service. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalSummary {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub habitat: Option<String>,
    #[serde(default)]
    pub facts: Option<String>,
    #[serde(default)]
    pub attributes: Option<AttributeMap>,
}

impl AnimalSummary {
    pub fn display_name(&self) -> &str {
        non_empty(self.name.as_deref()).unwrap_or(NAME_PLACEHOLDER)
    }

    pub fn display_habitat(&self) -> &str {
        non_empty(self.habitat.as_deref()).unwrap_or(HABITAT_PLACEHOLDER)
    }

    pub fn display_facts(&self) -> &str {
        non_empty(self.facts.as_deref()).unwrap_or(FACTS_PLACEHOLDER)
    }

    pub fn display_attributes(&self) -> String {
        self.attributes
            .as_ref()
            .and_then(AttributeMap::display_pairs)
            .unwrap_or_else(|| ATTRIBUTES_PLACEHOLDER.to_string())
    }
}

/// Body of a successful `classify-image` or `classify-attributes` call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResponse {
    #[serde(default)]
    pub animal: Option<AnimalSummary>,
    #[serde(default)]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
    /// `"resnet"` or `"attributes"`
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

impl ClassificationResponse {
    /// The matched animal, or an all-placeholder record when the service
    /// omitted it
    pub fn animal_or_default(&self) -> AnimalSummary {
        self.animal.clone().unwrap_or_default()
    }
}

/// Body of a successful `improve-faunara` call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContributionReceipt {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of any failed call that still answered with JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    /// Machine-readable reason, e.g. `"no_match"`
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub suggestion: Option<String>,
    #[serde(default)]
    pub match_score: Option<f64>,
}

/// A new animal the user is adding to the knowledge base.
///
/// This is a snapshot of the improve form taken at submission time; the
/// success dialog shows it rather than anything echoed by the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContributionRecord {
    pub name: String,
    pub habitat: String,
    pub facts: String,
    pub attributes: AttributeMap,
    pub image: Option<ImageFile>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
