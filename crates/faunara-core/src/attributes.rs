//! Animal attributes: the fixed field set and the sparse mapping sent to the
//! service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The fixed set of attribute controls shared by the "guess by attributes"
/// form and the "improve" form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeField {
    Legs,
    Skin,
    Diet,
    CanFly,
    CanSwim,
    Activity,
}

impl AttributeField {
    /// All fields, in display and collection order
    pub const ALL: [AttributeField; 6] = [
        AttributeField::Legs,
        AttributeField::Skin,
        AttributeField::Diet,
        AttributeField::CanFly,
        AttributeField::CanSwim,
        AttributeField::Activity,
    ];

    /// Wire name of the attribute
    pub fn key(self) -> &'static str {
        match self {
            AttributeField::Legs => "legs",
            AttributeField::Skin => "skin",
            AttributeField::Diet => "diet",
            AttributeField::CanFly => "can_fly",
            AttributeField::CanSwim => "can_swim",
            AttributeField::Activity => "activity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AttributeField::Legs => "Number of legs",
            AttributeField::Skin => "Skin type",
            AttributeField::Diet => "Diet",
            AttributeField::CanFly => "Can fly?",
            AttributeField::CanSwim => "Can swim?",
            AttributeField::Activity => "Activity",
        }
    }

    /// Leg count is typed in; every other field is a fixed choice.
    pub fn is_numeric(self) -> bool {
        matches!(self, AttributeField::Legs)
    }

    /// Selectable values. The empty string means "not set" and is always first.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            AttributeField::Legs => &[],
            AttributeField::Skin => &["", "fur", "feathers", "scales", "skin", "shell"],
            AttributeField::Diet => &["", "herbivore", "carnivore", "omnivore", "insectivore"],
            AttributeField::CanFly | AttributeField::CanSwim => &["", "yes", "no"],
            AttributeField::Activity => &["", "diurnal", "nocturnal", "crepuscular"],
        }
    }
}

/// Anything that can report the current value of each attribute control.
pub trait AttributeSource {
    fn attribute_value(&self, field: AttributeField) -> &str;
}

/// Sparse, insertion-ordered mapping of attribute name → scalar value.
///
/// Serializes as a plain JSON object, which is also the shape the service
/// returns inside an animal record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap(Map<String, Value>);

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_integer(&mut self, key: impl Into<String>, value: i64) {
        self.0.insert(key.into(), Value::from(value));
    }

    pub fn insert_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), Value::String(value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// `"legs: 4, diet: herbivore"`, or `None` when there is nothing to show
    pub fn display_pairs(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let pairs: Vec<String> = self
            .iter()
            .map(|(key, value)| format!("{}: {}", key, display_value(value)))
            .collect();
        Some(pairs.join(", "))
    }

    /// JSON object text, as carried by the multipart `attributes` field
    pub fn to_json_string(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Read every attribute control and build the sparse mapping.
///
/// Empty controls are omitted. The leg count becomes an integer; a leg count
/// that is not a whole number is dropped. Never fails.
pub fn collect_attributes(source: &impl AttributeSource) -> AttributeMap {
    let mut attributes = AttributeMap::new();

    for field in AttributeField::ALL {
        let raw = source.attribute_value(field).trim();
        if raw.is_empty() {
            continue;
        }

        if field.is_numeric() {
            match raw.parse::<i64>() {
                Ok(count) => attributes.insert_integer(field.key(), count),
                Err(_) => {
                    tracing::warn!("Ignoring non-numeric {} value: {:?}", field.key(), raw);
                }
            }
        } else {
            attributes.insert_text(field.key(), raw);
        }
    }

    attributes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct Controls(HashMap<AttributeField, String>);

    impl Controls {
        fn with(mut self, field: AttributeField, value: &str) -> Self {
            self.0.insert(field, value.to_string());
            self
        }
    }

    impl AttributeSource for Controls {
        fn attribute_value(&self, field: AttributeField) -> &str {
            self.0.get(&field).map(String::as_str).unwrap_or("")
        }
    }

    #[test]
    fn test_collect_all_empty() {
        let attributes = collect_attributes(&Controls::default());
        assert!(attributes.is_empty());
    }

    #[test]
    fn test_collect_legs_is_integer() {
        let controls = Controls::default().with(AttributeField::Legs, "4");
        let attributes = collect_attributes(&controls);

        assert_eq!(attributes.len(), 1);
        assert_eq!(attributes.get("legs"), Some(&Value::from(4)));
        assert_eq!(attributes.to_json_string(), r#"{"legs":4}"#);
    }

    #[test]
    fn test_collect_keeps_strings_and_order() {
        let controls = Controls::default()
            .with(AttributeField::Activity, "nocturnal")
            .with(AttributeField::Diet, "carnivore")
            .with(AttributeField::Legs, "2");
        let attributes = collect_attributes(&controls);

        let keys: Vec<&str> = attributes.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["legs", "diet", "activity"]);
        assert_eq!(
            attributes.get("diet"),
            Some(&Value::String("carnivore".to_string()))
        );
    }

    #[test]
    fn test_collect_drops_unparseable_legs() {
        let controls = Controls::default()
            .with(AttributeField::Legs, "many")
            .with(AttributeField::CanSwim, "yes");
        let attributes = collect_attributes(&controls);

        assert!(attributes.get("legs").is_none());
        assert_eq!(attributes.len(), 1);
    }

    #[test]
    fn test_collect_ignores_whitespace_only() {
        let controls = Controls::default().with(AttributeField::Skin, "   ");
        assert!(collect_attributes(&controls).is_empty());
    }

    #[test]
    fn test_display_pairs() {
        let mut attributes = AttributeMap::new();
        assert_eq!(attributes.display_pairs(), None);

        attributes.insert_integer("legs", 4);
        attributes.insert_text("diet", "herbivore");
        assert_eq!(
            attributes.display_pairs().as_deref(),
            Some("legs: 4, diet: herbivore")
        );
    }

    #[test]
    fn test_deserialize_server_attributes() {
        let attributes: AttributeMap =
            serde_json::from_str(r#"{"legs": 6, "can_fly": "yes", "venomous": true}"#).unwrap();
        assert_eq!(
            attributes.display_pairs().as_deref(),
            Some("legs: 6, can_fly: yes, venomous: true")
        );
    }

    #[test]
    fn test_every_select_starts_with_unset() {
        for field in AttributeField::ALL {
            if field.is_numeric() {
                assert!(field.options().is_empty());
            } else {
                assert_eq!(field.options().first(), Some(&""));
            }
        }
    }
}
