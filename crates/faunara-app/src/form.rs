//! The three input forms, their fields and the focus order

use faunara_core::{AttributeField, AttributeSource};

/// The three forms on screen, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormId {
    ClassifyImage,
    GuessAttributes,
    Improve,
}

impl FormId {
    pub fn title(self) -> &'static str {
        match self {
            FormId::ClassifyImage => "Classify Image",
            FormId::GuessAttributes => "Guess by Attributes",
            FormId::Improve => "Improve Faunara",
        }
    }
}

/// How a field reacts to input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select,
    Button,
    Toggle,
}

/// Every focusable control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    ImagePath,
    ImageSubmit,
    GuessAttribute(AttributeField),
    GuessSubmit,
    ImproveName,
    ImproveHabitat,
    ImproveFacts,
    ImproveImagePath,
    ImproveToggle,
    ImproveAttribute(AttributeField),
    ImproveSubmit,
}

impl FieldId {
    pub fn form(self) -> FormId {
        match self {
            FieldId::ImagePath | FieldId::ImageSubmit => FormId::ClassifyImage,
            FieldId::GuessAttribute(_) | FieldId::GuessSubmit => FormId::GuessAttributes,
            _ => FormId::Improve,
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::ImageSubmit | FieldId::GuessSubmit | FieldId::ImproveSubmit => {
                FieldKind::Button
            }
            FieldId::ImproveToggle => FieldKind::Toggle,
            FieldId::GuessAttribute(field) | FieldId::ImproveAttribute(field) => {
                if field.is_numeric() {
                    FieldKind::Text
                } else {
                    FieldKind::Select
                }
            }
            _ => FieldKind::Text,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::ImagePath | FieldId::ImproveImagePath => "Image file",
            FieldId::ImageSubmit => "Classify",
            FieldId::GuessSubmit => "Guess animal",
            FieldId::ImproveSubmit => "Add to FAUNARA",
            FieldId::ImproveName => "Name",
            FieldId::ImproveHabitat => "Habitat",
            FieldId::ImproveFacts => "Facts",
            FieldId::ImproveToggle => "Attributes",
            FieldId::GuessAttribute(field) | FieldId::ImproveAttribute(field) => field.label(),
        }
    }

    /// The attribute this field edits, if any
    pub fn attribute(self) -> Option<AttributeField> {
        match self {
            FieldId::GuessAttribute(field) | FieldId::ImproveAttribute(field) => Some(field),
            _ => None,
        }
    }
}

/// Focus order. Improve-form attribute fields are skipped while collapsed.
pub fn focus_order(attributes_visible: bool) -> Vec<FieldId> {
    let mut order = vec![FieldId::ImagePath, FieldId::ImageSubmit];
    order.extend(AttributeField::ALL.map(FieldId::GuessAttribute));
    order.extend([
        FieldId::GuessSubmit,
        FieldId::ImproveName,
        FieldId::ImproveHabitat,
        FieldId::ImproveFacts,
        FieldId::ImproveImagePath,
        FieldId::ImproveToggle,
    ]);
    if attributes_visible {
        order.extend(AttributeField::ALL.map(FieldId::ImproveAttribute));
    }
    order.push(FieldId::ImproveSubmit);
    order
}

/// Current values of the six attribute controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeForm {
    values: [String; 6],
}

impl AttributeForm {
    fn index(field: AttributeField) -> usize {
        AttributeField::ALL
            .iter()
            .position(|f| *f == field)
            .unwrap_or_default()
    }

    pub fn value(&self, field: AttributeField) -> &str {
        &self.values[Self::index(field)]
    }

    pub fn set(&mut self, field: AttributeField, value: impl Into<String>) {
        self.values[Self::index(field)] = value.into();
    }

    pub fn value_mut(&mut self, field: AttributeField) -> &mut String {
        &mut self.values[Self::index(field)]
    }

    /// Step a select to its next or previous option, wrapping around
    pub fn cycle(&mut self, field: AttributeField, forward: bool) {
        let options = field.options();
        if options.is_empty() {
            return;
        }
        let current = options
            .iter()
            .position(|o| *o == self.value(field))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };
        self.set(field, options[next]);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl AttributeSource for AttributeForm {
    fn attribute_value(&self, field: AttributeField) -> &str {
        self.value(field)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageForm {
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImproveForm {
    pub name: String,
    pub habitat: String,
    pub facts: String,
    pub image_path: String,
    pub attributes: AttributeForm,
}

impl ImproveForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// All form values
#[derive(Debug, Clone, Default)]
pub struct Forms {
    pub image: ImageForm,
    pub guess: AttributeForm,
    pub improve: ImproveForm,
}

impl Forms {
    /// Current display value of a text or select field
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::ImagePath => &self.image.path,
            FieldId::GuessAttribute(attr) => self.guess.value(attr),
            FieldId::ImproveName => &self.improve.name,
            FieldId::ImproveHabitat => &self.improve.habitat,
            FieldId::ImproveFacts => &self.improve.facts,
            FieldId::ImproveImagePath => &self.improve.image_path,
            FieldId::ImproveAttribute(attr) => self.improve.attributes.value(attr),
            FieldId::ImageSubmit
            | FieldId::GuessSubmit
            | FieldId::ImproveSubmit
            | FieldId::ImproveToggle => "",
        }
    }

    /// Editable text behind a field, `None` for buttons
    pub fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::ImagePath => Some(&mut self.image.path),
            FieldId::GuessAttribute(attr) => Some(self.guess.value_mut(attr)),
            FieldId::ImproveName => Some(&mut self.improve.name),
            FieldId::ImproveHabitat => Some(&mut self.improve.habitat),
            FieldId::ImproveFacts => Some(&mut self.improve.facts),
            FieldId::ImproveImagePath => Some(&mut self.improve.image_path),
            FieldId::ImproveAttribute(attr) => Some(self.improve.attributes.value_mut(attr)),
            FieldId::ImageSubmit
            | FieldId::GuessSubmit
            | FieldId::ImproveSubmit
            | FieldId::ImproveToggle => None,
        }
    }

    /// Type a character. Leg counts only take digits.
    pub fn insert_char(&mut self, field: FieldId, c: char) {
        if field.kind() != FieldKind::Text {
            return;
        }
        if field.attribute().is_some_and(AttributeField::is_numeric) && !c.is_ascii_digit() {
            return;
        }
        if let Some(text) = self.text_mut(field) {
            text.push(c);
        }
    }

    pub fn delete_char(&mut self, field: FieldId) {
        if field.kind() != FieldKind::Text {
            return;
        }
        if let Some(text) = self.text_mut(field) {
            text.pop();
        }
    }

    /// Empty a text field or unset a select
    pub fn clear(&mut self, field: FieldId) {
        if let Some(text) = self.text_mut(field) {
            text.clear();
        }
    }

    pub fn cycle(&mut self, field: FieldId, forward: bool) {
        match field {
            FieldId::GuessAttribute(attr) => self.guess.cycle(attr, forward),
            FieldId::ImproveAttribute(attr) => self.improve.attributes.cycle(attr, forward),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faunara_core::collect_attributes;

    #[test]
    fn test_focus_order_skips_hidden_attributes() {
        let collapsed = focus_order(false);
        assert!(!collapsed
            .iter()
            .any(|f| matches!(f, FieldId::ImproveAttribute(_))));
        assert_eq!(collapsed.first(), Some(&FieldId::ImagePath));
        assert_eq!(collapsed.last(), Some(&FieldId::ImproveSubmit));

        let expanded = focus_order(true);
        assert_eq!(expanded.len(), collapsed.len() + 6);
    }

    #[test]
    fn test_field_kinds() {
        assert_eq!(FieldId::ImagePath.kind(), FieldKind::Text);
        assert_eq!(
            FieldId::GuessAttribute(AttributeField::Legs).kind(),
            FieldKind::Text
        );
        assert_eq!(
            FieldId::GuessAttribute(AttributeField::Diet).kind(),
            FieldKind::Select
        );
        assert_eq!(FieldId::ImproveToggle.kind(), FieldKind::Toggle);
        assert_eq!(FieldId::GuessSubmit.kind(), FieldKind::Button);
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        let mut form = AttributeForm::default();

        form.cycle(AttributeField::CanFly, true);
        assert_eq!(form.value(AttributeField::CanFly), "yes");
        form.cycle(AttributeField::CanFly, true);
        form.cycle(AttributeField::CanFly, true);
        assert_eq!(form.value(AttributeField::CanFly), "");

        form.cycle(AttributeField::CanFly, false);
        assert_eq!(form.value(AttributeField::CanFly), "no");
    }

    #[test]
    fn test_legs_only_accepts_digits() {
        let mut forms = Forms::default();
        let legs = FieldId::GuessAttribute(AttributeField::Legs);

        forms.insert_char(legs, '4');
        forms.insert_char(legs, 'x');
        forms.insert_char(legs, '2');

        assert_eq!(forms.value(legs), "42");
    }

    #[test]
    fn test_selects_ignore_typing() {
        let mut forms = Forms::default();
        let diet = FieldId::ImproveAttribute(AttributeField::Diet);
        forms.insert_char(diet, 'h');
        assert_eq!(forms.value(diet), "");
    }

    #[test]
    fn test_attribute_form_is_an_attribute_source() {
        let mut form = AttributeForm::default();
        form.set(AttributeField::Legs, "4");
        form.cycle(AttributeField::Skin, true);

        let attributes = collect_attributes(&form);
        assert_eq!(attributes.to_json_string(), r#"{"legs":4,"skin":"fur"}"#);
    }

    #[test]
    fn test_improve_reset() {
        let mut form = ImproveForm {
            name: "Okapi".to_string(),
            ..Default::default()
        };
        form.attributes.set(AttributeField::Diet, "herbivore");
        form.reset();
        assert_eq!(form, ImproveForm::default());
    }
}
