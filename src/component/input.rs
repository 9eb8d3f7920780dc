//! Labeled text field.
//!
//! Raw edits stay inside the field; every edit that changes the value is
//! re-emitted as a single composed `app-input` event carrying the new value.

use crate::component::attributes::{AttributeChange, AttributeMap};
use crate::component::bus::{ComponentEvent, DispatchedEvent};
use crate::component::element::Element;
use crate::component::template::{template, ComponentKind};
use crate::component::tree::{CompositionTree, ControlKind, NodeId, NodeKind};
use crate::component::{ComponentError, ParseValidationError};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationState {
    #[default]
    None,
    Valid,
    Invalid,
}

impl ValidationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationState::None => "none",
            ValidationState::Valid => "valid",
            ValidationState::Invalid => "invalid",
        }
    }
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationState {
    type Err = ParseValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ValidationState::None),
            "valid" => Ok(ValidationState::Valid),
            "invalid" => Ok(ValidationState::Invalid),
            other => Err(ParseValidationError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    Text,
    Password,
}

impl FieldType {
    fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("password") => FieldType::Password,
            _ => FieldType::Text,
        }
    }
}

/// A raw signal from the terminal aimed at the text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEdit {
    Insert(char),
    DeleteBack,
    DeleteForward,
    DeleteWordBack,
    Left,
    Right,
    Home,
    End,
    Replace(String),
}

/// Value and cursor of the internal control. Cursor is a byte offset.
#[derive(Debug, Default)]
pub struct TextField {
    pub text: String,
    pub cursor: usize,
}

impl TextField {
    /// Apply an edit and report whether the value changed.
    pub fn apply(&mut self, edit: &RawEdit) -> bool {
        let before = self.text.len();
        match edit {
            RawEdit::Insert(c) => {
                self.text.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                return true;
            }
            RawEdit::DeleteBack => self.delete_back(),
            RawEdit::DeleteForward => self.delete_forward(),
            RawEdit::DeleteWordBack => self.delete_word_back(),
            RawEdit::Left => self.move_left(),
            RawEdit::Right => self.move_right(),
            RawEdit::Home => self.cursor = 0,
            RawEdit::End => self.cursor = self.text.len(),
            RawEdit::Replace(text) => {
                let changed = self.text != *text;
                self.text = text.clone();
                self.cursor = self.text.len();
                return changed;
            }
        }
        self.text.len() != before
    }

    fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.next_boundary();
            self.text.drain(self.cursor..next);
        }
    }

    fn delete_word_back(&mut self) {
        let mut pos = self.cursor;
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.text.len())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFragment {
    pub label: String,
    pub field_type: FieldType,
    pub help_text: String,
}

#[derive(Debug)]
pub struct InputElement {
    host: NodeId,
    shadow: NodeId,
    control: Option<NodeId>,
    attributes: AttributeMap,
    fragment: InputFragment,
    field: TextField,
}

impl InputElement {
    /// Mount a new input under `parent`. The shadow root exists from here on,
    /// the internal control only once connected.
    pub fn new(
        tree: &mut CompositionTree,
        parent: NodeId,
        slot: Option<&'static str>,
        attributes: &[(&str, &str)],
    ) -> Result<Self, ComponentError> {
        let host = tree.append(parent, NodeKind::Host(ComponentKind::Input), slot)?;
        let shadow = tree.attach_shadow(host)?;
        let observed = template(ComponentKind::Input).observed_attributes;
        Ok(Self {
            host,
            shadow,
            control: None,
            attributes: AttributeMap::with_values(observed, attributes.iter().copied()),
            fragment: InputFragment::default(),
            field: TextField::default(),
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.get_attribute("name")
    }

    pub fn help(&self) -> &str {
        self.get_attribute("help").unwrap_or_default()
    }

    pub fn set_help(&mut self, help: &str) {
        self.set_attribute("help", help);
    }

    /// Unknown or missing values read as `none`.
    pub fn validation(&self) -> ValidationState {
        self.get_attribute("validation")
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    pub fn set_validation(&mut self, validation: ValidationState) {
        self.set_attribute("validation", validation.as_str());
    }

    /// Write the validation marker and its message together.
    pub fn set_status(&mut self, validation: ValidationState, help: &str) {
        self.set_help(help);
        self.set_validation(validation);
    }

    pub fn fragment(&self) -> &InputFragment {
        &self.fragment
    }

    pub fn help_visible(&self) -> bool {
        self.validation() != ValidationState::None
    }

    pub fn value(&self) -> &str {
        &self.field.text
    }

    pub fn cursor(&self) -> usize {
        self.field.cursor
    }

    /// The value as it should be drawn; password fields are masked.
    pub fn display_value(&self, mask: char) -> String {
        match self.fragment.field_type {
            FieldType::Text => self.value().to_string(),
            FieldType::Password => self.value().chars().map(|_| mask).collect(),
        }
    }

    /// Cursor position in characters, for terminal placement.
    pub fn display_cursor(&self) -> usize {
        self.value()[..self.cursor()].chars().count()
    }

    /// Feed a raw edit to the internal control. Returns the outward event to
    /// dispatch when the value changed.
    pub fn on_raw_edit(&mut self, edit: &RawEdit) -> Option<DispatchedEvent> {
        let control = self.control?;
        if !self.field.apply(edit) {
            return None;
        }
        Some(DispatchedEvent::outward(
            ComponentEvent::AppInput(self.field.text.clone()),
            control,
        ))
    }
}

impl Element for InputElement {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Input
    }

    fn host(&self) -> NodeId {
        self.host
    }

    fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeMap {
        &mut self.attributes
    }

    fn connected(&mut self, tree: &mut CompositionTree) -> Result<(), ComponentError> {
        if self.control.is_none() {
            let control = tree.append(self.shadow, NodeKind::Control(ControlKind::TextField), None)?;
            self.control = Some(control);
        }
        self.fragment = InputFragment {
            label: self.get_attribute("label").unwrap_or_default().to_string(),
            field_type: FieldType::from_attribute(self.get_attribute("type")),
            help_text: self.help().to_string(),
        };
        tracing::debug!(host = self.host, label = %self.fragment.label, "input connected");
        Ok(())
    }

    fn attribute_changed(&mut self, change: &AttributeChange) {
        if change.name == "help" {
            self.fragment.help_text = change.new.clone().unwrap_or_default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected_input(attributes: &[(&str, &str)]) -> (CompositionTree, InputElement) {
        let mut tree = CompositionTree::new();
        let root = tree.root(NodeKind::ShadowRoot);
        let mut input = InputElement::new(&mut tree, root, None, attributes).unwrap();
        input.connected(&mut tree).unwrap();
        (tree, input)
    }

    #[test]
    fn test_absent_attributes_degrade_to_defaults() {
        let (_, input) = connected_input(&[]);
        assert_eq!(input.fragment().label, "");
        assert_eq!(input.fragment().field_type, FieldType::Text);
        assert_eq!(input.fragment().help_text, "");
        assert_eq!(input.validation(), ValidationState::None);
        assert!(!input.help_visible());
    }

    #[test]
    fn test_declarative_configuration() {
        let (_, input) = connected_input(&[
            ("label", "Password"),
            ("type", "password"),
            ("help", "At least 8 characters"),
            ("validation", "invalid"),
        ]);
        assert_eq!(input.fragment().label, "Password");
        assert_eq!(input.fragment().field_type, FieldType::Password);
        assert_eq!(input.fragment().help_text, "At least 8 characters");
        assert_eq!(input.validation(), ValidationState::Invalid);
        assert!(input.help_visible());
    }

    #[test]
    fn test_malformed_validation_reads_as_none() {
        let (_, input) = connected_input(&[("validation", "vaild")]);
        assert_eq!(input.validation(), ValidationState::None);
        assert_eq!(
            "vaild".parse::<ValidationState>().unwrap_err(),
            ParseValidationError("vaild".into())
        );
    }

    #[test]
    fn test_help_change_refreshes_fragment() {
        let (_, mut input) = connected_input(&[]);
        input.set_help("Password Mismatch");
        assert_eq!(input.help(), "Password Mismatch");
        assert_eq!(input.fragment().help_text, "Password Mismatch");
    }

    #[test]
    fn test_set_status_writes_both() {
        let (_, mut input) = connected_input(&[]);
        input.set_status(ValidationState::Valid, "Passwords are matching");
        assert_eq!(input.validation(), ValidationState::Valid);
        assert_eq!(input.fragment().help_text, "Passwords are matching");

        input.set_validation(ValidationState::None);
        assert!(!input.help_visible());
        // The message is kept, only hidden.
        assert_eq!(input.help(), "Passwords are matching");
    }

    #[test]
    fn test_raw_edits_emit_current_value() {
        let (_, mut input) = connected_input(&[]);
        input.on_raw_edit(&RawEdit::Insert('a')).unwrap();
        let event = input.on_raw_edit(&RawEdit::Insert('b')).unwrap();
        assert_eq!(event.event, ComponentEvent::AppInput("ab".into()));
        assert!(event.bubbles && event.composed);
        assert_ne!(event.target, input.host());

        // Cursor moves do not change the value and emit nothing.
        assert!(input.on_raw_edit(&RawEdit::Left).is_none());
        let event = input.on_raw_edit(&RawEdit::DeleteForward).unwrap();
        assert_eq!(event.event, ComponentEvent::AppInput("a".into()));
    }

    #[test]
    fn test_unconnected_input_emits_nothing() {
        let mut tree = CompositionTree::new();
        let root = tree.root(NodeKind::ShadowRoot);
        let mut input = InputElement::new(&mut tree, root, None, &[]).unwrap();
        assert!(input.on_raw_edit(&RawEdit::Insert('x')).is_none());
    }

    #[test]
    fn test_password_is_masked() {
        let (_, mut input) = connected_input(&[("type", "password")]);
        input.on_raw_edit(&RawEdit::Replace("héllo".into()));
        assert_eq!(input.display_value('*'), "*****");
        assert_eq!(input.display_cursor(), 5);
    }

    #[test]
    fn test_text_field_editing() {
        let mut field = TextField::default();
        for c in "hello world".chars() {
            field.apply(&RawEdit::Insert(c));
        }
        assert!(field.apply(&RawEdit::DeleteWordBack));
        assert_eq!(field.text, "hello ");
        assert!(!field.apply(&RawEdit::Home));
        assert!(!field.apply(&RawEdit::DeleteBack));
        assert!(field.apply(&RawEdit::DeleteForward));
        assert_eq!(field.text, "ello ");
        assert!(!field.apply(&RawEdit::Replace("ello ".into())));
    }
}
