//! Action button with an in-progress state.

use crate::component::attributes::{AttributeChange, AttributeMap};
use crate::component::bus::{ComponentEvent, DispatchedEvent};
use crate::component::element::Element;
use crate::component::template::{template, ComponentKind, DEFAULT_SLOT};
use crate::component::tree::{CompositionTree, ControlKind, NodeId, NodeKind};
use crate::component::ComponentError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonFragment {
    pub label: String,
    pub disabled: bool,
    /// Pulsing treatment while a submission is outstanding.
    pub fading: bool,
}

#[derive(Debug)]
pub struct ButtonElement {
    host: NodeId,
    shadow: NodeId,
    control: Option<NodeId>,
    attributes: AttributeMap,
    content: String,
    initial_content: Option<String>,
    fragment: ButtonFragment,
}

impl ButtonElement {
    pub fn new(
        tree: &mut CompositionTree,
        parent: NodeId,
        slot: Option<&'static str>,
        content: Option<&str>,
    ) -> Result<Self, ComponentError> {
        let host = tree.append(parent, NodeKind::Host(ComponentKind::Button), slot)?;
        let shadow = tree.attach_shadow(host)?;
        Ok(Self {
            host,
            shadow,
            control: None,
            attributes: AttributeMap::new(template(ComponentKind::Button).observed_attributes),
            content: content.unwrap_or_default().to_string(),
            initial_content: None,
            fragment: ButtonFragment::default(),
        })
    }

    /// Presence of the attribute is what counts, not its value.
    pub fn inprogress(&self) -> bool {
        self.attributes.has("inprogress")
    }

    pub fn set_inprogress(&mut self, inprogress: bool) {
        if inprogress {
            self.set_attribute("inprogress", "true");
        } else {
            self.remove_attribute("inprogress");
        }
    }

    pub fn fragment(&self) -> &ButtonFragment {
        &self.fragment
    }

    /// Current light content (replaced by the loading label while in progress).
    #[cfg(test)]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// A click on the internal control. Disabled controls swallow the click.
    pub fn on_click(&mut self) -> Option<DispatchedEvent> {
        let control = self.control?;
        if self.fragment.disabled {
            tracing::debug!(host = self.host, "click ignored, button disabled");
            return None;
        }
        Some(DispatchedEvent::outward(ComponentEvent::ClickAppButton, control))
    }

    fn slotted_label(&self) -> String {
        if self.content.is_empty() {
            self.template()
                .slot_fallback(DEFAULT_SLOT)
                .unwrap_or_default()
                .to_string()
        } else {
            self.content.clone()
        }
    }
}

impl Element for ButtonElement {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Button
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
            let control = tree.append(self.shadow, NodeKind::Control(ControlKind::Button), None)?;
            self.control = Some(control);
        }
        self.initial_content = Some(self.content.clone());
        self.fragment = ButtonFragment {
            label: self.slotted_label(),
            disabled: false,
            fading: false,
        };
        tracing::debug!(host = self.host, label = %self.fragment.label, "button connected");
        Ok(())
    }

    fn attribute_changed(&mut self, change: &AttributeChange) {
        if change.new.is_some() {
            let loading = self.template().loading_label.unwrap_or_default();
            self.content = loading.to_string();
            self.fragment = ButtonFragment {
                label: loading.to_string(),
                disabled: true,
                fading: true,
            };
        } else {
            self.content = self.initial_content.clone().unwrap_or_default();
            self.fragment = ButtonFragment {
                label: self.slotted_label(),
                disabled: false,
                fading: false,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected_button(content: Option<&str>) -> ButtonElement {
        let mut tree = CompositionTree::new();
        let root = tree.root(NodeKind::ShadowRoot);
        let mut button = ButtonElement::new(&mut tree, root, None, content).unwrap();
        button.connected(&mut tree).unwrap();
        button
    }

    #[test]
    fn test_renders_slot_content_or_fallback() {
        assert_eq!(connected_button(Some("登録")).fragment().label, "登録");
        assert_eq!(connected_button(None).fragment().label, "Button");
    }

    #[test]
    fn test_inprogress_swaps_label_and_disables() {
        let mut button = connected_button(Some("Register"));
        button.set_inprogress(true);
        assert!(button.inprogress());
        assert_eq!(
            button.fragment(),
            &ButtonFragment {
                label: "Loading...".into(),
                disabled: true,
                fading: true,
            }
        );
        assert_eq!(button.content(), "Loading...");

        button.set_inprogress(false);
        assert!(!button.inprogress());
        assert_eq!(
            button.fragment(),
            &ButtonFragment {
                label: "Register".into(),
                disabled: false,
                fading: false,
            }
        );
        assert_eq!(button.content(), "Register");
    }

    #[test]
    fn test_inprogress_is_idempotent() {
        let mut once = connected_button(Some("Register"));
        let mut twice = connected_button(Some("Register"));
        once.set_inprogress(true);
        twice.set_inprogress(true);
        twice.set_inprogress(true);
        assert_eq!(once.fragment(), twice.fragment());
        assert_eq!(once.content(), twice.content());

        once.set_inprogress(false);
        twice.set_inprogress(false);
        twice.set_inprogress(false);
        assert_eq!(once.fragment(), twice.fragment());
        assert_eq!(twice.content(), "Register");
    }

    #[test]
    fn test_any_attribute_value_counts_as_true() {
        let mut button = connected_button(None);
        button.set_attribute("inprogress", "");
        assert!(button.inprogress());
        assert!(button.fragment().disabled);
    }

    #[test]
    fn test_click_emits_one_outward_event() {
        let mut button = connected_button(None);
        let event = button.on_click().unwrap();
        assert_eq!(event.event, ComponentEvent::ClickAppButton);
        assert!(event.bubbles && event.composed);

        button.set_inprogress(true);
        assert!(button.on_click().is_none());
    }
}
