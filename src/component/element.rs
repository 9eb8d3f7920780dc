use crate::component::attributes::{AttributeChange, AttributeMap};
use crate::component::template::{template, ComponentKind, Template};
use crate::component::tree::{CompositionTree, NodeId};
use crate::component::ComponentError;

/// Lifecycle and attribute contract shared by every component.
///
/// Attribute writes go through [`Element::set_attribute`] /
/// [`Element::remove_attribute`], which forward changes to observed attributes
/// into [`Element::attribute_changed`].
pub trait Element {
    fn kind(&self) -> ComponentKind;

    /// The host node this element is mounted on.
    fn host(&self) -> NodeId;

    fn attributes(&self) -> &AttributeMap;

    fn attributes_mut(&mut self) -> &mut AttributeMap;

    /// Called once the element is attached to the composition tree. This is
    /// where the element stamps its template into its shadow root.
    fn connected(&mut self, _tree: &mut CompositionTree) -> Result<(), ComponentError> {
        Ok(())
    }

    fn disconnected(&mut self) {}

    fn attribute_changed(&mut self, _change: &AttributeChange) {}

    fn template(&self) -> &'static Template {
        template(self.kind())
    }

    fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes().get(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        if let Some(change) = self.attributes_mut().set(name, value) {
            tracing::debug!(
                element = self.template().tag,
                attribute = name,
                value,
                "observed attribute changed"
            );
            self.attribute_changed(&change);
        }
    }

    fn remove_attribute(&mut self, name: &str) {
        if let Some(change) = self.attributes_mut().remove(name) {
            tracing::debug!(
                element = self.template().tag,
                attribute = name,
                "observed attribute removed"
            );
            self.attribute_changed(&change);
        }
    }
}
