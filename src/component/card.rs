//! Presentational container with a header slot and a body slot.

use crate::component::attributes::AttributeMap;
use crate::component::element::Element;
use crate::component::template::{ComponentKind, CARD_BODY_SLOT, CARD_HEADER_SLOT};
use crate::component::tree::{CompositionTree, NodeId, NodeKind};
use crate::component::ComponentError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotItem {
    Text(String),
    Node(NodeId),
}

/// What the card currently shows in each slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFragment {
    pub header: Vec<SlotItem>,
    pub body: Vec<SlotItem>,
}

impl CardFragment {
    pub fn header_text(&self) -> String {
        self.header
            .iter()
            .filter_map(|item| match item {
                SlotItem::Text(text) => Some(text.as_str()),
                SlotItem::Node(_) => None,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug)]
pub struct CardElement {
    host: NodeId,
    attributes: AttributeMap,
    fragment: CardFragment,
}

impl CardElement {
    pub fn new(
        tree: &mut CompositionTree,
        parent: NodeId,
        slot: Option<&'static str>,
    ) -> Result<Self, ComponentError> {
        let host = tree.append(parent, NodeKind::Host(ComponentKind::Card), slot)?;
        // Slotted children stay in the light tree; the shadow root keeps the
        // card's own chrome out of slot assignment.
        tree.attach_shadow(host)?;
        Ok(Self {
            host,
            attributes: AttributeMap::new(&[]),
            fragment: CardFragment::default(),
        })
    }

    pub fn fragment(&self) -> &CardFragment {
        &self.fragment
    }

    fn assigned(&self, tree: &CompositionTree, slot: &str) -> Vec<SlotItem> {
        let mut items: Vec<SlotItem> = tree
            .children(self.host)
            .iter()
            .filter(|id| tree.slot_of(**id) == Some(slot))
            .filter_map(|id| match tree.node(*id).map(|n| &n.kind) {
                Ok(NodeKind::Text(text)) => Some(SlotItem::Text(text.clone())),
                Ok(NodeKind::ShadowRoot) | Err(_) => None,
                Ok(_) => Some(SlotItem::Node(*id)),
            })
            .collect();
        if items.is_empty() {
            if let Some(fallback) = self.template().slot_fallback(slot) {
                items.push(SlotItem::Text(fallback.to_string()));
            }
        }
        items
    }
}

impl Element for CardElement {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Card
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
        self.fragment = CardFragment {
            header: self.assigned(tree, CARD_HEADER_SLOT),
            body: self.assigned(tree, CARD_BODY_SLOT),
        };
        tracing::debug!(
            host = self.host,
            body_items = self.fragment.body.len(),
            "card connected"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slots_fall_back_to_defaults() {
        let mut tree = CompositionTree::new();
        let root = tree.root(NodeKind::ShadowRoot);
        let mut card = CardElement::new(&mut tree, root, None).unwrap();
        card.connected(&mut tree).unwrap();

        assert_eq!(card.fragment().header_text(), "Card Header");
        assert_eq!(
            card.fragment().body,
            vec![SlotItem::Text("Card Body".into())]
        );
    }

    #[test]
    fn test_slotted_content_is_assigned_in_order() {
        let mut tree = CompositionTree::new();
        let root = tree.root(NodeKind::ShadowRoot);
        let mut card = CardElement::new(&mut tree, root, None).unwrap();
        tree.append(
            card.host(),
            NodeKind::Text("Sign Up".into()),
            Some(CARD_HEADER_SLOT),
        )
        .unwrap();
        let first = tree
            .append(
                card.host(),
                NodeKind::Host(ComponentKind::Input),
                Some(CARD_BODY_SLOT),
            )
            .unwrap();
        let second = tree
            .append(
                card.host(),
                NodeKind::Host(ComponentKind::Button),
                Some(CARD_BODY_SLOT),
            )
            .unwrap();
        // Unslotted content is not rendered.
        tree.append(card.host(), NodeKind::Text("stray".into()), None)
            .unwrap();
        card.connected(&mut tree).unwrap();

        assert_eq!(card.fragment().header_text(), "Sign Up");
        assert_eq!(
            card.fragment().body,
            vec![SlotItem::Node(first), SlotItem::Node(second)]
        );
    }
}
