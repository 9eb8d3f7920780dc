//! Composition tree.
//!
//! Every component instance is a host node. Components that encapsulate their
//! internals attach a shadow root below the host; internal controls hang off
//! that root. Slotted children of a container are plain children of the
//! container's host carrying a slot name.

use crate::component::template::ComponentKind;
use crate::component::ComponentError;

pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    TextField,
    Button,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Host(ComponentKind),
    ShadowRoot,
    Control(ControlKind),
    Text(String),
}

#[derive(Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub slot: Option<&'static str>,
    pub children: Vec<NodeId>,
}

#[derive(Debug, Default)]
pub struct CompositionTree {
    nodes: Vec<Node>,
}

impl CompositionTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Insert a parentless node (the attachment point of the outermost host).
    pub fn root(&mut self, kind: NodeKind) -> NodeId {
        self.push(kind, None, None)
    }

    pub fn append(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        slot: Option<&'static str>,
    ) -> Result<NodeId, ComponentError> {
        self.node(parent)?;
        let id = self.push(kind, Some(parent), slot);
        self.nodes[parent].children.push(id);
        Ok(id)
    }

    pub fn attach_shadow(&mut self, host: NodeId) -> Result<NodeId, ComponentError> {
        self.append(host, NodeKind::ShadowRoot, None)
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, ComponentError> {
        self.nodes.get(id).ok_or(ComponentError::UnknownNode(id))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn slot_of(&self, id: NodeId) -> Option<&'static str> {
        self.nodes.get(id).and_then(|n| n.slot)
    }

    pub fn is_shadow_root(&self, id: NodeId) -> bool {
        matches!(
            self.nodes.get(id).map(|n| &n.kind),
            Some(NodeKind::ShadowRoot)
        )
    }

    /// The component host whose shadow tree contains `id`, if any.
    pub fn host_of(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        loop {
            if self.is_shadow_root(current) {
                return self.parent(current);
            }
            current = self.parent(current)?;
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn push(&mut self, kind: NodeKind, parent: Option<NodeId>, slot: Option<&'static str>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            kind,
            parent,
            slot,
            children: Vec::new(),
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_of_resolves_through_shadow_root() {
        let mut tree = CompositionTree::new();
        let host = tree.root(NodeKind::Host(ComponentKind::Input));
        let shadow = tree.attach_shadow(host).unwrap();
        let field = tree
            .append(shadow, NodeKind::Control(ControlKind::TextField), None)
            .unwrap();

        assert_eq!(tree.host_of(field), Some(host));
        assert_eq!(tree.host_of(host), None);
        assert!(tree.is_shadow_root(shadow));
        assert_eq!(tree.children(host), &[shadow]);
    }

    #[test]
    fn test_append_to_unknown_parent_fails() {
        let mut tree = CompositionTree::new();
        let err = tree.append(7, NodeKind::ShadowRoot, None).unwrap_err();
        assert_eq!(err, ComponentError::UnknownNode(7));
        assert_eq!(tree.node_count(), 0);
    }

    #[test]
    fn test_slot_recorded_on_child() {
        let mut tree = CompositionTree::new();
        let card = tree.root(NodeKind::Host(ComponentKind::Card));
        let header = tree
            .append(card, NodeKind::Text("Sign Up".into()), Some("card-header"))
            .unwrap();
        assert_eq!(tree.slot_of(header), Some("card-header"));
        assert_eq!(tree.slot_of(card), None);
    }
}
