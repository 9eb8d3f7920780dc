//! Typed event bus over the composition tree.
//!
//! Listeners are registered on a node for one event type and are identified by
//! a caller-chosen tag. Dispatch walks from the target towards the root and
//! returns every matching listener in propagation order; the caller runs the
//! reactions. Composed events cross shadow roots (with the visible target
//! retargeted to the host), others stop at the first shadow root.

use crate::component::tree::{CompositionTree, NodeId};
use crate::component::ComponentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    AppInput,
    ClickAppButton,
}

impl EventType {
    pub fn name(&self) -> &'static str {
        match self {
            EventType::AppInput => "app-input",
            EventType::ClickAppButton => "click-app-button",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentEvent {
    /// Current value of a text field.
    AppInput(String),
    ClickAppButton,
}

impl ComponentEvent {
    pub fn event_type(&self) -> EventType {
        match self {
            ComponentEvent::AppInput(_) => EventType::AppInput,
            ComponentEvent::ClickAppButton => EventType::ClickAppButton,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DispatchedEvent {
    pub event: ComponentEvent,
    pub target: NodeId,
    pub bubbles: bool,
    pub composed: bool,
}

impl DispatchedEvent {
    /// An event that bubbles and crosses encapsulation boundaries.
    pub fn outward(event: ComponentEvent, target: NodeId) -> Self {
        Self {
            event,
            target,
            bubbles: true,
            composed: true,
        }
    }

    #[cfg(test)]
    pub fn local(event: ComponentEvent, target: NodeId) -> Self {
        Self {
            event,
            target,
            bubbles: true,
            composed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery<L> {
    pub listener: L,
    pub current_target: NodeId,
    /// Target as seen from `current_target` (retargeted across shadow roots).
    pub target: NodeId,
    pub event: ComponentEvent,
}

#[derive(Debug)]
struct Registration<L> {
    node: NodeId,
    event_type: EventType,
    tag: L,
}

#[derive(Debug)]
pub struct EventBus<L> {
    listeners: Vec<Registration<L>>,
}

impl<L> Default for EventBus<L> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}

impl<L: Clone> EventBus<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen(&mut self, node: NodeId, event_type: EventType, tag: L) {
        self.listeners.push(Registration {
            node,
            event_type,
            tag,
        });
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn dispatch(
        &self,
        tree: &CompositionTree,
        dispatched: &DispatchedEvent,
    ) -> Result<Vec<Delivery<L>>, ComponentError> {
        tree.node(dispatched.target)?;
        let event_type = dispatched.event.event_type();

        let mut deliveries = Vec::new();
        let mut current = dispatched.target;
        let mut visible_target = dispatched.target;
        loop {
            for reg in self
                .listeners
                .iter()
                .filter(|r| r.node == current && r.event_type == event_type)
            {
                deliveries.push(Delivery {
                    listener: reg.tag.clone(),
                    current_target: current,
                    target: visible_target,
                    event: dispatched.event.clone(),
                });
            }

            if !dispatched.bubbles {
                break;
            }
            let crossing = tree.is_shadow_root(current);
            if crossing && !dispatched.composed {
                break;
            }
            let next = if crossing {
                tree.host_of(current)
            } else {
                tree.parent(current)
            };
            let Some(next) = next else {
                break;
            };
            if crossing {
                visible_target = next;
            }
            current = next;
        }

        tracing::trace!(
            event = event_type.name(),
            target = dispatched.target,
            delivered = deliveries.len(),
            "dispatched component event"
        );
        Ok(deliveries)
    }
}
