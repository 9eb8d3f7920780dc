//! Component runtime: composition tree, attributes, event bus, templates, and
//! the four components of the registration form.

pub mod attributes;
pub mod bus;
pub mod button;
pub mod card;
pub mod element;
pub mod form;
pub mod input;
pub mod template;
pub mod tree;

use thiserror::Error;
use tree::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    #[error("no node with id {0} in the composition tree")]
    UnknownNode(NodeId),
    #[error("component is not attached")]
    NotAttached,
    #[error("template produced no {0}")]
    MissingChild(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid validation state '{0}' (expected none, valid or invalid)")]
pub struct ParseValidationError(pub String);
