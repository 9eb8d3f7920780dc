//! Registration form: the only component that owns state.
//!
//! Children report up through the event bus; the form reacts and writes their
//! display properties back down. Submissions are simulated: activating the
//! button yields a [`FormEffect::ScheduleCompletion`] for the host to time,
//! and [`RegistrationForm::complete_submission`] applies the canned rejection.

use crate::component::attributes::AttributeMap;
use crate::component::bus::{ComponentEvent, DispatchedEvent, EventBus, EventType};
use crate::component::button::ButtonElement;
use crate::component::card::CardElement;
use crate::component::element::Element;
use crate::component::input::{InputElement, RawEdit, ValidationState};
use crate::component::template::{ComponentKind, Markup, CARD_HEADER_SLOT};
use crate::component::tree::{CompositionTree, NodeId, NodeKind};
use crate::component::ComponentError;
use std::collections::BTreeSet;
use std::time::Duration;

pub const SUBMIT_DELAY: Duration = Duration::from_millis(2000);

pub const PASSWORD_MISMATCH: &str = "Password Mismatch";
pub const PASSWORDS_MATCHING: &str = "Passwords are matching";
pub const USERNAME_TAKEN: &str = "Name must be unique";
pub const EMAIL_MISSING: &str = "Cannot be null";

pub type SubmissionId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Username,
    Email,
    Password,
    PasswordRepeat,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Username,
        Field::Email,
        Field::Password,
        Field::PasswordRepeat,
    ];

    /// Value of the `name` attribute the form template gives each input.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::PasswordRepeat => "password-repeat",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_repeat: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// Work the form needs its host to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    ScheduleCompletion { id: SubmissionId, delay: Duration },
}

#[derive(Debug, Clone)]
pub struct FormOptions {
    /// Header slot text; the template's text is used when empty.
    pub title: String,
    /// Button content; the template's content is used when empty.
    pub submit_label: String,
    pub submit_delay: Duration,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            submit_label: String::new(),
            submit_delay: SUBMIT_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Listener {
    FieldChange(Field),
    Submit,
}

#[derive(Debug)]
struct Inputs {
    username: InputElement,
    email: InputElement,
    password: InputElement,
    password_repeat: InputElement,
}

impl Inputs {
    fn from_staged(mut staged: Vec<InputElement>) -> Result<Self, ComponentError> {
        let mut take = |field: Field| {
            let pos = staged
                .iter()
                .position(|input| input.name() == Some(field.name()))
                .ok_or(ComponentError::MissingChild(field.name()))?;
            Ok::<_, ComponentError>(staged.remove(pos))
        };
        Ok(Self {
            username: take(Field::Username)?,
            email: take(Field::Email)?,
            password: take(Field::Password)?,
            password_repeat: take(Field::PasswordRepeat)?,
        })
    }

    fn get(&self, field: Field) -> &InputElement {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::PasswordRepeat => &self.password_repeat,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut InputElement {
        match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::PasswordRepeat => &mut self.password_repeat,
        }
    }
}

#[derive(Debug)]
struct Children {
    card: CardElement,
    inputs: Inputs,
    button: ButtonElement,
}

#[derive(Debug, Default)]
struct Staged {
    cards: Vec<CardElement>,
    inputs: Vec<InputElement>,
    buttons: Vec<ButtonElement>,
}

/// A child of the card body, resolved for rendering.
#[derive(Debug, Clone, Copy)]
pub enum BodyElement<'a> {
    Input(Field, &'a InputElement),
    Button(&'a ButtonElement),
}

#[derive(Debug)]
pub struct RegistrationForm {
    options: FormOptions,
    tree: CompositionTree,
    host: NodeId,
    shadow: NodeId,
    attributes: AttributeMap,
    bus: EventBus<Listener>,
    children: Option<Children>,
    state: Option<FormState>,
    outstanding: BTreeSet<SubmissionId>,
    next_submission: SubmissionId,
}

fn fresh_tree() -> Result<(CompositionTree, NodeId, NodeId), ComponentError> {
    let mut tree = CompositionTree::new();
    let host = tree.root(NodeKind::Host(ComponentKind::Form));
    let shadow = tree.attach_shadow(host)?;
    Ok((tree, host, shadow))
}

impl RegistrationForm {
    pub fn new(options: FormOptions) -> Result<Self, ComponentError> {
        let (tree, host, shadow) = fresh_tree()?;
        Ok(Self {
            options,
            tree,
            host,
            shadow,
            attributes: AttributeMap::new(&[]),
            bus: EventBus::new(),
            children: None,
            state: None,
            outstanding: BTreeSet::new(),
            next_submission: 0,
        })
    }

    pub fn is_attached(&self) -> bool {
        self.children.is_some()
    }

    /// Stamp the template, connect the children, subscribe to their events
    /// and create fresh form state. Attaching twice is a no-op.
    pub fn attach(&mut self) -> Result<(), ComponentError> {
        if self.is_attached() {
            return Ok(());
        }
        let mut staged = Staged::default();
        for markup in self.template().markup {
            stamp(&mut self.tree, &self.options, self.shadow, markup, &mut staged)?;
        }

        let card = staged
            .cards
            .pop()
            .ok_or(ComponentError::MissingChild("card"))?;
        let button = staged
            .buttons
            .pop()
            .ok_or(ComponentError::MissingChild("button"))?;
        let inputs = Inputs::from_staged(staged.inputs)?;

        for field in Field::ALL {
            self.bus.listen(
                inputs.get(field).host(),
                EventType::AppInput,
                Listener::FieldChange(field),
            );
        }
        self.bus
            .listen(self.host, EventType::ClickAppButton, Listener::Submit);

        self.children = Some(Children {
            card,
            inputs,
            button,
        });
        self.state = Some(FormState::default());
        tracing::info!(
            nodes = self.tree.node_count(),
            listeners = self.bus.listener_count(),
            "registration form attached"
        );
        Ok(())
    }

    /// Drop children, listeners and state. Returns the submissions that were
    /// still outstanding so the host can cancel their timers.
    pub fn detach(&mut self) -> Result<Vec<SubmissionId>, ComponentError> {
        let cancelled: Vec<_> = std::mem::take(&mut self.outstanding).into_iter().collect();
        self.disconnected();
        let (tree, host, shadow) = fresh_tree()?;
        self.tree = tree;
        self.host = host;
        self.shadow = shadow;
        tracing::info!(cancelled = cancelled.len(), "registration form detached");
        Ok(cancelled)
    }

    pub fn card(&self) -> Option<&CardElement> {
        self.children.as_ref().map(|c| &c.card)
    }

    pub fn button(&self) -> Option<&ButtonElement> {
        self.children.as_ref().map(|c| &c.button)
    }

    pub fn body_element(&self, node: NodeId) -> Option<BodyElement<'_>> {
        let children = self.children.as_ref()?;
        if children.button.host() == node {
            return Some(BodyElement::Button(&children.button));
        }
        Field::ALL
            .into_iter()
            .find(|f| children.inputs.get(*f).host() == node)
            .map(|f| BodyElement::Input(f, children.inputs.get(f)))
    }

    pub fn phase(&self) -> Phase {
        match self.button() {
            Some(button) if button.inprogress() => Phase::Submitting,
            _ => Phase::Idle,
        }
    }

    /// Route a raw edit into the given input.
    pub fn edit(&mut self, field: Field, edit: &RawEdit) -> Result<Vec<FormEffect>, ComponentError> {
        let children = self.children.as_mut().ok_or(ComponentError::NotAttached)?;
        match children.inputs.get_mut(field).on_raw_edit(edit) {
            Some(event) => self.dispatch(event),
            None => Ok(Vec::new()),
        }
    }

    /// Route a click into the button.
    pub fn click(&mut self) -> Result<Vec<FormEffect>, ComponentError> {
        let children = self.children.as_mut().ok_or(ComponentError::NotAttached)?;
        match children.button.on_click() {
            Some(event) => self.dispatch(event),
            None => Ok(Vec::new()),
        }
    }

    /// Apply the simulated server response for `id`. Returns `false` when the
    /// submission is unknown (already completed, or cancelled by detaching).
    pub fn complete_submission(&mut self, id: SubmissionId) -> Result<bool, ComponentError> {
        if !self.outstanding.remove(&id) {
            tracing::debug!(submission = id, "completion for unknown submission ignored");
            return Ok(false);
        }
        let children = self.children.as_mut().ok_or(ComponentError::NotAttached)?;
        children.button.set_inprogress(false);
        children
            .inputs
            .get_mut(Field::Username)
            .set_status(ValidationState::Invalid, USERNAME_TAKEN);
        children
            .inputs
            .get_mut(Field::Email)
            .set_status(ValidationState::Invalid, EMAIL_MISSING);
        tracing::info!(submission = id, "submission rejected");
        Ok(true)
    }

    fn dispatch(&mut self, event: DispatchedEvent) -> Result<Vec<FormEffect>, ComponentError> {
        let deliveries = self.bus.dispatch(&self.tree, &event)?;
        let mut effects = Vec::new();
        for delivery in deliveries {
            effects.extend(self.react(delivery.listener, delivery.event)?);
        }
        Ok(effects)
    }

    fn react(
        &mut self,
        listener: Listener,
        event: ComponentEvent,
    ) -> Result<Vec<FormEffect>, ComponentError> {
        match (listener, event) {
            (Listener::FieldChange(field), ComponentEvent::AppInput(value)) => {
                self.on_field_change(field, value)?;
                Ok(Vec::new())
            }
            (Listener::Submit, ComponentEvent::ClickAppButton) => {
                Ok(vec![self.begin_submission()?])
            }
            (listener, event) => {
                tracing::warn!(?listener, ?event, "delivery with mismatched payload");
                Ok(Vec::new())
            }
        }
    }

    fn on_field_change(&mut self, field: Field, value: String) -> Result<(), ComponentError> {
        let children = self.children.as_mut().ok_or(ComponentError::NotAttached)?;
        let state = self.state.as_mut().ok_or(ComponentError::NotAttached)?;
        match field {
            Field::Username => {
                state.username = value;
                children
                    .inputs
                    .get_mut(Field::Username)
                    .set_validation(ValidationState::None);
            }
            Field::Email => state.email = value,
            Field::Password | Field::PasswordRepeat => {
                if field == Field::Password {
                    state.password = value;
                } else {
                    state.password_repeat = value;
                }
                let repeat = children.inputs.get_mut(Field::PasswordRepeat);
                if state.password != state.password_repeat {
                    repeat.set_status(ValidationState::Invalid, PASSWORD_MISMATCH);
                } else {
                    repeat.set_status(ValidationState::Valid, PASSWORDS_MATCHING);
                }
            }
        }
        tracing::trace!(field = field.name(), "field changed");
        Ok(())
    }

    fn begin_submission(&mut self) -> Result<FormEffect, ComponentError> {
        let children = self.children.as_mut().ok_or(ComponentError::NotAttached)?;
        children.button.set_inprogress(true);
        let id = self.next_submission;
        self.next_submission += 1;
        self.outstanding.insert(id);
        let state = self.state.as_ref().ok_or(ComponentError::NotAttached)?;
        tracing::info!(
            submission = id,
            username = %state.username,
            email = %state.email,
            delay_ms = self.options.submit_delay.as_millis() as u64,
            "submission started"
        );
        Ok(FormEffect::ScheduleCompletion {
            id,
            delay: self.options.submit_delay,
        })
    }
}

#[cfg(test)]
impl RegistrationForm {
    pub fn state(&self) -> Option<&FormState> {
        self.state.as_ref()
    }

    pub fn input(&self, field: Field) -> Option<&InputElement> {
        self.children.as_ref().map(|c| c.inputs.get(field))
    }

    pub fn outstanding(&self) -> usize {
        self.outstanding.len()
    }
}

impl Element for RegistrationForm {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Form
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

    fn disconnected(&mut self) {
        self.bus.clear();
        self.children = None;
        self.state = None;
    }
}

fn stamp(
    tree: &mut CompositionTree,
    options: &FormOptions,
    parent: NodeId,
    markup: &Markup,
    staged: &mut Staged,
) -> Result<(), ComponentError> {
    match markup {
        Markup::Text { slot, text } => {
            let text = if *slot == Some(CARD_HEADER_SLOT) && !options.title.is_empty() {
                options.title.clone()
            } else {
                text.to_string()
            };
            tree.append(parent, NodeKind::Text(text), *slot)?;
        }
        Markup::Element {
            kind,
            slot,
            attributes,
            content,
            children,
        } => match kind {
            ComponentKind::Card => {
                let mut card = CardElement::new(tree, parent, *slot)?;
                for child in children.iter() {
                    stamp(tree, options, card.host(), child, staged)?;
                }
                card.connected(tree)?;
                staged.cards.push(card);
            }
            ComponentKind::Input => {
                let mut input = InputElement::new(tree, parent, *slot, attributes)?;
                input.connected(tree)?;
                staged.inputs.push(input);
            }
            ComponentKind::Button => {
                let label = if options.submit_label.is_empty() {
                    *content
                } else {
                    Some(options.submit_label.as_str())
                };
                let mut button = ButtonElement::new(tree, parent, *slot, label)?;
                button.connected(tree)?;
                staged.buttons.push(button);
            }
            ComponentKind::Form => {
                tracing::warn!("nested form in template ignored");
            }
        },
    }
    Ok(())
}
