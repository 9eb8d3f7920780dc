//! Process-wide component templates.
//!
//! One template per component kind, built on first use and read-only after.
//! Instances clone what they need from here when they are connected.

use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    Card,
    Input,
    Button,
    Form,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Card,
        ComponentKind::Input,
        ComponentKind::Button,
        ComponentKind::Form,
    ];

    fn index(self) -> usize {
        match self {
            ComponentKind::Card => 0,
            ComponentKind::Input => 1,
            ComponentKind::Button => 2,
            ComponentKind::Form => 3,
        }
    }
}

/// Declarative markup a template stamps out when its component is connected.
#[derive(Debug)]
pub enum Markup {
    Text {
        slot: Option<&'static str>,
        text: &'static str,
    },
    Element {
        kind: ComponentKind,
        slot: Option<&'static str>,
        attributes: &'static [(&'static str, &'static str)],
        /// Default slot content (the light-DOM text of the element).
        content: Option<&'static str>,
        children: &'static [Markup],
    },
}

#[derive(Debug)]
pub struct Template {
    pub tag: &'static str,
    pub observed_attributes: &'static [&'static str],
    /// Named slots with the fallback text shown when nothing is assigned.
    pub slots: &'static [(&'static str, &'static str)],
    pub loading_label: Option<&'static str>,
    pub markup: &'static [Markup],
}

impl Template {
    pub fn slot_fallback(&self, slot: &str) -> Option<&'static str> {
        self.slots
            .iter()
            .find(|(name, _)| *name == slot)
            .map(|(_, fallback)| *fallback)
    }

    #[cfg(test)]
    pub fn observes(&self, attribute: &str) -> bool {
        self.observed_attributes.contains(&attribute)
    }
}

pub const CARD_HEADER_SLOT: &str = "card-header";
pub const CARD_BODY_SLOT: &str = "card-body";
pub const DEFAULT_SLOT: &str = "";

const CARD: Template = Template {
    tag: "app-card",
    observed_attributes: &[],
    slots: &[(CARD_HEADER_SLOT, "Card Header"), (CARD_BODY_SLOT, "Card Body")],
    loading_label: None,
    markup: &[],
};

const INPUT: Template = Template {
    tag: "app-input",
    observed_attributes: &["help"],
    slots: &[],
    loading_label: None,
    markup: &[],
};

const BUTTON: Template = Template {
    tag: "app-button",
    observed_attributes: &["inprogress"],
    slots: &[(DEFAULT_SLOT, "Button")],
    loading_label: Some("Loading..."),
    markup: &[],
};

const FORM_CARD_CHILDREN: &[Markup] = &[
    Markup::Text {
        slot: Some(CARD_HEADER_SLOT),
        text: "Sign Up",
    },
    Markup::Element {
        kind: ComponentKind::Input,
        slot: Some(CARD_BODY_SLOT),
        attributes: &[("name", "username"), ("label", "Username")],
        content: None,
        children: &[],
    },
    Markup::Element {
        kind: ComponentKind::Input,
        slot: Some(CARD_BODY_SLOT),
        attributes: &[("name", "email"), ("label", "Email")],
        content: None,
        children: &[],
    },
    Markup::Element {
        kind: ComponentKind::Input,
        slot: Some(CARD_BODY_SLOT),
        attributes: &[("name", "password"), ("label", "Password"), ("type", "password")],
        content: None,
        children: &[],
    },
    Markup::Element {
        kind: ComponentKind::Input,
        slot: Some(CARD_BODY_SLOT),
        attributes: &[
            ("name", "password-repeat"),
            ("label", "Password Repeat"),
            ("type", "password"),
        ],
        content: None,
        children: &[],
    },
    Markup::Element {
        kind: ComponentKind::Button,
        slot: Some(CARD_BODY_SLOT),
        attributes: &[],
        content: Some("Register"),
        children: &[],
    },
];

const FORM: Template = Template {
    tag: "app-form",
    observed_attributes: &[],
    slots: &[],
    loading_label: None,
    markup: &[Markup::Element {
        kind: ComponentKind::Card,
        slot: None,
        attributes: &[],
        content: None,
        children: FORM_CARD_CHILDREN,
    }],
};

fn definition(kind: ComponentKind) -> Template {
    match kind {
        ComponentKind::Card => CARD,
        ComponentKind::Input => INPUT,
        ComponentKind::Button => BUTTON,
        ComponentKind::Form => FORM,
    }
}

pub struct TemplateTable {
    entries: [Template; 4],
}

impl TemplateTable {
    pub fn get(&self, kind: ComponentKind) -> &Template {
        &self.entries[kind.index()]
    }
}

static TEMPLATES: OnceLock<TemplateTable> = OnceLock::new();

pub fn templates() -> &'static TemplateTable {
    TEMPLATES.get_or_init(|| {
        tracing::debug!("building component template table");
        TemplateTable {
            entries: ComponentKind::ALL.map(definition),
        }
    })
}

pub fn template(kind: ComponentKind) -> &'static Template {
    templates().get(kind)
}
