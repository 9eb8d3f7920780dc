use std::collections::BTreeMap;

/// A change to an observed attribute, handed to `Element::attribute_changed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeChange {
    pub name: String,
    pub old: Option<String>,
    pub new: Option<String>,
}

/// Declarative attributes of a component host.
///
/// Writes to names in the observed list report an [`AttributeChange`] (even
/// when the value is unchanged); writes to any other name are silent.
#[derive(Debug, Clone)]
pub struct AttributeMap {
    values: BTreeMap<String, String>,
    observed: &'static [&'static str],
}

impl AttributeMap {
    pub fn new(observed: &'static [&'static str]) -> Self {
        Self {
            values: BTreeMap::new(),
            observed,
        }
    }

    pub fn with_values<'a>(
        observed: &'static [&'static str],
        values: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let mut map = Self::new(observed);
        for (name, value) in values {
            map.values.insert(name.to_string(), value.to_string());
        }
        map
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Option<AttributeChange> {
        let value = value.into();
        let old = self.values.insert(name.to_string(), value.clone());
        self.change(name, old, Some(value))
    }

    pub fn remove(&mut self, name: &str) -> Option<AttributeChange> {
        let old = self.values.remove(name);
        // Removing an absent attribute is not a change.
        old.as_ref()?;
        self.change(name, old, None)
    }

    fn change(
        &self,
        name: &str,
        old: Option<String>,
        new: Option<String>,
    ) -> Option<AttributeChange> {
        self.observed.contains(&name).then(|| AttributeChange {
            name: name.to_string(),
            old,
            new,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_observed_attributes_report_changes() {
        let mut attrs = AttributeMap::new(&["help"]);
        let change = attrs.set("help", "Too short").unwrap();
        assert_eq!(change.old, None);
        assert_eq!(change.new.as_deref(), Some("Too short"));

        assert!(attrs.set("validation", "invalid").is_none());
        assert_eq!(attrs.get("validation"), Some("invalid"));
    }

    #[test]
    fn test_same_value_still_reports() {
        let mut attrs = AttributeMap::new(&["inprogress"]);
        attrs.set("inprogress", "true");
        let again = attrs.set("inprogress", "true").unwrap();
        assert_eq!(again.old.as_deref(), Some("true"));
        assert_eq!(again.new.as_deref(), Some("true"));
    }

    #[test]
    fn test_remove() {
        let mut attrs = AttributeMap::with_values(&["inprogress"], [("inprogress", "")]);
        assert!(attrs.has("inprogress"));
        let change = attrs.remove("inprogress").unwrap();
        assert_eq!(change.old.as_deref(), Some(""));
        assert_eq!(change.new, None);
        assert!(attrs.remove("inprogress").is_none());
    }
}
